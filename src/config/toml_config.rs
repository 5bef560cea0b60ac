use crate::core::ConfigProvider;
use crate::utils::error::{Result, VetError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VetError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VETS_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VetError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn store_kind(&self) -> &str {
        &self.store.r#type
    }

    fn data_file(&self) -> Option<&str> {
        self.store.path.as_deref()
    }

    fn endpoint(&self) -> Option<&str> {
        self.store.endpoint.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.store.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.store
            .headers
            .as_ref()
            .map(|h| h.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.format.as_str())
            .unwrap_or("table")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_http_config() {
        let toml_content = r#"
            [store]
            type = "http"
            endpoint = "http://localhost:8080/vets"
            timeout_seconds = 3

            [store.headers]
            Accept = "application/json"
            X-Clinic = "north"

            [output]
            format = "json"

            [logging]
            verbose = true
        "#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store_kind(), "http");
        assert_eq!(config.endpoint(), Some("http://localhost:8080/vets"));
        assert_eq!(config.timeout_seconds(), 3);
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.headers().len(), 2);
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let config = TomlConfig::from_toml_str("[store]\ntype = \"memory\"\n").unwrap();

        assert_eq!(config.output_format(), "table");
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.headers().is_empty());
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VET_LOOKUP_TEST_URL", "https://clinic.example/vets");

        let toml_content = r#"
            [store]
            type = "http"
            endpoint = "${VET_LOOKUP_TEST_URL}"
            headers = { Authorization = "${VET_LOOKUP_TEST_UNSET_TOKEN}" }
        "#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), Some("https://clinic.example/vets"));
        assert_eq!(
            config.headers(),
            vec![(
                "Authorization".to_string(),
                "${VET_LOOKUP_TEST_UNSET_TOKEN}".to_string()
            )]
        );

        std::env::remove_var("VET_LOOKUP_TEST_URL");
    }

    #[test]
    fn test_config_validation() {
        let missing_path = TomlConfig::from_toml_str("[store]\ntype = \"file\"\n").unwrap();
        assert!(matches!(
            missing_path.validate(),
            Err(VetError::MissingConfig { .. })
        ));

        let bad_url = TomlConfig::from_toml_str(
            "[store]\ntype = \"http\"\nendpoint = \"ftp://clinic.example\"\n",
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_type = TomlConfig::from_toml_str("[store]\ntype = \"ldap\"\n").unwrap();
        assert!(bad_type.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[store\ntype = ").unwrap_err();
        assert!(matches!(err, VetError::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\ntype = \"file\"\npath = \"vets.json\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.data_file(), Some("vets.json"));
        assert!(config.validate().is_ok());
    }
}
