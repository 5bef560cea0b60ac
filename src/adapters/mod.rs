// Adapters layer: concrete vet stores behind the VetStore port.

pub mod file;
pub mod http;
pub mod memory;

use crate::core::{ConfigProvider, Result, VetStore};
use crate::utils::error::VetError;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub use file::JsonFileVetStore;
pub use http::HttpVetStore;
pub use memory::InMemoryVetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Memory,
    File,
    Http,
}

impl FromStr for StoreKind {
    type Err = VetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            "http" => Ok(StoreKind::Http),
            other => Err(VetError::InvalidConfigValue {
                field: "store.type".to_string(),
                value: other.to_string(),
                reason: "Valid store types: memory, file, http".to_string(),
            }),
        }
    }
}

/// Builds the store the configuration asks for.
pub fn build_store<C: ConfigProvider>(config: &C) -> Result<Arc<dyn VetStore>> {
    let kind: StoreKind = config.store_kind().parse()?;
    tracing::debug!("Using {:?} vet store", kind);

    let store: Arc<dyn VetStore> = match kind {
        StoreKind::Memory => Arc::new(InMemoryVetStore::with_sample_data()),
        StoreKind::File => {
            let path = config.data_file().ok_or_else(|| VetError::MissingConfig {
                field: "store.path".to_string(),
            })?;
            Arc::new(JsonFileVetStore::new(path))
        }
        StoreKind::Http => {
            let endpoint = config.endpoint().ok_or_else(|| VetError::MissingConfig {
                field: "store.endpoint".to_string(),
            })?;
            let timeout = Duration::from_secs(config.timeout_seconds());
            Arc::new(HttpVetStore::new(endpoint, timeout)?.with_headers(config.headers()))
        }
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vet_service::VetService;

    struct TestConfig {
        kind: &'static str,
        data_file: Option<&'static str>,
        endpoint: Option<&'static str>,
    }

    impl ConfigProvider for TestConfig {
        fn store_kind(&self) -> &str {
            self.kind
        }

        fn data_file(&self) -> Option<&str> {
            self.data_file
        }

        fn endpoint(&self) -> Option<&str> {
            self.endpoint
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }

        fn headers(&self) -> Vec<(String, String)> {
            Vec::new()
        }

        fn output_format(&self) -> &str {
            "table"
        }
    }

    fn config(kind: &'static str) -> TestConfig {
        TestConfig {
            kind,
            data_file: None,
            endpoint: None,
        }
    }

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!("Memory".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert_eq!("file".parse::<StoreKind>().unwrap(), StoreKind::File);
        assert_eq!("HTTP".parse::<StoreKind>().unwrap(), StoreKind::Http);
        assert!("postgres".parse::<StoreKind>().is_err());
    }

    #[tokio::test]
    async fn test_build_memory_store() {
        let store = build_store(&config("memory")).unwrap();
        let views = VetService::new(store).list_all().await.unwrap();
        assert_eq!(views.len(), 6);
        assert_eq!(views[0].full_name(), "James Carter");
    }

    #[test]
    fn test_build_file_store_requires_path() {
        let err = build_store(&config("file")).err().unwrap();
        assert!(matches!(err, VetError::MissingConfig { field } if field == "store.path"));

        let with_path = TestConfig {
            data_file: Some("vets.json"),
            ..config("file")
        };
        assert!(build_store(&with_path).is_ok());
    }

    #[test]
    fn test_build_http_store_requires_endpoint() {
        let err = build_store(&config("http")).err().unwrap();
        assert!(matches!(err, VetError::MissingConfig { field } if field == "store.endpoint"));
    }
}
