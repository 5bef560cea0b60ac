use crate::utils::error::{Result, VetError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn rejected(field: &str, value: impl ToString, reason: impl Into<String>) -> VetError {
    VetError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The vet store endpoint: an absolute http(s) URL with a host.
pub fn store_endpoint(field: &str, endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| rejected(field, endpoint, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(rejected(
            field,
            endpoint,
            format!("vet store must be reached over http or https, not {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(rejected(field, endpoint, "endpoint has no host"));
    }
    Ok(url)
}

pub fn data_file(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() || path.contains('\0') {
        return Err(rejected(field, path, "not a usable file path"));
    }
    Ok(())
}

pub fn timeout_seconds(field: &str, seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(rejected(field, seconds, "a zero timeout would fail every request"));
    }
    Ok(())
}

pub fn present<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| VetError::MissingConfig {
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_endpoint() {
        let url = store_endpoint("store.endpoint", "https://clinic.example/vets").unwrap();
        assert_eq!(url.path(), "/vets");
        assert!(store_endpoint("store.endpoint", "http://localhost:8080/vets").is_ok());

        assert!(store_endpoint("store.endpoint", "").is_err());
        assert!(store_endpoint("store.endpoint", "not a url").is_err());
        let err = store_endpoint("store.endpoint", "ftp://clinic.example/vets").unwrap_err();
        assert!(matches!(err, VetError::InvalidConfigValue { field, .. } if field == "store.endpoint"));
    }

    #[test]
    fn test_data_file() {
        assert!(data_file("store.path", "data/vets.json").is_ok());
        assert!(data_file("store.path", "").is_err());
        assert!(data_file("store.path", "   ").is_err());
        assert!(data_file("store.path", "bad\0path").is_err());
    }

    #[test]
    fn test_timeout_seconds() {
        assert!(timeout_seconds("store.timeout_seconds", 10).is_ok());
        assert!(timeout_seconds("store.timeout_seconds", 0).is_err());
    }

    #[test]
    fn test_present() {
        assert_eq!(present("store.path", Some("vets.json")).unwrap(), "vets.json");

        let err = present::<&str>("store.path", None).unwrap_err();
        assert!(matches!(err, VetError::MissingConfig { field } if field == "store.path"));
    }
}
