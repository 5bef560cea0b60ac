use thiserror::Error;

#[derive(Error, Debug)]
pub enum VetError {
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidation { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised while reading from the vet store.
    Upstream,
    Configuration,
    Output,
}

impl VetError {
    pub fn store(message: impl Into<String>) -> Self {
        VetError::Store {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            VetError::Store { .. }
            | VetError::Http(_)
            | VetError::Io(_)
            | VetError::Serialization(_) => ErrorCategory::Upstream,
            VetError::Csv(_) | VetError::Output { .. } => ErrorCategory::Output,
            VetError::Config { .. }
            | VetError::InvalidConfigValue { .. }
            | VetError::MissingConfig { .. }
            | VetError::ConfigValidation { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_upstream(&self) -> bool {
        self.category() == ErrorCategory::Upstream
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VetError::Store { .. } => "Check that the vet store is reachable and returns vet data",
            VetError::Http(_) => "Check the endpoint URL, network access and timeout settings",
            VetError::Io(_) => "Check that the data file exists and is readable",
            VetError::Serialization(_) => {
                "Vet data must be a JSON array or an object with a 'vetList' field"
            }
            VetError::Csv(_) | VetError::Output { .. } => "Try a different output format",
            VetError::Config { .. }
            | VetError::InvalidConfigValue { .. }
            | VetError::MissingConfig { .. }
            | VetError::ConfigValidation { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Upstream => format!("Could not load veterinarians: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not render veterinarians: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, VetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(VetError::store("down").category(), ErrorCategory::Upstream);
        assert!(VetError::store("down").is_upstream());

        let missing = VetError::MissingConfig {
            field: "store.endpoint".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert!(!missing.is_upstream());
    }

    #[test]
    fn test_output_errors_are_not_configuration_errors() {
        let err = VetError::Output {
            message: "CSV output is not valid UTF-8".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert!(err
            .user_friendly_message()
            .starts_with("Could not render veterinarians"));
    }

    #[test]
    fn test_user_friendly_message() {
        let message = VetError::store("connection refused").user_friendly_message();
        assert!(message.starts_with("Could not load veterinarians"));
        assert!(message.contains("connection refused"));
    }
}
