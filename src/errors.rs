//! Error types for rapid_summary
//!
//! The ranking engine itself degrades gracefully (empty input, oversized
//! summary lengths and non-convergence are all valid outcomes), so errors
//! only surface from strict configuration checks and the JSON payload layer.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for rapid_summary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummaryError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from configuration validation
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::invalid_config("damping must be between 0 and 1");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("damping"));

        let err = SummaryError::serialization("unexpected token");
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_is_invalid_config() {
        assert!(SummaryError::invalid_config("x").is_invalid_config());
        assert!(!SummaryError::serialization("x").is_invalid_config());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummaryError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }
}
