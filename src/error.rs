//! Error handling for Gradual Blur
//!
//! Layer generation itself is total over a validated configuration; errors
//! only come from rejecting a configuration or from loading one.

use thiserror::Error;

/// Result type alias for Gradual Blur operations
pub type Result<T> = std::result::Result<T, BlurError>;

/// Main error type for Gradual Blur operations
#[derive(Error, Debug)]
pub enum BlurError {
    // Configuration Errors
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BlurError {
    /// Shorthand for an `InvalidConfiguration` error
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BlurError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            BlurError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            BlurError::UnknownPreset { .. } => "UNKNOWN_PRESET",
            BlurError::Io(_) => "IO_ERROR",
            BlurError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => match *field {
                "div_count" => "Use at least one layer",
                "strength" => "Use a finite, non-negative strength",
                _ => "Check the configuration values and try again",
            },
            Self::UnknownPreset { .. } => "Run 'gradual-blur presets' to list the available presets",
            Self::Io(_) => "Check that the config file exists and is readable",
            Self::Serialization(_) => "Check that the config file is valid JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = BlurError::invalid("div_count", "must be at least 1");
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let err = BlurError::UnknownPreset {
            name: "fuzzy".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_PRESET");
    }

    #[test]
    fn test_error_display() {
        let err = BlurError::invalid("div_count", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: div_count must be at least 1, got 0"
        );
    }

    #[test]
    fn test_recovery_hints() {
        let err = BlurError::invalid("div_count", "must be at least 1");
        assert_eq!(err.recovery_hint(), "Use at least one layer");

        let err = BlurError::invalid("opacity", "must be finite");
        assert!(!err.recovery_hint().is_empty());
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BlurError = json_err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
