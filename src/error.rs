//! Error types for color blending operations

use thiserror::Error;

/// Result type alias for color blending operations
pub type Result<T> = std::result::Result<T, ColorMixError>;

/// Error types for color blending operations
#[derive(Error, Debug)]
pub enum ColorMixError {
    /// Input/output errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token that does not match any supported color format
    #[error("Invalid color '{token}': {reason}")]
    InvalidColor { token: String, reason: String },

    /// No token in the input produced a usable color
    #[error("No valid colors to blend")]
    EmptyBatch,

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Numeric failure while computing a blended color
    #[error("Processing error: {0}")]
    Processing(String),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ColorMixError {
    /// Create a new invalid color error
    pub fn invalid_color<T: Into<String>, R: Into<String>>(token: T, reason: R) -> Self {
        Self::InvalidColor {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a new processing error
    pub fn processing<S: Into<String>>(msg: S) -> Self {
        Self::Processing(msg.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: &std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Create configuration error with valid ranges
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        valid_range: &str,
        recommended: Option<T>,
    ) -> Self {
        let recommendation = match recommended {
            Some(rec) => format!(" Recommended: {}", rec),
            None => String::new(),
        };

        Self::InvalidConfig(format!(
            "Invalid {}: {} (valid range: {}).{}",
            parameter, value, valid_range, recommendation
        ))
    }
}
