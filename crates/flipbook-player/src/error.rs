//! Error types for animation loading and configuration

use flipbook_common::ParseEnumError;

/// Error type for flipbook loading operations
///
/// Playback itself never fails: controller operations ignore invalid requests
/// instead. Only reading and validating animation descriptions report errors.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON animation description
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while parsing a text flipbook
    #[error("Parse error on line {line}: {reason}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl FlipbookError {
    /// Creates a parse error for a text flipbook line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        FlipbookError::ParseError {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        FlipbookError::ConfigError(reason.into())
    }
}

impl From<ParseEnumError> for FlipbookError {
    fn from(e: ParseEnumError) -> Self {
        FlipbookError::ConfigError(e.to_string())
    }
}

impl From<String> for FlipbookError {
    fn from(s: String) -> Self {
        FlipbookError::Other(s)
    }
}

impl From<&str> for FlipbookError {
    fn from(s: &str) -> Self {
        FlipbookError::Other(s.to_string())
    }
}

/// Result type for flipbook operations
pub type Result<T> = std::result::Result<T, FlipbookError>;
