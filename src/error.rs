//! Error types for color decoding and palette scanning.

use thiserror::Error;

/// Error codes for color processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed hex color (-1)
    InvalidFormat = -1,
    /// General parse error (-3)
    ParseError = -3,
    /// No colors in dictionary (-11)
    NoColorsFound = -11,
    /// Duplicate resource key (E200)
    DuplicateKey = 200,
    /// Validation reported errors (E201)
    ValidationFailed = 201,
}

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid color format '{value}': {message}")]
    InvalidFormat { value: String, message: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Color element without x:Key at line {line}")]
    MissingKey { line: usize },

    #[error("Duplicate resource key: {key}")]
    DuplicateKey { key: String },

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("No colors found in resource dictionary")]
    NoColorsFound,

    #[error("Palette validation failed with {count} error(s)")]
    ValidationFailed { count: usize },
}

impl ColorError {
    pub(crate) fn invalid_format(value: &str, message: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ColorError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ColorError::ParseError { .. } => ErrorCode::ParseError,
            ColorError::MissingKey { .. } => ErrorCode::ParseError,
            ColorError::Xml(_) => ErrorCode::ParseError,
            ColorError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            ColorError::NoColorsFound => ErrorCode::NoColorsFound,
            ColorError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Check if this is a hex decoding failure.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ColorError::InvalidFormat { .. })
    }
}

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
