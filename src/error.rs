//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use thiserror::Error;

/// Main error type for genval operations
#[derive(Error, Debug)]
pub enum GenvalError {
    /// I/O errors (file missing, permission denied, read/write failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Length of an input disagrees with the dimension it must match
    #[error("Dimension mismatch: {what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// Argument outside its valid domain (thread count, dosage, ploidy)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Invalid data errors (duplicate ids, effect marker not genotyped)
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Parse errors
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Type alias for Results using GenvalError
pub type Result<T> = std::result::Result<T, GenvalError>;

impl GenvalError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            what: what.into(),
            expected,
            found,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
