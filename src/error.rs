//! Global error handling for dumpmd
//!
//! Fatal startup failures surface through [`DumpMdError`]. Failures inside the
//! walk are recoverable and end up as inline blocks in the output instead.

use std::io;
use thiserror::Error;

/// Global error type for dumpmd operations
#[derive(Error, Debug)]
pub enum DumpMdError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Embedded settings could not be parsed
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("The specified path does not exist: {0}")]
    PathNotFound(String),
}

/// Specialized Result type for dumpmd operations
pub type Result<T> = std::result::Result<T, DumpMdError>;

/// Creates a DumpMdError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpMdError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
