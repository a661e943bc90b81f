//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// OS name not recognized by `OsFamily::from_str`
    #[error("Unknown operating system: {0}")]
    UnknownOs(String),

    /// Platform not supported for the requested operation
    #[error("Platform not supported: {0}")]
    Unsupported(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
