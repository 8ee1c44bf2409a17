//! Core error types for the folio client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest) are converted to these types by the client crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the folio client.
///
/// Every failure path returns the caller to its last good state: there are
/// no retries and no partial application of multi-step operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP failure on a portfolio API call. Surfaced once,
    /// never retried.
    #[error("Portfolio API request failed: {0}")]
    Gateway(String),

    /// A local backup file could not be parsed. Caught before any network
    /// call is made.
    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    /// A mutation was attempted while the dashboard is showing a
    /// historical snapshot.
    #[error("a historical snapshot is selected; holdings are read-only")]
    ReadOnlyView,

    /// A holding or snapshot id did not resolve.
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
