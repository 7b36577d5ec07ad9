//! Core error types for the Capview engine.
//!
//! Missing fields, zero denominators, unknown currencies and empty inputs are
//! normal outcomes of the engine and never surface here. Only input that cannot
//! be coerced into the expected record shape, invalid parameters, and failures
//! of the external collaborators are reported as errors.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine and its collaborators.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures reported by the record and resource collaborators.
///
/// Callers of the collaborators treat every variant as "no data" for the
/// affected entity; they are kept distinct for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(String),

    /// The remote API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be read or decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Validation errors for caller-supplied parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedRecord(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
