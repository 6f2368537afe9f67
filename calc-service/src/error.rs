//! Error types for the calculator service

use thiserror::Error;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Error, Debug)]
pub enum Error {
    /// Request is missing required fields
    #[error("Invalid request: {0}")]
    Request(String),

    /// Validation or computation failure
    #[error(transparent)]
    Engine(#[from] calc_engine::Error),

    /// History ledger error
    #[error("Ledger error: {0}")]
    Ledger(#[from] history_ledger::Error),

    /// Metrics registration error
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Logging subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calc_engine::ValidationError> for Error {
    fn from(err: calc_engine::ValidationError) -> Self {
        Error::Engine(err.into())
    }
}

impl Error {
    /// True for failures caused by the caller's input, as opposed to setup failures
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Request(_) | Error::Engine(_))
    }
}
