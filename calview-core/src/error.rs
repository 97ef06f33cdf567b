//! Error types for calview.

use thiserror::Error;

/// Errors that can occur while loading calview inputs.
///
/// View operations themselves never fail; only reading configuration and
/// event lists from disk can.
#[derive(Error, Debug)]
pub enum CalviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse events: {0}")]
    EventParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calview operations.
pub type CalviewResult<T> = Result<T, CalviewError>;
