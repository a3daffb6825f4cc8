//! Persistence error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("lead store misconfigured: {0}")]
    Configuration(String),

    #[error("lead store unreachable: {0}")]
    Connection(String),

    #[error("lead write timed out")]
    Timeout,

    #[error("lead store rejected write ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected lead store response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for PersistenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PersistenceError::Timeout
        } else {
            PersistenceError::Connection(err.without_url().to_string())
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::InvalidResponse(err.to_string())
    }
}
