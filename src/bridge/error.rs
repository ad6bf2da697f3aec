use chrono::{DateTime, Local};
use thiserror::Error;

/// Transport-level failure descriptor kept in the connect-error list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectError {
    pub at: DateTime<Local>,
    pub reason: String,
}

impl ConnectError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            reason: reason.into(),
        }
    }
}

/// Errors ending a transport session.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Handler closed the connection")]
    Closed,
}
