//! Delivery errors

use thiserror::Error;

/// Why a send attempt failed. Every variant is recoverable by resubmitting.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("outbox I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("send task aborted: {0}")]
    Aborted(String),
}
