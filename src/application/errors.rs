// Application error type for the collection cycle
use crate::domain::upstream::PayloadError;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("malformed states payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    #[error("failed to write snapshot to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
