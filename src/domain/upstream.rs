// Upstream response model shared by the collector and the record shaper
use super::state_vector::StateVector;
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`states` field is missing")]
    MissingStates,

    #[error("`states` field is not an array")]
    StatesNotAnArray,
}

/// An already-issued upstream response: status plus raw body
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// State vectors parsed out of one response
#[derive(Debug, Clone, Default)]
pub struct StateBatch {
    pub vectors: Vec<StateVector>,
    /// Entries that could not be read as a state vector
    pub skipped: usize,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub async fn from_reqwest(response: reqwest::Response) -> reqwest::Result<Self> {
        let status = response.status();
        let body = response.bytes().await?;
        Ok(Self::new(status, body))
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the `states` array. A `null` array means no aircraft are tracked.
    pub fn states(&self) -> Result<StateBatch, PayloadError> {
        let body: Value = serde_json::from_slice(&self.body)?;

        let raw = match body.get("states") {
            None => return Err(PayloadError::MissingStates),
            Some(Value::Null) => return Ok(StateBatch::default()),
            Some(Value::Array(raw)) => raw,
            Some(_) => return Err(PayloadError::StatesNotAnArray),
        };

        let mut batch = StateBatch::default();
        for entry in raw {
            match StateVector::from_raw(entry) {
                Some(sv) => batch.vectors.push(sv),
                None => batch.skipped += 1,
            }
        }

        Ok(batch)
    }
}
