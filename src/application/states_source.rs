// Upstream source trait for raw state vectors
use crate::domain::upstream::UpstreamResponse;
use async_trait::async_trait;

#[async_trait]
pub trait StatesSource: Send + Sync {
    /// Issue one GET against the states endpoint (collector variant)
    async fn fetch_states(&self) -> anyhow::Result<UpstreamResponse>;

    /// Same request, carrying the configured bearer token if there is one
    async fn fetch_states_authorized(&self) -> anyhow::Result<UpstreamResponse>;
}
