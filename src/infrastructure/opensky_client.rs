// OpenSky Network states endpoint client
use crate::application::states_source::StatesSource;
use crate::domain::upstream::UpstreamResponse;
use crate::infrastructure::config::UpstreamSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;

#[derive(Debug, Clone)]
pub struct OpenSkyClient {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl OpenSkyClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            url: settings.url.clone(),
            token: settings.token.clone(),
        })
    }

    fn states_request(&self, authorized: bool) -> reqwest::RequestBuilder {
        let request = self.client.get(&self.url).header(ACCEPT, "application/json");

        // the states endpoint answers anonymously; the token is sent but not required
        match (&self.token, authorized) {
            (Some(token), true) => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<UpstreamResponse> {
        let response = request
            .send()
            .await
            .context("Failed to send request to OpenSky")?;

        UpstreamResponse::from_reqwest(response)
            .await
            .context("Failed to read OpenSky response body")
    }
}

#[async_trait]
impl StatesSource for OpenSkyClient {
    async fn fetch_states(&self) -> Result<UpstreamResponse> {
        self.send(self.states_request(false)).await
    }

    async fn fetch_states_authorized(&self) -> Result<UpstreamResponse> {
        self.send(self.states_request(true)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::DEFAULT_STATES_URL;
    use reqwest::header::AUTHORIZATION;

    fn settings(token: Option<&str>) -> UpstreamSettings {
        UpstreamSettings {
            url: DEFAULT_STATES_URL.to_string(),
            token: token.map(str::to_string),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_collector_request() {
        let client = OpenSkyClient::new(&settings(Some("secret"))).unwrap();
        let request = client.states_request(false).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), DEFAULT_STATES_URL);
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_authorized_request_carries_token() {
        let client = OpenSkyClient::new(&settings(Some("secret"))).unwrap();
        let request = client.states_request(true).build().unwrap();

        assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret");
    }

    #[test]
    fn test_authorized_request_without_token() {
        let client = OpenSkyClient::new(&settings(None)).unwrap();
        let request = client.states_request(true).build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
