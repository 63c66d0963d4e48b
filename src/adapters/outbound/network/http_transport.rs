use crate::ports::outbound::ApiTransport;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HttpApiTransport adapter over reqwest
///
/// Implements the ApiTransport port with a shared async reqwest client.
/// Query parameters are serialized and percent-escaped by reqwest, so
/// callers can pass domains containing special characters verbatim.
///
/// No retry logic: a single transport or parse failure propagates to
/// the caller.
#[derive(Debug)]
pub struct HttpApiTransport {
    client: reqwest::Client,
}

impl HttpApiTransport {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new transport with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("builtwith/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn build_request(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<reqwest::Request> {
        Ok(self.client.get(endpoint).query(query).build()?)
    }
}

// Note: no Default implementation. Default::default() would panic if
// client creation fails. Use HttpApiTransport::new() and handle the Result.

#[async_trait]
impl ApiTransport for HttpApiTransport {
    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let request = self.build_request(endpoint, query)?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            anyhow::bail!("BuiltWith API returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }
}
