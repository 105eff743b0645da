use std::time::Duration;

use async_trait::async_trait;

use crate::domain::balance::{BalanceError, BalanceLookup, BalanceRequest, BalanceResponse};

/// HTTP adapter for the external balance API
///
/// POSTs the request as JSON and decodes `{"Balance": ..}` from the reply.
/// No retries; each call is bounded by the configured timeout.
#[derive(Clone)]
pub struct HttpBalanceClient {
    client: reqwest::Client,
    url: String,
}

impl HttpBalanceClient {
    /// Creates a client for `url` with a per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BalanceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BalanceLookup for HttpBalanceClient {
    async fn lookup(&self, request: &BalanceRequest) -> Result<BalanceResponse, BalanceError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BalanceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| BalanceError::Decode(e.to_string()))
    }
}
