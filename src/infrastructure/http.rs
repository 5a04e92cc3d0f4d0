use crate::domain::gateway::GatewayRequest;
use crate::domain::ports::GatewayTransport;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts requests to the gateway over HTTPS.
///
/// `Clone` shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PaymentError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn send(&self, request: &GatewayRequest) -> Result<String> {
        let body = request.encode()?;
        tracing::debug!(url = %request.url, kind = %request.kind, "posting to gateway");

        let response = self
            .client
            .post(&request.url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))
    }
}
