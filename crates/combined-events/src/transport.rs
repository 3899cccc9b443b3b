//! HTTP transport capability and its reqwest-backed implementation.

use std::time::Duration;

use anyhow::Context;
use thiserror::Error;

/// Raised by a transport for connection errors, timeouts and non-2xx
/// responses.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Capability for issuing GET requests and reading the body.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, TransportError>;
}

impl<T: HttpTransport> HttpTransport for &T {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, TransportError> {
        (**self).get(url, headers).await
    }
}

/// Transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a client-level request timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
