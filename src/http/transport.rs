//! Transport layer abstraction for HTTP communication.
//!
//! The executor only needs "send this request, give me the status, headers
//! and body". [`ReqwestTransport`] is the production implementation; tests
//! substitute a recording mock.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{HttpRequest, HttpResponse};
use crate::error::{SesError, SesResult};

/// Trait for HTTP transport implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and read the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Transport`] or [`SesError::Timeout`] when the
    /// exchange fails. Non-2xx statuses are not errors at this layer.
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse>;
}

/// Reqwest-based HTTP transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given timeouts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use integrations_aws_ses_query::http::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new(
    ///     Duration::from_secs(30),
    ///     Duration::from_secs(10),
    /// )
    /// .unwrap();
    /// ```
    pub fn new(timeout: Duration, connect_timeout: Duration) -> SesResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| SesError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse> {
        let mut builder = self.client.request(request.method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }
}
