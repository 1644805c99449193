//! Request executor for the SES query API.

use chrono::{DateTime, Utc};
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::Method;
use std::sync::Arc;
use tracing::{debug, trace};

use super::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::config::SesConfig;
use crate::error::SesResult;
use crate::params::{self, Parameters};
use crate::signing;

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Executes signed, form-encoded requests against the SES endpoint.
///
/// The client never retries and never inspects the status code: the full
/// body is handed back so the caller can pick the right decoder.
///
/// # Examples
///
/// ```rust,no_run
/// use integrations_aws_ses_query::config::SesConfig;
/// use integrations_aws_ses_query::http::SesHttpClient;
/// use integrations_aws_ses_query::params::Parameters;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SesConfig::builder()
///     .region("us-east-1")
///     .credentials("access_key", "secret_key")
///     .build()?;
///
/// let client = SesHttpClient::new(config)?;
/// let response = client.execute("/", "ListIdentities", &Parameters::new()).await?;
/// println!("status {}", response.status);
/// # Ok(())
/// # }
/// ```
pub struct SesHttpClient {
    config: Arc<SesConfig>,
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl SesHttpClient {
    /// Create a client backed by [`ReqwestTransport`].
    pub fn new(config: SesConfig) -> SesResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(
            config.timeout,
            config.connect_timeout,
        )?) as Arc<dyn Transport>;

        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        let endpoint = config.ses_endpoint();
        Self {
            config: Arc::new(config),
            transport,
            endpoint,
        }
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Build the signed request for `action`, dated `now`.
    ///
    /// The URL is the endpoint with `path` appended verbatim.
    pub fn build_request(
        &self,
        path: &str,
        action: &str,
        parameters: &Parameters,
        now: DateTime<Utc>,
    ) -> HttpRequest {
        let url = format!("{}{}", self.endpoint, path);
        let body = params::encode(action, parameters);

        let mut request = HttpRequest::new(Method::POST, url)
            .with_header(CONTENT_TYPE.as_str(), FORM_CONTENT_TYPE)
            .with_body(body);

        let auth = signing::auth_headers_at(&self.config.credentials, now);
        for (name, value) in auth.pairs() {
            request = request.with_header(name, value);
        }

        if let Some(ref user_agent) = self.config.user_agent {
            request = request.with_header(USER_AGENT.as_str(), user_agent.as_str());
        }

        request
    }

    /// Sign and send one request, returning the response whatever its status.
    ///
    /// # Errors
    ///
    /// Only transport failures are returned as errors.
    pub async fn execute(
        &self,
        path: &str,
        action: &str,
        parameters: &Parameters,
    ) -> SesResult<HttpResponse> {
        let request = self.build_request(path, action, parameters, Utc::now());
        debug!(action, url = %request.url, "Sending SES request");

        let response = self.transport.send(request).await?;

        debug!(
            action,
            status = response.status,
            body_len = response.body.len(),
            "Received SES response"
        );
        trace!(body = %String::from_utf8_lossy(&response.body), "SES response body");

        Ok(response)
    }
}

impl std::fmt::Debug for SesHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesHttpClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
