//! SES client implementation.
//!
//! [`SesClient`] is the entry point for every operation. It owns one
//! [`SesHttpClient`] and hands out service objects that are created on first
//! access.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SesClient::builder()
//!     .region("us-east-1")
//!     .credentials("AKID", "SECRET")
//!     .build()?;
//!
//! let request = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello")
//!     .text("Email body")
//!     .build()?;
//!
//! let response = client.send_email(&request).await?;
//! println!("Message ID: {}", response.message_id);
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{SesConfig, SesConfigBuilder};
use crate::credentials::AwsCredentials;
use crate::error::SesResult;
use crate::http::{SesHttpClient, Transport};
use crate::services::{EmailService, IdentityService};
use crate::types::{
    DeleteIdentityResponse, GetIdentityVerificationAttributesResponse, IdentityType,
    ListIdentitiesResponse, SendEmailRequest, SendEmailResponse, SendRawEmailRequest,
    SendRawEmailResponse, VerifyDomainIdentityResponse, VerifyEmailIdentityResponse,
};

/// Client for the SES query API.
///
/// # Thread Safety
///
/// `SesClient` is `Send + Sync`. Configuration and credentials are fixed at
/// construction, so clones can be used from any number of tasks at once.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_aws_ses_query::SesClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SesClient::from_env()?;
///
/// let client_clone = client.clone();
/// tokio::spawn(async move {
///     let _ = client_clone.verify_email_identity("sender@example.com").await;
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SesClient {
    http_client: Arc<SesHttpClient>,
    identity_service: OnceCell<IdentityService>,
    email_service: OnceCell<EmailService>,
}

impl SesClient {
    /// Create a client from a validated configuration.
    ///
    /// No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Transport` if the HTTP client cannot be initialized.
    pub fn new(config: SesConfig) -> SesResult<Self> {
        Ok(Self::from_http_client(SesHttpClient::new(config)?))
    }

    /// Create a client that sends through a custom transport.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_http_client(SesHttpClient::with_transport(config, transport))
    }

    fn from_http_client(http_client: SesHttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
            identity_service: OnceCell::new(),
            email_service: OnceCell::new(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// See [`SesConfig::from_env`].
    pub fn from_env() -> SesResult<Self> {
        Self::new(SesConfig::from_env()?)
    }

    /// Create a client builder.
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::new()
    }

    /// The client configuration.
    pub fn config(&self) -> &SesConfig {
        self.http_client.config()
    }

    /// The underlying request executor.
    pub fn http_client(&self) -> &SesHttpClient {
        &self.http_client
    }

    /// Identity operations.
    pub fn identities(&self) -> &IdentityService {
        self.identity_service
            .get_or_init(|| IdentityService::new(Arc::clone(&self.http_client)))
    }

    /// Email sending operations.
    pub fn emails(&self) -> &EmailService {
        self.email_service
            .get_or_init(|| EmailService::new(Arc::clone(&self.http_client)))
    }

    /// Start verification of an email address.
    pub async fn verify_email_identity(
        &self,
        email_address: &str,
    ) -> SesResult<VerifyEmailIdentityResponse> {
        self.identities().verify_email_identity(email_address).await
    }

    /// Start verification of a domain.
    pub async fn verify_domain_identity(
        &self,
        domain: &str,
    ) -> SesResult<VerifyDomainIdentityResponse> {
        self.identities().verify_domain_identity(domain).await
    }

    /// List identities.
    pub async fn list_identities(
        &self,
        identity_type: IdentityType,
        max_items: Option<u32>,
        next_token: Option<&str>,
    ) -> SesResult<ListIdentitiesResponse> {
        self.identities()
            .list_identities(identity_type, max_items, next_token)
            .await
    }

    /// Delete an identity.
    pub async fn delete_identity(&self, identity: &str) -> SesResult<DeleteIdentityResponse> {
        self.identities().delete_identity(identity).await
    }

    /// Fetch verification attributes for the given identities.
    pub async fn get_identity_verification_attributes(
        &self,
        identities: &[String],
    ) -> SesResult<GetIdentityVerificationAttributesResponse> {
        self.identities()
            .get_identity_verification_attributes(identities)
            .await
    }

    /// Send a formatted email.
    pub async fn send_email(&self, request: &SendEmailRequest) -> SesResult<SendEmailResponse> {
        self.emails().send_email(request).await
    }

    /// Send a raw MIME message.
    pub async fn send_raw_email(
        &self,
        request: &SendRawEmailRequest,
    ) -> SesResult<SendRawEmailResponse> {
        self.emails().send_raw_email(request).await
    }
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}

/// Builder for creating SES clients.
///
/// # Example
///
/// ```rust
/// use integrations_aws_ses_query::SesClient;
/// use std::time::Duration;
///
/// let client = SesClient::builder()
///     .region("us-east-1")
///     .credentials("AKID", "SECRET")
///     .timeout(Duration::from_secs(60))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.http_client().endpoint(), "https://email.us-east-1.amazonaws.com");
/// ```
#[derive(Default)]
pub struct SesClientBuilder {
    config: SesConfigBuilder,
    transport: Option<Arc<dyn Transport>>,
}

impl SesClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config = self.config.region(region);
        self
    }

    /// Override the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.endpoint(endpoint);
        self
    }

    /// Set static credentials.
    pub fn credentials(mut self, access_key: &str, secret_key: &str) -> Self {
        self.config = self.config.credentials(access_key, secret_key);
        self
    }

    /// Set an already constructed credential pair.
    pub fn aws_credentials(mut self, credentials: AwsCredentials) -> Self {
        self.config = self.config.aws_credentials(credentials);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config = self.config.timeout(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.config = self.config.connect_timeout(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config = self.config.user_agent(ua);
        self
    }

    /// Send requests through a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the SES client.
    ///
    /// # Errors
    ///
    /// - `SesError::UnsupportedRegion` for a region without an SES endpoint
    /// - `SesError::Configuration` for missing fields or invalid timeouts
    pub fn build(self) -> SesResult<SesClient> {
        let config = self.config.build()?;
        match self.transport {
            Some(transport) => Ok(SesClient::with_transport(config, transport)),
            None => SesClient::new(config),
        }
    }
}
