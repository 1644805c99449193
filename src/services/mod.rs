//! Service objects grouping the SES query API operations.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Service objects                │
//! │  - identities: verify, list, delete, status │
//! │  - emails: formatted and raw sending        │
//! └──────────────────────┬──────────────────────┘
//!                        │  Parameters
//!                        ▼
//! ┌─────────────────────────────────────────────┐
//! │                SesHttpClient                │
//! │     (form encoding, AWS3-HTTPS signing)     │
//! └──────────────────────┬──────────────────────┘
//!                        │  XML body + status
//!                        ▼
//! ┌─────────────────────────────────────────────┐
//! │                 xml decoders                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use integrations_aws_ses_query::config::SesConfig;
//! use integrations_aws_ses_query::http::SesHttpClient;
//! use integrations_aws_ses_query::services::IdentityService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SesConfig::builder()
//!     .region("us-east-1")
//!     .credentials("access_key", "secret_key")
//!     .build()?;
//!
//! let identities = IdentityService::new(Arc::new(SesHttpClient::new(config)?));
//! identities.verify_email_identity("sender@example.com").await?;
//! # Ok(())
//! # }
//! ```

pub mod emails;
pub mod identities;

pub use emails::EmailService;
pub use identities::IdentityService;

use crate::error::SesResult;
use crate::http::SesHttpClient;
use crate::params::Parameters;
use crate::xml;

/// Every action is posted to the endpoint root.
pub const QUERY_PATH: &str = "/";

/// Common trait for all SES services.
pub trait SesService: Send + Sync {
    /// Get a reference to the HTTP client.
    fn http_client(&self) -> &SesHttpClient;
}

/// Execute `action` and decode the body with `decoder`.
pub(crate) async fn invoke<S, T, F>(
    service: &S,
    action: &str,
    parameters: Parameters,
    decoder: F,
) -> SesResult<T>
where
    S: SesService + ?Sized,
    F: FnOnce(&[u8]) -> SesResult<T>,
{
    let response = service
        .http_client()
        .execute(QUERY_PATH, action, &parameters)
        .await?;
    xml::decode_response(&response.body, response.status, decoder)
}
