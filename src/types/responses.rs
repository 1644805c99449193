//! Typed results of the SES operations.

use std::collections::HashMap;

use super::identity::VerificationAttributes;
use crate::error::SesError;

/// Result of `VerifyEmailIdentity`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyEmailIdentityResponse {
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `VerifyDomainIdentity`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyDomainIdentityResponse {
    /// TXT record value to publish under `_amazonses.<domain>`.
    pub verification_token: String,
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `ListIdentities`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListIdentitiesResponse {
    /// Identities in the order the service returned them.
    pub identities: Vec<String>,
    /// Token for the next page, if there is one.
    pub next_token: Option<String>,
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `DeleteIdentity`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteIdentityResponse {
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `GetIdentityVerificationAttributes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetIdentityVerificationAttributesResponse {
    /// Attributes keyed by identity.
    pub verification_attributes: HashMap<String, VerificationAttributes>,
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `SendEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendEmailResponse {
    /// Identifier SES assigned to the message.
    pub message_id: String,
    /// Request ID reported by the service.
    pub request_id: String,
}

/// Result of `SendRawEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendRawEmailResponse {
    /// Identifier SES assigned to the message.
    pub message_id: String,
    /// Request ID reported by the service.
    pub request_id: String,
}

/// An `ErrorResponse` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    /// `Sender` or `Receiver`.
    pub error_type: String,
    /// Error code, e.g. `MessageRejected`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request ID reported by the service.
    pub request_id: String,
}

impl ErrorResponse {
    /// Convert into [`SesError::Api`], recording the HTTP status.
    pub fn into_error(self, status: u16) -> SesError {
        SesError::Api {
            error_type: self.error_type,
            code: self.code,
            message: self.message,
            request_id: self.request_id,
            status,
        }
    }
}
