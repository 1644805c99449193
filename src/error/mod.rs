//! Error types for the SES query API client.
//!
//! Every failure is surfaced to the caller as a [`SesError`]; nothing is
//! retried or swallowed inside the client.
//!
//! # Error Taxonomy
//!
//! - [`SesError::UnsupportedRegion`]: the region is not in the endpoint table
//! - [`SesError::UnsupportedParameterType`]: a dynamic parameter bag carried a
//!   value that has no wire representation
//! - [`SesError::Transport`] / [`SesError::Timeout`]: the HTTP exchange failed
//! - [`SesError::MalformedResponse`]: the body is not the expected XML shape
//! - [`SesError::Api`]: the service answered with an `ErrorResponse` envelope
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::error::SesError;
//!
//! fn describe(error: &SesError) {
//!     if let Some(code) = error.error_code() {
//!         println!("SES error code: {}", code);
//!     }
//!     if let Some(request_id) = error.request_id() {
//!         println!("request id: {}", request_id);
//!     }
//! }
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::credentials::CredentialError;

/// Result type alias for SES operations.
pub type SesResult<T> = Result<T, SesError>;

/// Top-level error type for the SES query API client.
#[derive(Debug, Error)]
pub enum SesError {
    /// The region is not one of the supported SES regions.
    #[error("Unsupported region: {region}")]
    UnsupportedRegion {
        /// The rejected region string.
        region: String,
    },

    /// A parameter value has a type the form encoding cannot express.
    #[error("Unsupported parameter type for key {key}: {found}")]
    UnsupportedParameterType {
        /// The offending parameter key.
        key: String,
        /// Short description of the rejected value.
        found: String,
    },

    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// Credential-related errors.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// Transport and network errors.
    ///
    /// Propagated unchanged from the HTTP layer.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request did not complete within the configured deadline.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure.
        message: String,
    },

    /// The service returned a well-formed `ErrorResponse` envelope.
    #[error("SES API error: {code} - {message}")]
    Api {
        /// Fault side reported by the service (`Sender` or `Receiver`).
        error_type: String,
        /// SES error code (e.g. `MessageRejected`).
        code: String,
        /// Human-readable error message.
        message: String,
        /// Request ID for support tickets.
        request_id: String,
        /// HTTP status the envelope arrived with.
        status: u16,
    },
}

impl SesError {
    /// Returns the SES error code for [`SesError::Api`] errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::error::SesError;
    ///
    /// let error = SesError::Api {
    ///     error_type: "Sender".to_string(),
    ///     code: "MessageRejected".to_string(),
    ///     message: "Email address is not verified.".to_string(),
    ///     request_id: "abc-123".to_string(),
    ///     status: 400,
    /// };
    ///
    /// assert_eq!(error.error_code(), Some("MessageRejected"));
    /// ```
    pub fn error_code(&self) -> Option<&str> {
        match self {
            SesError::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Returns the request ID reported by the service, if any.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SesError::Api { request_id, .. } if !request_id.is_empty() => {
                Some(request_id.as_str())
            }
            _ => None,
        }
    }

    /// Returns true if repeating the call could plausibly succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// layer their own policy on top.
    pub fn is_retryable(&self) -> bool {
        match self {
            SesError::Transport { .. } | SesError::Timeout { .. } => true,
            SesError::Api {
                error_type,
                code,
                status,
                ..
            } => {
                error_type == "Receiver"
                    || *status >= 500
                    || matches!(code.as_str(), "Throttling" | "ServiceUnavailable")
            }
            _ => false,
        }
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnsupportedRegion { region } => SesError::UnsupportedRegion { region },
            other => SesError::Configuration {
                message: other.to_string(),
            },
        }
    }
}

impl From<CredentialError> for SesError {
    fn from(err: CredentialError) -> Self {
        SesError::Credential {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SesError::Timeout {
                message: err.to_string(),
            }
        } else {
            SesError::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<quick_xml::DeError> for SesError {
    fn from(err: quick_xml::DeError) -> Self {
        SesError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

impl From<quick_xml::Error> for SesError {
    fn from(err: quick_xml::Error) -> Self {
        SesError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(error_type: &str, code: &str, status: u16) -> SesError {
        SesError::Api {
            error_type: error_type.to_string(),
            code: code.to_string(),
            message: "message".to_string(),
            request_id: "req-1".to_string(),
            status,
        }
    }

    #[test]
    fn test_error_code_and_request_id() {
        let error = api_error("Sender", "MessageRejected", 400);
        assert_eq!(error.error_code(), Some("MessageRejected"));
        assert_eq!(error.request_id(), Some("req-1"));

        let other = SesError::MalformedResponse {
            message: "bad".to_string(),
        };
        assert_eq!(other.error_code(), None);
        assert_eq!(other.request_id(), None);
    }

    #[test]
    fn test_empty_request_id_is_none() {
        let error = SesError::Api {
            error_type: "Sender".to_string(),
            code: "InvalidParameterValue".to_string(),
            message: String::new(),
            request_id: String::new(),
            status: 400,
        };
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_is_retryable() {
        assert!(api_error("Receiver", "InternalFailure", 500).is_retryable());
        assert!(api_error("Sender", "Throttling", 400).is_retryable());
        assert!(!api_error("Sender", "MessageRejected", 400).is_retryable());

        let transport = SesError::Transport {
            message: "connection reset".to_string(),
            source: None,
        };
        assert!(transport.is_retryable());

        let region = SesError::UnsupportedRegion {
            region: "mars-1".to_string(),
        };
        assert!(!region.is_retryable());
    }

    #[test]
    fn test_config_error_keeps_unsupported_region() {
        let err: SesError = ConfigError::UnsupportedRegion {
            region: "ap-south-1".to_string(),
        }
        .into();
        assert!(matches!(err, SesError::UnsupportedRegion { ref region } if region == "ap-south-1"));

        let err: SesError = ConfigError::MissingField {
            field: "credentials".to_string(),
        }
        .into();
        assert!(matches!(err, SesError::Configuration { .. }));
    }

    #[test]
    fn test_error_display() {
        let error = SesError::UnsupportedParameterType {
            key: "Flag".to_string(),
            found: "boolean".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported parameter type for key Flag: boolean"
        );

        let error = api_error("Sender", "MessageRejected", 400);
        assert_eq!(error.to_string(), "SES API error: MessageRejected - message");
    }
}
