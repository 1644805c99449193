//! Identity types.

use std::fmt;

/// Kind of identity to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentityType {
    /// Verified email addresses.
    EmailAddress,
    /// Verified domains.
    Domain,
    /// Both kinds; no filter is sent.
    #[default]
    Any,
}

impl IdentityType {
    /// Value of the `IdentityType` request parameter, or `None` for [`IdentityType::Any`].
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            IdentityType::EmailAddress => Some("EmailAddress"),
            IdentityType::Domain => Some("Domain"),
            IdentityType::Any => None,
        }
    }
}

impl fmt::Display for IdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("Any"))
    }
}

/// Verification state of a single identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerificationAttributes {
    /// Raw status string (`Pending`, `Success`, `Failed`, ...).
    pub verification_status: String,
    /// Domain verification token; empty for email identities.
    pub verification_token: String,
}

impl VerificationAttributes {
    /// Parsed form of [`verification_status`](Self::verification_status).
    pub fn status(&self) -> VerificationStatus {
        VerificationStatus::from(self.verification_status.as_str())
    }

    /// Whether the identity is verified.
    pub fn is_verified(&self) -> bool {
        self.status() == VerificationStatus::Success
    }
}

/// Known verification states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Verification has been requested but not completed.
    Pending,
    /// The identity is verified.
    Success,
    /// Verification failed.
    Failed,
    /// Verification failed for a reason that may clear up.
    TemporaryFailure,
    /// Verification was never requested.
    NotStarted,
    /// A status this client does not know about.
    Unknown(String),
}

impl From<&str> for VerificationStatus {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => VerificationStatus::Pending,
            "Success" => VerificationStatus::Success,
            "Failed" => VerificationStatus::Failed,
            "TemporaryFailure" => VerificationStatus::TemporaryFailure,
            "NotStarted" => VerificationStatus::NotStarted,
            other => VerificationStatus::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(IdentityType::EmailAddress, Some("EmailAddress"))]
    #[case(IdentityType::Domain, Some("Domain"))]
    #[case(IdentityType::Any, None)]
    fn test_identity_type_param(#[case] identity_type: IdentityType, #[case] expected: Option<&str>) {
        assert_eq!(identity_type.as_param(), expected);
    }

    #[test]
    fn test_verification_status() {
        let attrs = VerificationAttributes {
            verification_status: "Success".to_string(),
            verification_token: String::new(),
        };
        assert!(attrs.is_verified());

        let attrs = VerificationAttributes {
            verification_status: "Revoked".to_string(),
            verification_token: String::new(),
        };
        assert_eq!(attrs.status(), VerificationStatus::Unknown("Revoked".to_string()));
        assert!(!attrs.is_verified());
    }
}
