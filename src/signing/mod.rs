//! `AWS3-HTTPS` request signing for the SES query API.
//!
//! The scheme signs only the `Date` header value:
//!
//! 1. Format the current time per RFC 1123
//! 2. Compute HMAC-SHA256 of that string keyed by the secret access key
//! 3. Base64-encode the digest (standard alphabet, padded)
//! 4. Send the date in `Date` and the signature in `X-Amzn-Authorization`
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use integrations_aws_ses_query::credentials::AwsCredentials;
//! use integrations_aws_ses_query::signing::auth_headers_at;
//!
//! let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret");
//! let now = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
//! let headers = auth_headers_at(&credentials, now);
//!
//! assert_eq!(headers.date, "Mon, 02 Jan 2006 15:04:05 GMT");
//! assert!(headers.authorization.starts_with("AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Name of the date header that carries the signed timestamp.
pub const DATE_HEADER: &str = "Date";

/// Name of the authorization header used by the `AWS3-HTTPS` scheme.
pub const AUTHORIZATION_HEADER: &str = "X-Amzn-Authorization";

/// Signing algorithm advertised in the authorization header.
pub const ALGORITHM: &str = "HmacSHA256";

/// RFC 1123 layout with the zone spelled `GMT`.
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The two headers that authenticate a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value of the `Date` header.
    pub date: String,
    /// Value of the `X-Amzn-Authorization` header.
    pub authorization: String,
}

impl AuthHeaders {
    /// Header name/value pairs, in the order they are added to a request.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (DATE_HEADER, self.date.as_str()),
            (AUTHORIZATION_HEADER, self.authorization.as_str()),
        ]
    }
}

/// Compute the base64 HMAC-SHA256 signature of `timestamp`.
///
/// Pure and deterministic: equal inputs always produce the same output.
pub fn sign(secret_key: &str, timestamp: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Format a timestamp as used in the `Date` header.
pub fn format_date(time: DateTime<Utc>) -> String {
    time.format(RFC1123_FORMAT).to_string()
}

/// Build the authentication headers for a fixed point in time.
pub fn auth_headers_at(credentials: &AwsCredentials, now: DateTime<Utc>) -> AuthHeaders {
    let date = format_date(now);
    let signature = sign(credentials.secret_access_key(), &date);
    let authorization = format!(
        "AWS3-HTTPS AWSAccessKeyId={}, Algorithm={}, Signature={}",
        credentials.access_key_id(),
        ALGORITHM,
        signature
    );

    AuthHeaders {
        date,
        authorization,
    }
}

/// Build the authentication headers for the current wall-clock time.
pub fn auth_headers(credentials: &AwsCredentials) -> AuthHeaders {
    auth_headers_at(credentials, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231 test case 2, base64-encoded.
        assert_eq!(
            sign("Jefe", "what do ya want for nothing?"),
            "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM="
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign("secret", "Mon, 02 Jan 2006 15:04:05 GMT");
        let b = sign("secret", "Mon, 02 Jan 2006 15:04:05 GMT");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_is_sensitive_to_inputs() {
        let base = sign("secret", "Mon, 02 Jan 2006 15:04:05 GMT");
        assert_ne!(base, sign("secreT", "Mon, 02 Jan 2006 15:04:05 GMT"));
        assert_ne!(base, sign("secret", "Mon, 02 Jan 2006 15:04:06 GMT"));
    }

    #[test]
    fn test_sign_uses_padded_standard_base64() {
        let signature = sign("key", "message");
        // 32-byte digest -> 44 characters with one '=' of padding.
        assert_eq!(signature.len(), 44);
        assert!(signature.ends_with('='));
        assert!(!signature.contains('-') && !signature.contains('_'));
    }

    #[test]
    fn test_format_date_rfc1123() {
        let time = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_date(time), "Mon, 02 Jan 2006 15:04:05 GMT");
    }

    #[test]
    fn test_auth_headers_template() {
        let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret");
        let now = Utc.with_ymd_and_hms(2012, 5, 10, 8, 30, 0).unwrap();
        let headers = auth_headers_at(&credentials, now);

        assert_eq!(headers.date, "Thu, 10 May 2012 08:30:00 GMT");
        assert_eq!(
            headers.authorization,
            format!(
                "AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE, Algorithm=HmacSHA256, Signature={}",
                sign("secret", "Thu, 10 May 2012 08:30:00 GMT")
            )
        );

        let pairs = headers.pairs();
        assert_eq!(pairs[0].0, "Date");
        assert_eq!(pairs[1].0, "X-Amzn-Authorization");
    }

    #[test]
    fn test_auth_headers_never_contain_secret() {
        let credentials = AwsCredentials::new("AKIDEXAMPLE", "topsecretvalue");
        let headers = auth_headers(&credentials);
        assert!(!headers.authorization.contains("topsecretvalue"));
        assert!(headers.date.ends_with("GMT"));
    }
}
