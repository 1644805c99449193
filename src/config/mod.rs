//! Configuration module for the SES client.
//!
//! This module provides configuration types and builders for the SES client:
//!
//! - Region and endpoint resolution
//! - Credentials
//! - Timeout settings
//! - User agent customization

use std::time::Duration;

pub mod error;
pub mod region;

pub use error::ConfigError;
pub use region::Region;

use crate::credentials::AwsCredentials;

/// Default timeout for the entire request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the SES client.
#[derive(Clone, Debug)]
pub struct SesConfig {
    /// SES region.
    pub region: Region,

    /// Endpoint override (for local test servers).
    pub endpoint: Option<String>,

    /// Credentials used to sign every request.
    pub credentials: AwsCredentials,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,

    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl SesConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::config::SesConfig;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SesConfig::builder()
    ///     .region("us-east-1")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`) and the
    /// credentials in `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
            .map_err(|_| ConfigError::Environment {
                message: "AWS_REGION or AWS_DEFAULT_REGION must be set".to_string(),
            })?;

        let credentials = AwsCredentials::from_env().map_err(|e| ConfigError::Environment {
            message: e.to_string(),
        })?;

        Self::builder()
            .region(region)
            .aws_credentials(credentials)
            .build()
    }

    /// Get the SES endpoint URL for this configuration.
    ///
    /// Returns the override if configured, otherwise the fixed endpoint of
    /// the region.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::config::SesConfig;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SesConfig::builder()
    ///     .region("us-west-2")
    ///     .credentials("access_key", "secret_key")
    ///     .build()?;
    ///
    /// assert_eq!(config.ses_endpoint(), "https://email.us-west-2.amazonaws.com");
    /// # Ok(())
    /// # }
    /// ```
    pub fn ses_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.region.endpoint().to_string())
    }
}

/// Builder for creating SES client configurations.
#[derive(Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<AwsCredentials>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SesConfigBuilder {
    /// Set the region (e.g. `"us-east-1"`). Validated in [`build`](Self::build).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the endpoint URL.
    ///
    /// The path of every request is appended verbatim, so the override
    /// should not end with a slash.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials.
    pub fn credentials(self, access_key: &str, secret_key: &str) -> Self {
        self.aws_credentials(AwsCredentials::new(access_key, secret_key))
    }

    /// Set an already constructed credential pair.
    pub fn aws_credentials(mut self, credentials: AwsCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingField` if the region or credentials are not set
    /// - `ConfigError::UnsupportedRegion` if the region has no SES endpoint
    /// - `ConfigError::Invalid` if a timeout is zero
    pub fn build(self) -> Result<SesConfig, ConfigError> {
        let region: Region = self
            .region
            .ok_or_else(|| ConfigError::MissingField {
                field: "region".to_string(),
            })?
            .parse()?;

        let credentials = self.credentials.ok_or_else(|| ConfigError::MissingField {
            field: "credentials".to_string(),
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if timeout.is_zero() || connect_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                message: "timeouts must be greater than zero".to_string(),
            });
        }

        Ok(SesConfig {
            region,
            endpoint: self.endpoint,
            credentials,
            timeout,
            connect_timeout,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_env_vars;

    #[test]
    fn test_builder_with_required_fields() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.region, Region::UsEast1);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builder_unsupported_region() {
        let result = SesConfig::builder()
            .region("ap-southeast-2")
            .credentials("access_key", "secret_key")
            .build();

        match result.unwrap_err() {
            ConfigError::UnsupportedRegion { region } => assert_eq!(region, "ap-southeast-2"),
            other => panic!("Expected UnsupportedRegion error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_missing_region() {
        let result = SesConfig::builder()
            .credentials("access_key", "secret_key")
            .build();

        match result.unwrap_err() {
            ConfigError::MissingField { field } => assert_eq!(field, "region"),
            _ => panic!("Expected MissingField error"),
        }
    }

    #[test]
    fn test_builder_missing_credentials() {
        let result = SesConfig::builder().region("us-east-1").build();

        match result.unwrap_err() {
            ConfigError::MissingField { field } => assert_eq!(field, "credentials"),
            _ => panic!("Expected MissingField error"),
        }
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = SesConfig::builder()
            .region("us-east-1")
            .credentials("access_key", "secret_key")
            .timeout(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_builder_with_custom_settings() {
        let config = SesConfig::builder()
            .region("eu-west-1")
            .credentials("access_key", "secret_key")
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, Some("MyApp/1.0".to_string()));
    }

    #[test]
    fn test_ses_endpoint_default() {
        let config = SesConfig::builder()
            .region("eu-west-1")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.ses_endpoint(), "https://email.eu-west-1.amazonaws.com");
    }

    #[test]
    fn test_ses_endpoint_custom() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .endpoint("http://localhost:4566")
            .credentials("access_key", "secret_key")
            .build()
            .unwrap();

        assert_eq!(config.ses_endpoint(), "http://localhost:4566");
    }

    #[test]
    fn test_from_env() {
        with_env_vars(
            &[
                ("AWS_REGION", Some("us-west-2")),
                ("AWS_ACCESS_KEY_ID", Some("AKID")),
                ("AWS_SECRET_ACCESS_KEY", Some("SECRET")),
            ],
            || {
                let config = SesConfig::from_env().unwrap();
                assert_eq!(config.region, Region::UsWest2);
                assert_eq!(config.credentials.access_key_id(), "AKID");
            },
        );
    }

    #[test]
    fn test_from_env_missing_region() {
        with_env_vars(
            &[("AWS_REGION", None), ("AWS_DEFAULT_REGION", None)],
            || {
                let result = SesConfig::from_env();
                assert!(matches!(result, Err(ConfigError::Environment { .. })));
            },
        );
    }
}
