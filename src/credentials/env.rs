//! Environment variable credentials.

use super::{AwsCredentials, CredentialError};
use std::env;

/// Environment variable holding the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

impl AwsCredentials {
    /// Load credentials from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] when a variable is unset and
    /// [`CredentialError::Invalid`] when it is set but empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use integrations_aws_ses_query::credentials::AwsCredentials;
    ///
    /// let credentials = AwsCredentials::from_env()?;
    /// # Ok::<(), integrations_aws_ses_query::credentials::CredentialError>(())
    /// ```
    pub fn from_env() -> Result<Self, CredentialError> {
        let access_key_id = read_var(AWS_ACCESS_KEY_ID)?;
        let secret_access_key = read_var(AWS_SECRET_ACCESS_KEY)?;
        Ok(AwsCredentials::new(access_key_id, secret_access_key))
    }
}

fn read_var(name: &str) -> Result<String, CredentialError> {
    let value = env::var(name).map_err(|_| CredentialError::Missing {
        message: format!("{} environment variable not set", name),
    })?;

    if value.is_empty() {
        return Err(CredentialError::Invalid {
            message: format!("{} is empty", name),
        });
    }

    Ok(value)
}
