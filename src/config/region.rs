//! Supported SES regions and their endpoints.

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// An AWS region that offers the SES query API.
///
/// The set is closed: adding a region means adding a variant, and the
/// compiler then points at every table that must learn about it.
///
/// # Example
///
/// ```
/// use integrations_aws_ses_query::config::Region;
///
/// let region: Region = "eu-west-1".parse().unwrap();
/// assert_eq!(region.endpoint(), "https://email.eu-west-1.amazonaws.com");
/// assert!("ap-south-1".parse::<Region>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// US East (N. Virginia).
    UsEast1,
    /// US West (Oregon).
    UsWest2,
    /// EU (Ireland).
    EuWest1,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 3] = [Region::UsEast1, Region::UsWest2, Region::EuWest1];

    /// The region code, e.g. `us-east-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
        }
    }

    /// The fixed HTTPS endpoint for this region.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Region::UsEast1 => "https://email.us-east-1.amazonaws.com",
            Region::UsWest2 => "https://email.us-west-2.amazonaws.com",
            Region::EuWest1 => "https://email.eu-west-1.amazonaws.com",
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ConfigError::UnsupportedRegion {
                region: s.to_string(),
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
