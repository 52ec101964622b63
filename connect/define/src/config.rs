//! Region and endpoint configuration.
//!
//! Settings come from the standard AWS environment variables. Lookups go
//! through a caller-supplied function so the resolution rules can be
//! exercised without touching the process environment.

use tracing::{debug, info};

use crate::error::ConfigError;

/// Region variables, in precedence order.
pub const REGION_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

/// Endpoint override variables, in precedence order.
pub const ENDPOINT_VARS: &[&str] = &["AWS_ENDPOINT_URL_CONNECT", "AWS_ENDPOINT_URL"];

/// FIPS endpoint flag.
pub const FIPS_VAR: &str = "AWS_USE_FIPS_ENDPOINT";

/// Where requests for the service are sent.
///
/// ## Examples
///
/// ```
/// use connect_define::ServiceConfig;
///
/// let config = ServiceConfig::new("us-east-1");
/// assert_eq!(config.endpoint(), "https://connect.us-east-1.amazonaws.com");
///
/// let fips = ServiceConfig { use_fips: true, ..ServiceConfig::new("us-gov-west-1") };
/// assert_eq!(fips.endpoint(), "https://connect-fips.us-gov-west-1.amazonaws.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// AWS region (e.g., "us-east-1").
    pub region: String,
    /// Explicit endpoint that replaces the regional one.
    pub endpoint_url: Option<String>,
    /// Use the FIPS variant of the regional endpoint.
    pub use_fips: bool,
}

impl ServiceConfig {
    /// Creates a configuration for `region` with the default endpoint.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
            use_fips: false,
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolves the configuration through `lookup`.
    ///
    /// Empty values count as unset. The region is mandatory and must look
    /// like `us-east-1`; the endpoint override and FIPS flag are optional.
    ///
    /// ## Examples
    ///
    /// ```
    /// use connect_define::ServiceConfig;
    ///
    /// let config = ServiceConfig::from_lookup(|var| match var {
    ///     "AWS_DEFAULT_REGION" => Some("ap-southeast-2".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.region, "ap-southeast-2");
    /// assert!(!config.use_fips);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |vars: &[&'static str]| {
            vars.iter().find_map(|var| {
                lookup(*var)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .map(|value| (*var, value))
            })
        };

        let (source, region) = first_set(REGION_VARS).ok_or_else(|| ConfigError::MissingRegion {
            vars: REGION_VARS.iter().map(|var| var.to_string()).collect(),
        })?;
        if !is_valid_region(&region) {
            return Err(ConfigError::InvalidRegion(region));
        }
        debug!(region = %region, source, "Resolved region");

        let endpoint_url = first_set(ENDPOINT_VARS).map(|(source, url)| {
            info!(endpoint = %url, source, "Using endpoint override");
            url
        });

        let use_fips = match lookup(FIPS_VAR) {
            Some(value) => parse_flag(FIPS_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            region,
            endpoint_url,
            use_fips,
        })
    }

    /// Returns the endpoint for the Amazon Connect service.
    pub fn endpoint(&self) -> String {
        self.endpoint_for("connect")
    }

    /// Returns the endpoint for a service with the given host prefix.
    pub fn endpoint_for(&self, prefix: &str) -> String {
        if let Some(url) = &self.endpoint_url {
            return url.trim_end_matches('/').to_string();
        }
        let host = if self.use_fips {
            format!("{prefix}-fips")
        } else {
            prefix.to_string()
        };
        let suffix = if self.region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        format!("https://{host}.{}.{suffix}", self.region)
    }
}

/// Returns `true` for region names shaped like `us-east-1`, `us-gov-west-1` or `eusc-de-east-1`.
pub fn is_valid_region(region: &str) -> bool {
    let parts: Vec<&str> = region.split('-').collect();
    if parts.len() < 3 {
        return false;
    }
    let (last, rest) = match parts.split_last() {
        Some(split) => split,
        None => return false,
    };
    let alpha = |part: &&str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase());
    rest.iter().all(alpha)
        && rest[0].len() >= 2
        && !last.is_empty()
        && last.bytes().all(|b| b.is_ascii_digit())
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
