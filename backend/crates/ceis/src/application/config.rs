//! Application Configuration
//!
//! Configuration for the CEIS application layer.

use platform::env::{self, EnvError};
use platform::http_client::{DEFAULT_CONNECT_TIMEOUT, HttpClientConfig};
use std::time::Duration;

/// Infosimples CEIS endpoint
pub const CEIS_API_URL: &str =
    "https://api.infosimples.com/api/v2/consultas/portal-transparencia/ceis";

/// Timeout (seconds) passed to the upstream with every lookup
pub const UPSTREAM_TIMEOUT_SECS: u32 = 300;

/// CEIS application configuration
#[derive(Debug, Clone)]
pub struct CeisConfig {
    /// Upstream endpoint
    pub api_url: String,
    /// Value of the upstream `timeout` parameter; not enforced locally
    pub upstream_timeout_secs: u32,
    /// Local connect timeout for the upstream call
    pub connect_timeout: Duration,
}

impl Default for CeisConfig {
    fn default() -> Self {
        Self {
            api_url: CEIS_API_URL.to_string(),
            upstream_timeout_secs: UPSTREAM_TIMEOUT_SECS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl CeisConfig {
    /// Load from `CEIS_API_URL` and `CEIS_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, EnvError> {
        let defaults = Self::default();
        let api_url = env::var_opt("CEIS_API_URL").unwrap_or(defaults.api_url);
        let connect_timeout_secs = env::var_or(
            "CEIS_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout.as_secs(),
        )?;

        Ok(Self {
            api_url,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            ..defaults
        })
    }

    /// Create config pointing at another endpoint (stubs, staging)
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Client settings for the upstream gateway
    ///
    /// No whole-request deadline: the upstream bounds itself by
    /// `upstream_timeout_secs`.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            connect_timeout: self.connect_timeout,
            ..HttpClientConfig::default()
        }
    }
}
