//! Outbound HTTP Client
//!
//! Construction of the shared `reqwest::Client` used for upstream calls,
//! and formatting of transport errors for callers.

use std::error::Error;
use std::time::Duration;

/// Default connect timeout for outbound requests
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with every outbound request
pub const USER_AGENT: &str = concat!("ceis-lookup/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Error when building the HTTP client
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build a client from the given configuration
pub fn build_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;

    tracing::debug!(
        connect_timeout_ms = config.connect_timeout.as_millis() as u64,
        "Built HTTP client"
    );

    Ok(client)
}

/// Render an error and all of its sources as one line
///
/// reqwest's own `Display` stops at "error sending request for url (...)";
/// the useful part ("Connection refused") lives further down the chain.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = source.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("ceis-lookup/"));
    }

    #[test]
    fn test_build_client() {
        let config = HttpClientConfig {
            connect_timeout: Duration::from_secs(2),
            ..HttpClientConfig::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_error_chain_single() {
        let err = std::io::Error::other("boom");
        assert_eq!(error_chain(&err), "boom");
    }
}
