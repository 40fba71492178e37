//! Infosimples gateway implementation

use crate::application::config::CeisConfig;
use crate::domain::gateway::SanctionsGateway;
use crate::domain::value_objects::{LookupQuery, UpstreamReply};
use crate::error::{CeisError, CeisResult};
use platform::http_client::{HttpClientError, build_client, error_chain};

/// Gateway posting lookups to the Infosimples CEIS API
#[derive(Clone)]
pub struct InfosimplesGateway {
    client: reqwest::Client,
    api_url: String,
    timeout_secs: u32,
}

impl InfosimplesGateway {
    pub fn new(client: reqwest::Client, config: &CeisConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            timeout_secs: config.upstream_timeout_secs,
        }
    }

    /// Build the gateway together with its own HTTP client
    pub fn from_config(config: &CeisConfig) -> Result<Self, HttpClientError> {
        let client = build_client(&config.http_client_config())?;
        Ok(Self::new(client, config))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl SanctionsGateway for InfosimplesGateway {
    async fn fetch(&self, query: &LookupQuery) -> CeisResult<UpstreamReply> {
        let params = query.upstream_params(self.timeout_secs);

        tracing::debug!(
            identifiers = query.identifier_kinds(),
            timeout_secs = self.timeout_secs,
            "Forwarding lookup upstream"
        );

        let response = self
            .client
            .post(&self.api_url)
            .form(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(UpstreamReply::new(status, body))
    }
}

fn transport_error(err: reqwest::Error) -> CeisError {
    CeisError::Transport(error_chain(&err))
}
