//! Lookup Use Case

use crate::domain::gateway::SanctionsGateway;
use crate::domain::value_objects::LookupQuery;
use crate::error::{CeisError, CeisResult};
use axum::body::Bytes;
use std::sync::Arc;

/// Output DTO for a lookup
#[derive(Debug, Clone)]
pub struct LookupOutput {
    /// Upstream body, unmodified
    pub body: Bytes,
}

/// Lookup Use Case
pub struct LookupUseCase<G>
where
    G: SanctionsGateway,
{
    gateway: Arc<G>,
}

impl<G> LookupUseCase<G>
where
    G: SanctionsGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Forward the query once and classify the reply
    pub async fn execute(&self, query: LookupQuery) -> CeisResult<LookupOutput> {
        let reply = self.gateway.fetch(&query).await?;

        if !reply.is_success() {
            return Err(CeisError::Upstream {
                status: reply.status,
            });
        }

        // The body is relayed as-is; parsing only checks it is JSON and
        // pulls summary fields for the log line.
        let summary: serde_json::Value = serde_json::from_slice(&reply.body)
            .map_err(|e| CeisError::Internal(format!("upstream sent invalid JSON: {}", e)))?;

        tracing::info!(
            identifiers = query.identifier_kinds(),
            upstream_code = summary.get("code").and_then(|c| c.as_i64()),
            data_count = summary.get("data_count").and_then(|c| c.as_u64()),
            "Lookup completed"
        );

        Ok(LookupOutput { body: reply.body })
    }
}
