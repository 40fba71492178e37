//! Gateway Traits
//!
//! Interface to the upstream sanctions register. Implementation is in the
//! infrastructure layer.

use crate::domain::value_objects::{LookupQuery, UpstreamReply};
use crate::error::CeisResult;

/// Sanctions register gateway trait
#[trait_variant::make(SanctionsGateway: Send)]
pub trait LocalSanctionsGateway {
    /// Send one lookup upstream and return whatever came back
    ///
    /// Any HTTP status is a successful exchange here; only failures to
    /// complete the exchange are errors (`CeisError::Transport`).
    async fn fetch(&self, query: &LookupQuery) -> CeisResult<UpstreamReply>;
}
