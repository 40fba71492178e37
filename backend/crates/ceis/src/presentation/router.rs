//! CEIS Router

use crate::domain::gateway::SanctionsGateway;
use crate::infra::infosimples::InfosimplesGateway;
use crate::presentation::handlers::{self, CeisAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Create the CEIS router backed by the Infosimples API
pub fn ceis_router(gateway: InfosimplesGateway) -> Router {
    ceis_router_generic(gateway)
}

/// Create a generic CEIS router for any gateway implementation
pub fn ceis_router_generic<G>(gateway: G) -> Router
where
    G: SanctionsGateway + Clone + Send + Sync + 'static,
{
    let state = CeisAppState {
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/lookup", post(handlers::lookup::<G>))
        // path used by earlier releases of the page
        .route("/api/consulta-ceis", post(handlers::lookup::<G>))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .with_state(state)
}
