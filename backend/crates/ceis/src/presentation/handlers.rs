//! HTTP Handlers

use crate::application::lookup::LookupUseCase;
use crate::domain::gateway::SanctionsGateway;
use crate::domain::value_objects::LookupQuery;
use crate::error::{CeisError, CeisResult};
use crate::presentation::dto::{HealthResponse, LookupForm};
use crate::presentation::templates::INDEX_HTML;
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use kernel::error::app_error::AppError;
use std::any::Any;
use std::sync::Arc;

/// Shared state for CEIS handlers
#[derive(Clone)]
pub struct CeisAppState<G>
where
    G: SanctionsGateway + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
}

/// POST /lookup
///
/// Accepts urlencoded or multipart bodies. Success relays the upstream
/// body unchanged with status 200.
pub async fn lookup<G>(
    State(state): State<CeisAppState<G>>,
    form: LookupForm,
) -> CeisResult<Response>
where
    G: SanctionsGateway + Clone + Send + Sync + 'static,
{
    let query = LookupQuery::new(form.token, form.tax_id, form.person_id)?;

    let use_case = LookupUseCase::new(state.gateway.clone());
    let output = use_case.execute(query).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], output.body).into_response())
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found("not found").with_error(format!("no route for {}", uri.path()))
}

/// Turn a handler panic into an internal-error envelope
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "handler panicked".to_string()
    };

    CeisError::Internal(detail).into_response()
}
