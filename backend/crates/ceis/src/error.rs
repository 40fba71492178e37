//! CEIS Error Types
//!
//! This module provides lookup-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// CEIS-specific result type alias
pub type CeisResult<T> = Result<T, CeisError>;

/// CEIS lookup error variants
///
/// Every variant is reported to the caller as the JSON error envelope.
/// Only input failures (missing fields, undecodable body) are client
/// errors; everything else is a 500.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CeisError {
    /// Caller input missing
    #[error("{0}")]
    Validation(String),

    /// Request body could not be decoded as a form
    #[error("{0}")]
    InvalidBody(String),

    /// Upstream answered with a status other than 200
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// Upstream could not be reached or the exchange broke off
    #[error("{0}")]
    Transport(String),

    /// Any other fault
    #[error("{0}")]
    Internal(String),
}

impl CeisError {
    /// Missing `token` field
    pub fn missing_token() -> Self {
        CeisError::Validation("missing token".to_string())
    }

    /// Neither `taxId` nor `personId` supplied
    pub fn missing_identifier() -> Self {
        CeisError::Validation("missing identifier".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CeisError::Validation(_) | CeisError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            CeisError::Upstream { .. } | CeisError::Transport(_) | CeisError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CeisError::Validation(_) | CeisError::InvalidBody(_) => ErrorKind::BadRequest,
            CeisError::Upstream { .. } | CeisError::Transport(_) | CeisError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// The envelope's `code_message`
    pub fn code_message(&self) -> &'static str {
        match self {
            CeisError::Validation(_) => "missing required parameter",
            CeisError::InvalidBody(_) => "invalid request body",
            CeisError::Upstream { .. } => "upstream communication error",
            CeisError::Transport(_) => "request processing error",
            CeisError::Internal(_) => "internal server error",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CeisError::Validation(msg) | CeisError::InvalidBody(msg) => {
                tracing::debug!(reason = %msg, "Rejected lookup request");
            }
            CeisError::Upstream { status } => {
                tracing::warn!(upstream_status = status, "Upstream lookup failed");
            }
            CeisError::Transport(msg) => {
                tracing::error!(error = %msg, "Upstream unreachable");
            }
            CeisError::Internal(msg) => {
                tracing::error!(error = %msg, "Lookup internal error");
            }
        }
    }
}

impl From<CeisError> for AppError {
    fn from(err: CeisError) -> Self {
        let app_err = AppError::new(err.kind(), err.code_message()).with_error(err.to_string());
        match err {
            CeisError::Upstream { status } => app_err.with_code(status),
            _ => app_err,
        }
    }
}

impl IntoResponse for CeisError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
