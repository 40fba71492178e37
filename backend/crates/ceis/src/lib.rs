//! CEIS (sanctions register) lookup module
//!
//! Clean Architecture structure:
//! - `domain/` - Lookup query value objects, gateway trait
//! - `application/` - Configuration and the lookup use case
//! - `infra/` - Infosimples HTTP gateway
//! - `presentation/` - HTTP handlers, DTOs, router, static page
//!
//! ## Proxy Model
//! - One form submission becomes exactly one upstream POST (no retries)
//! - A successful upstream body is relayed byte-for-byte
//! - Every failure is answered with the `{code, code_message, errors}` envelope
//! - The access token is passed through unmodified and never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CeisConfig;
pub use error::{CeisError, CeisResult};
pub use infra::infosimples::InfosimplesGateway;
pub use presentation::router::{ceis_router, ceis_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    envelope::ErrorEnvelope,
    kind::ErrorKind,
};
