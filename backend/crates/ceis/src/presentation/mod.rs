//! Presentation Layer
//!
//! HTTP handlers, DTOs and the embedded page.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod templates;
