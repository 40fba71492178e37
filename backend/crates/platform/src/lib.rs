//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Typed environment variable reading
//! - Outbound HTTP client construction
//! - Error chain formatting for transport failures

pub mod env;
pub mod http_client;
