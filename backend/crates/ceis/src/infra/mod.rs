//! Infrastructure Layer
//!
//! Gateway implementations backed by external services.

pub mod infosimples;
