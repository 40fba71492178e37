//! Domain Layer - Lookup vocabulary
//!
//! This layer contains:
//! - Value objects (AccessToken, TaxId, PersonId, LookupQuery, UpstreamReply)
//! - Gateway trait (interface to the upstream register)

pub mod gateway;
pub mod value_objects;
