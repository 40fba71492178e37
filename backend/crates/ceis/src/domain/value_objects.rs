//! Domain Value Objects

use axum::body::Bytes;
use std::fmt;

use crate::error::{CeisError, CeisResult};

/// Upstream form parameter carrying the company identifier
pub const PARAM_CNPJ: &str = "cnpj";
/// Upstream form parameter carrying the individual identifier
pub const PARAM_CPF: &str = "cpf";

/// Opaque API credential, forwarded unmodified
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Company identifier (CNPJ)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxId(String);

impl TaxId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Individual identifier (CPF)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonId(String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated lookup request
///
/// Holds a token and at least one identifier. Both identifiers may be
/// present at once; the upstream gets whatever was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    token: AccessToken,
    tax_id: Option<TaxId>,
    person_id: Option<PersonId>,
}

impl LookupQuery {
    /// Validate raw form values
    ///
    /// Empty strings count as absent. Non-empty values are kept verbatim.
    pub fn new(
        token: Option<String>,
        tax_id: Option<String>,
        person_id: Option<String>,
    ) -> CeisResult<Self> {
        let token = present(token).ok_or_else(CeisError::missing_token)?;
        let tax_id = present(tax_id).map(TaxId);
        let person_id = present(person_id).map(PersonId);

        if tax_id.is_none() && person_id.is_none() {
            return Err(CeisError::missing_identifier());
        }

        Ok(Self {
            token: AccessToken(token),
            tax_id,
            person_id,
        })
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn tax_id(&self) -> Option<&TaxId> {
        self.tax_id.as_ref()
    }

    pub fn person_id(&self) -> Option<&PersonId> {
        self.person_id.as_ref()
    }

    /// Which identifier kinds are carried, for logging
    pub fn identifier_kinds(&self) -> &'static str {
        match (&self.tax_id, &self.person_id) {
            (Some(_), Some(_)) => "cnpj+cpf",
            (Some(_), None) => PARAM_CNPJ,
            (None, Some(_)) => PARAM_CPF,
            (None, None) => "none",
        }
    }

    /// Form parameters for the upstream request
    ///
    /// Order: `token`, `timeout`, then `cnpj` and `cpf` when present.
    pub fn upstream_params(&self, timeout_secs: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("token", self.token.as_str().to_string()),
            ("timeout", timeout_secs.to_string()),
        ];
        if let Some(tax_id) = &self.tax_id {
            params.push((PARAM_CNPJ, tax_id.as_str().to_string()));
        }
        if let Some(person_id) = &self.person_id {
            params.push((PARAM_CPF, person_id.as_str().to_string()));
        }
        params
    }
}

/// Raw upstream answer: status plus untouched body bytes
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
