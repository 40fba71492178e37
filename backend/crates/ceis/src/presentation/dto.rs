//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use std::fmt;

/// Form body for POST /lookup
///
/// Field names follow the page (`taxId`, `personId`); the upstream's own
/// names (`cnpj`, `cpf`) are accepted too.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LookupForm {
    pub token: Option<String>,
    pub tax_id: Option<String>,
    pub person_id: Option<String>,
}

impl LookupForm {
    /// Collect fields from decoded key/value pairs
    ///
    /// The first occurrence of a key wins and later repeats are ignored.
    /// A non-empty `taxId` / `personId` takes precedence over `cnpj` / `cpf`.
    /// Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut token = None;
        let mut tax_id = None;
        let mut cnpj = None;
        let mut person_id = None;
        let mut cpf = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "token" => &mut token,
                "taxId" => &mut tax_id,
                "cnpj" => &mut cnpj,
                "personId" => &mut person_id,
                "cpf" => &mut cpf,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            token,
            tax_id: prefer(tax_id, cnpj),
            person_id: prefer(person_id, cpf),
        }
    }
}

fn prefer(primary: Option<String>, alias: Option<String>) -> Option<String> {
    primary.filter(|v| !v.is_empty()).or(alias)
}

impl fmt::Debug for LookupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupForm")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("tax_id", &self.tax_id)
            .field("person_id", &self.person_id)
            .finish()
    }
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
