//! Request extractors
//!
//! `LookupForm` is read from either `application/x-www-form-urlencoded`
//! or `multipart/form-data` bodies (the page's `FormData` submits the
//! latter).

use crate::error::CeisError;
use crate::presentation::dto::LookupForm;
use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, header};

impl<S> FromRequest<S> for LookupForm
where
    S: Send + Sync,
{
    type Rejection = CeisError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| CeisError::InvalidBody(rejection.body_text()))?;
            multipart_pairs(multipart).await?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| CeisError::InvalidBody(rejection.body_text()))?;
            pairs
        };

        Ok(LookupForm::from_pairs(pairs))
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

/// Text parts as key/value pairs; file parts are skipped
async fn multipart_pairs(mut multipart: Multipart) -> Result<Vec<(String, String)>, CeisError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CeisError::InvalidBody(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| CeisError::InvalidBody(e.body_text()))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
