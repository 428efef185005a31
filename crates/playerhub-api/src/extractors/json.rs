//! JSON body extractor that runs `validator` rules after deserializing.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Message for a body that is not valid JSON for the target type.
pub const INVALID_BODY: &str = "Invalid request body";

/// A deserialized and validated JSON request body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
            ApiError::bad_request(INVALID_BODY)
        })?;

        value
            .validate()
            .map_err(|errors| ApiError::bad_request(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// First failing rule, ordered by field name so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut names: Vec<_> = fields.keys().collect();
    names.sort();

    names
        .first()
        .and_then(|name| {
            let error = fields.get(*name)?.first()?;
            Some(match &error.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for '{name}'"),
            })
        })
        .unwrap_or_else(|| INVALID_BODY.to_string())
}
