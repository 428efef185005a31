//! `AuthUser` and `CurrentToken` extractors.
//!
//! Both read what [`crate::middleware::auth::authenticate`] stored in the
//! request extensions; neither touches the `Authorization` header again.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use playerhub_auth::{IdentityClaim, RequestIdentity};
use playerhub_service::RequestContext;

use crate::error::ApiError;
use crate::middleware::auth::TOKEN_REQUIRED;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<RequestIdentity>()
            .copied()
            .ok_or_else(|| ApiError::unauthorized(TOKEN_REQUIRED))?;

        Ok(AuthUser(RequestContext::from(identity)))
    }
}

/// The validated claim of the token presented with this request.
#[derive(Debug, Clone)]
pub struct CurrentToken(pub IdentityClaim);

impl<S> FromRequestParts<S> for CurrentToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaim>()
            .cloned()
            .map(CurrentToken)
            .ok_or_else(|| ApiError::unauthorized(TOKEN_REQUIRED))
    }
}
