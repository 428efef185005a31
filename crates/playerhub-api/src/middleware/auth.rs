//! Authentication gate.
//!
//! Reads `Authorization: Bearer <token>`, validates the token through the
//! codec (signature, algorithm, key id, expiry, role, denylist) and makes
//! the resulting identity available to everything behind it.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use playerhub_auth::RequestIdentity;

use crate::error::ApiError;
use crate::state::AppState;

/// Message for a request without credentials.
pub const TOKEN_REQUIRED: &str = "Token is required";
/// Message for any credential that does not validate.
pub const INVALID_TOKEN: &str = "Invalid token";

const BEARER_PREFIX: &str = "Bearer ";

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// On success the request extensions gain a [`RequestIdentity`] and the
/// full [`playerhub_auth::IdentityClaim`].
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map(str::to_owned));

    let token = match header {
        None => return Err(ApiError::unauthorized(TOKEN_REQUIRED)),
        Some(Ok(value)) if value.is_empty() => {
            return Err(ApiError::unauthorized(TOKEN_REQUIRED));
        }
        Some(Ok(value)) => match value.strip_prefix(BEARER_PREFIX) {
            Some(token) => token.to_owned(),
            None => {
                debug!(reason = "missing bearer prefix", "Rejected credentials");
                return Err(ApiError::unauthorized(INVALID_TOKEN));
            }
        },
        Some(Err(_)) => {
            debug!(reason = "non-ascii header", "Rejected credentials");
            return Err(ApiError::unauthorized(INVALID_TOKEN));
        }
    };

    let claim = state.token_codec.authenticate(&token).await.map_err(|err| {
        debug!(reason = %err, path = %request.uri().path(), "Rejected token");
        ApiError::unauthorized(INVALID_TOKEN)
    })?;

    let identity = RequestIdentity::from(&claim);
    request.extensions_mut().insert(identity);
    request.extensions_mut().insert(claim);

    Ok(next.run(request).await)
}
