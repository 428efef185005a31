//! Role and ownership gates as route middleware.
//!
//! Both run behind [`super::auth::authenticate`] and read the identity it
//! stored. Neither lets the request reach a handler when the gate denies.

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use playerhub_auth::{OwnershipGate, RequestIdentity};

use crate::error::ApiError;
use crate::middleware::auth::TOKEN_REQUIRED;
use crate::state::AppState;

fn identity_of(request: &Request) -> Result<RequestIdentity, ApiError> {
    request
        .extensions()
        .get::<RequestIdentity>()
        .copied()
        .ok_or_else(|| ApiError::unauthorized(TOKEN_REQUIRED))
}

/// Only admins pass.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = identity_of(&request)?;

    if let Err(err) = state.role_gate.allow(&identity).into_result() {
        warn!(
            user_id = %identity.subject,
            method = %request.method(),
            path = %request.uri().path(),
            "Admin role required"
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}

/// Admins, or the user that owns the player profile in `{id}`.
pub async fn require_player_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_ownership(&state.player_gate, &id, request, next).await
}

/// Admins, or the user whose id is `{id}`.
pub async fn require_user_self(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_ownership(&state.user_gate, &id, request, next).await
}

async fn enforce_ownership(
    gate: &OwnershipGate,
    resource_id: &str,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = identity_of(&request)?;

    if let Err(err) = gate.allow(&identity, resource_id).await.into_result() {
        warn!(
            user_id = %identity.subject,
            resource_id,
            path = %request.uri().path(),
            reason = %err.message,
            "Ownership check denied"
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
