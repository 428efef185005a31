//! Route definitions for the PlayerHub HTTP API.
//!
//! Resource routes are mounted under `/api/v1`. Every group except
//! registration and login sits behind the authentication gate; the role
//! and ownership gates are attached per route with `route_layer`, so they
//! only run once a route has matched.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware::{auth, rbac};
use crate::state::AppState;

/// Build the Axum router with all routes and their gates.
///
/// The returned router still needs its state; see [`crate::app::build_app`].
pub fn build_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(session_routes())
        .merge(user_routes(state))
        .merge(player_routes(state))
        .merge(achievement_routes(state))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::authenticate,
        ));

    let api = Router::new().merge(public_routes()).merge(protected);

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1", api)
        .fallback(handlers::health::not_found)
}

/// Registration and login.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/login", post(handlers::auth::login))
}

/// Logout.
fn session_routes() -> Router<AppState> {
    Router::new().route("/logout", post(handlers::auth::logout))
}

/// Account reads for any caller; changes only by the account itself or an admin.
fn user_routes(state: &AppState) -> Router<AppState> {
    let owned = Router::new()
        .route(
            "/users/{id}",
            put(handlers::user::update_user).delete(handlers::user::delete_user),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rbac::require_user_self,
        ));

    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .merge(owned)
}

/// Player profiles; changes only by the owner or an admin.
fn player_routes(state: &AppState) -> Router<AppState> {
    let owned = Router::new()
        .route(
            "/players/{id}",
            put(handlers::player::update_player)
                .delete(handlers::player::delete_player),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rbac::require_player_owner,
        ));

    Router::new()
        .route(
            "/players",
            get(handlers::player::list_players).post(handlers::player::create_player),
        )
        .route("/players/{id}", get(handlers::player::get_player))
        .route(
            "/players/{id}/achievements",
            get(handlers::player::get_player_achievements),
        )
        .merge(owned)
}

/// Achievements; reads for any caller, mutations and awards for admins.
fn achievement_routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route(
            "/achievements",
            post(handlers::achievement::create_achievement),
        )
        .route(
            "/achievements/{id}",
            put(handlers::achievement::update_achievement)
                .delete(handlers::achievement::delete_achievement),
        )
        .route(
            "/achievements/{id}/players/{player_id}",
            post(handlers::achievement::award_achievement)
                .delete(handlers::achievement::revoke_achievement),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rbac::require_admin,
        ));

    Router::new()
        .route(
            "/achievements",
            get(handlers::achievement::list_achievements),
        )
        .route(
            "/achievements/{id}",
            get(handlers::achievement::get_achievement),
        )
        .route(
            "/achievements/{id}/players",
            get(handlers::achievement::get_achievement_players),
        )
        .merge(admin)
}
