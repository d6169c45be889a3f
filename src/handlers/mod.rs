pub mod health;
pub mod tags;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::app_state::AppState;

/// Routes for the Tag resource (authentication required).
///
/// Both slash forms are registered explicitly; axum does no
/// trailing-slash redirect.
pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/", get(tags::list_tags).post(tags::create_tag))
}

/// Public user account routes: registration and token issuance.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/token", post(users::create_token))
}
