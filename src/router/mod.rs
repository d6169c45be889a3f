//! Router configuration.
//!
//! Public routes (health, user registration, token issuance, API docs) are
//! merged with the protected Tag resource, which sits behind the JWT
//! authentication middleware.

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::auth;
use crate::handlers::{self, health};
use crate::middleware::request_logger_middleware;
use crate::openapi::ApiDoc;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let request_timeout = std::time::Duration::from_secs(app_state.config.request_timeout);

    // Protected resource routes; the auth middleware rejects requests
    // without a valid token before any handler runs
    let protected = Router::new()
        .merge(handlers::tag_routes())
        .layer(from_fn_with_state(
            app_state.clone(),
            auth::middleware::auth_middleware,
        ));

    let public = Router::new()
        .route("/health", get(health::health_check))
        .nest("/users", handlers::user_routes());

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_logger_middleware))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
