//! OpenAPI documentation served at /docs.

use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use crate::auth::AuthResponse;
use crate::handlers::health::HealthResponse;
use crate::handlers::tags::CreateTagRequest;
use crate::handlers::users::{CreateUserRequest, TokenRequest};
use crate::models::{TagResponse, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        description = "Tags resource service for the recipe management application"
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::tags::list_tags,
        crate::handlers::tags::create_tag,
        crate::handlers::users::create_user,
        crate::handlers::users::create_token,
    ),
    components(schemas(
        HealthResponse,
        TagResponse,
        CreateTagRequest,
        UserResponse,
        CreateUserRequest,
        TokenRequest,
        AuthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "tags", description = "Per-user recipe tags"),
        (name = "users", description = "Account registration and tokens"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
