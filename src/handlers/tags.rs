//! Handlers for the Tag resource.
//!
//! Tags are strictly per-user: the owner comes from the verified request
//! identity and is passed explicitly into every store query.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::AppState;
use crate::auth::middleware::CurrentUser;
use crate::error::{ApiError, Result};
use crate::models::TagResponse;

/// Tag creation request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTagRequest {
    #[validate(length(max = 255))]
    #[schema(example = "Dessert", max_length = 255)]
    pub name: String,
}

/// List the authenticated user's tags.
#[utoipa::path(
    get,
    path = "/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Tags owned by the requesting user, ordered by name descending", body = [TagResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_tags(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<TagResponse>>> {
    let tags = state.tags.list_by_owner(user.0.sub).await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Create a tag owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/tags",
    tag = "tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<TagResponse>)> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(format!("Validation error: {}", e)))?;

    // Names are stored trimmed; whitespace-only input counts as empty
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation_field("name", "name must not be empty"));
    }

    let tag = state.tags.create(user.0.sub, name).await?;

    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}
