//! User account handlers: registration and token issuance.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::AppState;
use crate::auth::{AuthResponse, Claims, PasswordService};
use crate::error::{ApiError, ErrorCode, Result};
use crate::models::{NewUser, UserResponse};

/// Registration request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email)]
    #[schema(example = "cook@example.com")]
    pub email: String,

    // The original product accepts short passwords; keep the floor low
    #[validate(length(min = 5, max = 128))]
    #[schema(example = "12345", min_length = 5, max_length = 128)]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Test Cook")]
    pub name: String,
}

/// Token request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email)]
    #[schema(example = "cook@example.com")]
    pub email: String,

    #[schema(example = "12345")]
    pub password: String,
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    request.validate().map_err(|e| {
        ApiError::with_code(ErrorCode::InvalidInput, format!("Validation error: {}", e))
    })?;

    let password_hash = PasswordService::hash_password(&request.password)?;

    let user = state
        .users
        .create(NewUser {
            email: request.email.trim().to_lowercase(),
            name: request.name.trim().to_string(),
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/users/token",
    tag = "users",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn create_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<AuthResponse>> {
    request.validate().map_err(|e| {
        ApiError::with_code(ErrorCode::InvalidInput, format!("Validation error: {}", e))
    })?;

    let email = request.email.trim().to_lowercase();
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    let password_valid = PasswordService::verify_password(&request.password, &user.password_hash)?;
    if !password_valid {
        return Err(ApiError::invalid_credentials());
    }

    let expires_in = state.jwt.expiration_secs();
    let claims = Claims::new(user.id, user.email.clone(), expires_in);
    let access_token = state.jwt.encode_token(&claims)?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(user),
    }))
}
