use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::auth::Claims;
use crate::error::ApiError;

/// JWT authentication middleware.
///
/// Verifies the bearer token and inserts the decoded [`Claims`] into request
/// extensions so handlers can extract [`CurrentUser`]. Requests without a
/// valid token are rejected with 401 before any handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = match auth_header {
        Some(auth_value) if auth_value.starts_with("Bearer ") => &auth_value[7..],
        _ => {
            return ApiError::Unauthorized(
                "Missing or invalid Authorization header".to_string(),
            )
            .into_response();
        }
    };

    match state.jwt.decode_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Extractor for the verified identity of the requesting user.
///
/// Only usable behind [`auth_middleware`]; there is no ambient current-user
/// state anywhere else in the crate.
#[derive(Clone)]
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("No authentication found".to_string()))?;

        Ok(CurrentUser(claims))
    }
}
