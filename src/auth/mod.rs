use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::JwtService;
pub use middleware::{CurrentUser, auth_middleware};
pub use password::PasswordService;

/// User claims carried in JWT tokens
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: Uuid,     // Subject (user ID)
    pub email: String, // User email
    pub exp: i64,      // Expiration time
    pub iat: i64,      // Issued at
    pub iss: String,   // Issuer
}

impl Claims {
    pub fn new(user_id: Uuid, email: String, expiration_secs: i64) -> Self {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(expiration_secs);

        Self {
            sub: user_id,
            email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: "recipe-api".to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Authentication response returned from the token endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: crate::models::UserResponse,
}
