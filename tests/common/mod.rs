//! Shared test harness: in-memory store fakes and router helpers.
//!
//! Endpoint tests drive the real router (auth middleware included) via
//! `tower::ServiceExt::oneshot`, with the Postgres stores swapped for
//! in-memory fakes.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use recipe_api::app_state::AppState;
use recipe_api::auth::{Claims, JwtService};
use recipe_api::config::Config;
use recipe_api::error::{ApiError, Result};
use recipe_api::models::{NewUser, Tag, User};
use recipe_api::router::build_router;
use recipe_api::store::{TagStore, UserStore};

pub const TEST_JWT_SECRET: &str = "endpoint-test-secret";

/// In-memory `TagStore` keeping the same contract as the Postgres one:
/// explicit owner on every query, listing ordered by name descending.
#[derive(Default)]
pub struct MemoryTagStore {
    tags: Mutex<Vec<Tag>>,
}

#[async_trait]
impl TagStore for MemoryTagStore {
    async fn create(&self, owner: Uuid, name: &str) -> Result<Tag> {
        let tag = Tag {
            id: Uuid::new_v4(),
            owner_id: owner,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.tags
            .lock()
            .expect("tag store lock poisoned")
            .push(tag.clone());
        Ok(tag)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Tag>> {
        let mut tags: Vec<Tag> = self
            .tags
            .lock()
            .expect("tag store lock poisoned")
            .iter()
            .filter(|t| t.owner_id == owner)
            .cloned()
            .collect();
        tags.sort_by(|a, b| b.name.cmp(&a.name).then(a.id.cmp(&b.id)));
        Ok(tags)
    }
}

/// In-memory `UserStore` with the Postgres unique-email semantics.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().expect("user store lock poisoned");
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(ApiError::already_exists("User"));
        }
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("user store lock poisoned")
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        port: 0,
        database_url: "postgresql://localhost/unused".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        max_connections: 1,
        request_timeout: 5,
        log_level: "debug".to_string(),
    }
}

/// Build the application with in-memory stores.
pub fn test_app() -> (Router, AppState) {
    let config = test_config();
    let state = AppState::new(
        Arc::new(MemoryTagStore::default()),
        Arc::new(MemoryUserStore::default()),
        JwtService::new(&config.jwt_secret, config.jwt_expiration),
        config,
    );
    (build_router(state.clone()), state)
}

/// Seed a user account directly through the store.
///
/// Uses the minimum bcrypt cost to keep tests fast; the handlers verify
/// against whatever hash the store holds.
pub async fn seed_user(state: &AppState, email: &str, password: &str) -> User {
    let password_hash = bcrypt::hash(password, 4).expect("bcrypt hash failed");
    state
        .users
        .create(NewUser {
            email: email.to_string(),
            name: "Test Cook".to_string(),
            password_hash,
        })
        .await
        .expect("failed to seed test user")
}

/// Mint a valid bearer token for a seeded user.
pub fn token_for(state: &AppState, user: &User) -> String {
    let claims = Claims::new(user.id, user.email.clone(), 3600);
    state.jwt.encode_token(&claims).expect("failed to mint token")
}

/// Fire one request at the router and return status plus parsed JSON body.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router returned an error");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
