//! Postgres-backed store implementations.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{NewUser, Tag, User};
use crate::store::{TagStore, UserStore};

#[derive(Clone)]
pub struct PgTagStore {
    pool: PgPool,
}

impl PgTagStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagStore for PgTagStore {
    async fn create(&self, owner: Uuid, name: &str) -> Result<Tag> {
        let tag = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (owner_id, name)
             VALUES ($1, $2)
             RETURNING id, owner_id, name, created_at",
        )
        .bind(owner)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(tag)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT id, owner_id, name, created_at
             FROM tags
             WHERE owner_id = $1
             ORDER BY name DESC, id",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, email, name, password_hash, created_at",
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::already_exists("User")
            }
            _ => ApiError::Database(e),
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password_hash, created_at
             FROM users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
