//! Persistence seam for the API.
//!
//! Handlers never touch SQL directly; they go through the store traits so
//! the ownership filter is always an explicit parameter and endpoint tests
//! can substitute in-memory fakes for Postgres.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewUser, Tag, User};

pub mod db;
pub mod postgres;

pub use postgres::{PgTagStore, PgUserStore};

/// Tag persistence operations.
///
/// Every query takes the owner explicitly; listings are ordered by `name`
/// descending (ties broken by id, for determinism).
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Persist a new tag owned by `owner`. The name is stored as given;
    /// normalization happens in the handler before this call.
    async fn create(&self, owner: Uuid, name: &str) -> Result<Tag>;

    /// All tags owned by `owner`, ordered by name descending.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Tag>>;
}

/// User account persistence operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account. Fails with `Conflict` when the email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Look up an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
