//! Application state shared across all handlers.

use std::sync::Arc;

use crate::auth::JwtService;
use crate::config::Config;
use crate::store::{TagStore, UserStore};

/// Application state cloned into every handler.
///
/// Stores are trait objects so endpoint tests can substitute in-memory
/// fakes for the Postgres implementations.
#[derive(Clone)]
pub struct AppState {
    /// Tag persistence
    pub tags: Arc<dyn TagStore>,
    /// User account persistence
    pub users: Arc<dyn UserStore>,
    /// JWT issuing and verification
    pub jwt: JwtService,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    pub fn new(
        tags: Arc<dyn TagStore>,
        users: Arc<dyn UserStore>,
        jwt: JwtService,
        config: Config,
    ) -> Self {
        Self {
            tags,
            users,
            jwt,
            config,
        }
    }
}
