// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core library for the Taskboard backend: credential verification,
//! session-token issuance, and the gated item collection.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod items;
pub mod metrics;
pub mod middleware;
pub mod router;

use crate::auth::{AuthService, DefaultAuth, SessionManager};
use crate::config::Settings;
use crate::credentials::CredentialStore;
use crate::items::ItemStore;
use anyhow::Result;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Session manager
    pub sessions: SessionManager,
    /// Read-only credential registry
    pub users: Arc<CredentialStore>,
    /// Item collection
    pub items: Arc<ItemStore>,
    /// Settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the state from settings. Seed passwords are hashed here,
    /// before the server accepts its first request.
    pub fn new(settings: Settings) -> Result<Self> {
        let users = Arc::new(CredentialStore::from_seed(&settings.seed_users)?);
        let sessions = SessionManager::new();
        let auth: Arc<dyn AuthService> =
            Arc::new(DefaultAuth::new(Arc::clone(&users), sessions.clone()));

        Ok(Self {
            auth,
            sessions,
            users,
            items: Arc::new(ItemStore::new()),
            settings: Arc::new(settings),
        })
    }
}
