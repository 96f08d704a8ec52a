// ============================
// crates/backend-lib/src/auth/session.rs
// ============================
//! Session token handling and management.
use crate::auth::token::generate_token;
use crate::metrics as keys;
use ::metrics::{counter, gauge};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

/// A live session binding a token to a user.
#[derive(Debug, Clone)]
pub struct Session {
    /// Lookup key into the credential store, not an owned identity
    pub username: String,
    pub issued_at: SystemTime,
}

// Both maps mutate together, so they live behind one lock.
#[derive(Default)]
struct SessionTable {
    by_token: HashMap<String, Session>,
    token_by_user: HashMap<String, String>,
}

/// Session manager for authentication tokens.
///
/// Enforces at most one live session per user: issuing a new token
/// removes the user's previous one inside the same critical section, so
/// two racing logins can never leave two simultaneously valid tokens.
#[derive(Clone, Default)]
pub struct SessionManager {
    table: Arc<RwLock<SessionTable>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a token for `username`, replacing any prior session.
    ///
    /// Token generation happens before the lock is taken; the write lock
    /// only covers the revoke-then-insert on the table itself.
    pub async fn issue(&self, username: &str) -> anyhow::Result<String> {
        let token = generate_token()?;
        let session = Session {
            username: username.to_string(),
            issued_at: SystemTime::now(),
        };

        let mut table = self.table.write().await;
        if let Some(old) = table
            .token_by_user
            .insert(username.to_string(), token.clone())
        {
            table.by_token.remove(&old);
            counter!(keys::SESSION_REPLACED).increment(1);
        }
        table.by_token.insert(token.clone(), session);

        counter!(keys::SESSION_ISSUED).increment(1);
        gauge!(keys::SESSION_ACTIVE).set(table.by_token.len() as f64);

        Ok(token)
    }

    /// Resolve a token by exact lookup.
    ///
    /// The token is never parsed or decoded; anything this manager did
    /// not mint comes back as `None`.
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let table = self.table.read().await;
        table.by_token.get(token).cloned()
    }

    /// Drop the live session for `username`, if any.
    pub async fn revoke(&self, username: &str) -> bool {
        let mut table = self.table.write().await;
        let Some(token) = table.token_by_user.remove(username) else {
            return false;
        };
        table.by_token.remove(&token);
        gauge!(keys::SESSION_ACTIVE).set(table.by_token.len() as f64);
        true
    }

    /// Number of live sessions.
    pub async fn active_count(&self) -> usize {
        self.table.read().await.by_token.len()
    }
}
