// ============================
// crates/backend-lib/src/credentials.rs
// ============================
//! Read-only, in-memory credential registry.
use crate::auth::password::hash_password;
use crate::config::SeedUser;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// A user identity held by the credential store.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub username: String,
    pub name: String,
    /// `hex(salt):hex(derived_key)`, see [`crate::auth::password`]
    pub password_hash: String,
}

/// Registry of user identities, built once at startup.
///
/// Read-only after construction, so it is shared behind an `Arc` with no
/// lock. Lookup is exact-match and case-sensitive.
pub struct CredentialStore {
    users: HashMap<String, UserIdentity>,
}

impl CredentialStore {
    /// Build the store from seed users, hashing each password with a
    /// fresh salt.
    pub fn from_seed(seed: &[SeedUser]) -> Result<Self> {
        let mut users = HashMap::with_capacity(seed.len());
        for entry in seed {
            if entry.username.is_empty() {
                bail!("seed user with empty username");
            }
            let identity = UserIdentity {
                username: entry.username.clone(),
                name: entry.name.clone(),
                password_hash: hash_password(&entry.password)?,
            };
            if users.insert(entry.username.clone(), identity).is_some() {
                bail!("duplicate seed username '{}'", entry.username);
            }
        }
        Ok(Self { users })
    }

    /// Exact-match lookup; no case normalization.
    pub fn find(&self, username: &str) -> Option<&UserIdentity> {
        self.users.get(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
