// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level handed to the tracing subscriber
    pub log_level: String,
    /// Users hashed into the credential store at startup. The store is
    /// read-only afterwards; there is no registration flow.
    pub seed_users: Vec<SeedUser>,
}

/// A user seeded into the in-memory credential store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    /// Display name returned by the login route
    pub name: String,
    /// Plaintext only at startup; hashed with a fresh salt before the
    /// server accepts requests
    pub password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().expect("static bind address"),
            log_level: "info".to_string(),
            seed_users: vec![SeedUser {
                username: "admin".to_string(),
                name: "Administrator".to_string(),
                password: "certamen123".to_string(),
            }],
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Settings {
    /// Load settings from `config.toml` plus `TASKBOARD_`-prefixed
    /// environment variables. Missing files fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings from an explicit config file path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Settings = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("TASKBOARD_"))
            .extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the server cannot safely start with.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            bail!("invalid log level '{}'", self.log_level);
        }
        if self.seed_users.is_empty() {
            bail!("at least one seed user is required");
        }

        let mut seen = HashSet::new();
        for user in &self.seed_users {
            if user.username.trim().is_empty() {
                bail!("seed user with empty username");
            }
            if user.password.is_empty() {
                bail!("seed user '{}' has an empty password", user.username);
            }
            if !seen.insert(user.username.as_str()) {
                bail!("duplicate seed username '{}'", user.username);
            }
        }
        Ok(())
    }
}
