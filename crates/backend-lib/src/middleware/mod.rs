// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the Taskboard HTTP server.

pub mod auth;

pub use auth::{require_auth, AUTH_HEADER};
