// ================
// common/src/lib.rs
// ================
//! Wire types shared between the Taskboard client and server.
//! This module defines the request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
///
/// Both fields default to empty so an absent field surfaces as a
/// field-level validation failure instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub username: String,
    /// Display name of the authenticated user
    pub name: String,
    /// Opaque session token; its only meaning is as a lookup key held by
    /// the issuing server
    pub token: String,
}

/// An item as it appears on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemBody {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub title: String,
}

/// Body of `PUT /api/todos/{id}`.
///
/// Absent fields leave the stored value unchanged; `completed: false` is
/// a real update, not an omission.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
