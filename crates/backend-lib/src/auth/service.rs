use crate::error::AppError;
use async_trait::async_trait;
use taskboard_common::LoginResponse;

/// The authenticated identity the gate attaches to a request. Read-only
/// for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub name: String,
}

/// Seam between the HTTP layer and the credential/session machinery.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and mint a session token.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// Resolve an opaque token to the identity it was issued to.
    async fn resolve_token(&self, token: &str) -> Option<CurrentUser>;
}
