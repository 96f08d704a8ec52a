use crate::auth::password::verify_password;
use crate::auth::{AuthService, CurrentUser, SessionManager};
use crate::credentials::CredentialStore;
use crate::error::AppError;
use crate::metrics as keys;
use ::metrics::counter;
use async_trait::async_trait;
use std::sync::Arc;
use taskboard_common::LoginResponse;
use zeroize::Zeroize;

// Well-formed stored hash burned on unknown usernames, so a failed login
// costs one scrypt derivation whether or not the username exists.
const DUMMY_HASH: &str = "00000000000000000000000000000000:\
     00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

pub struct DefaultAuth {
    users: Arc<CredentialStore>,
    sessions: SessionManager,
}

impl DefaultAuth {
    pub fn new(users: Arc<CredentialStore>, sessions: SessionManager) -> Self {
        Self { users, sessions }
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let user = self.users.find(username).cloned();
        let stored = user
            .as_ref()
            .map_or_else(|| DUMMY_HASH.to_string(), |u| u.password_hash.clone());

        // scrypt is CPU- and memory-hard; run it on the blocking pool and
        // finish before any session state is touched. The session lock is
        // never held across a derivation.
        let mut plain = password.to_string();
        let verified = tokio::task::spawn_blocking(move || {
            let ok = verify_password(&stored, &plain);
            plain.zeroize();
            ok
        })
        .await
        .map_err(|e| AppError::Internal(format!("verification task failed: {e}")))?;

        let Some(user) = user.filter(|_| verified) else {
            counter!(keys::LOGIN_FAILURE).increment(1);
            return Err(AppError::InvalidCredentials);
        };

        let token = self.sessions.issue(&user.username).await?;
        counter!(keys::LOGIN_SUCCESS).increment(1);
        tracing::info!(username = %user.username, "login succeeded");

        Ok(LoginResponse {
            username: user.username,
            name: user.name,
            token,
        })
    }

    async fn resolve_token(&self, token: &str) -> Option<CurrentUser> {
        let session = self.sessions.resolve(token).await?;
        let user = self.users.find(&session.username)?;
        Some(CurrentUser {
            username: user.username.clone(),
            name: user.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedUser;

    fn service() -> DefaultAuth {
        let seed = [SeedUser {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            password: "correct-password".to_string(),
        }];
        let users = Arc::new(CredentialStore::from_seed(&seed).unwrap());
        DefaultAuth::new(users, SessionManager::new())
    }

    #[tokio::test]
    async fn test_login_success_and_token_resolution() {
        let auth = service();
        let response = auth.login("admin", "correct-password").await.unwrap();
        assert_eq!(response.username, "admin");
        assert_eq!(response.name, "Administrator");
        assert_eq!(response.token.len(), 64);

        let current = auth.resolve_token(&response.token).await.unwrap();
        assert_eq!(current.username, "admin");
        assert_eq!(current.name, "Administrator");
    }

    #[tokio::test]
    async fn test_login_failures_are_uniform() {
        let auth = service();

        let wrong_password = auth.login("admin", "wrong-password").await.unwrap_err();
        let unknown_user = auth.login("ghost", "correct-password").await.unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_relogin_replaces_session() {
        let auth = service();
        let first = auth.login("admin", "correct-password").await.unwrap();
        let second = auth.login("admin", "correct-password").await.unwrap();

        assert!(auth.resolve_token(&first.token).await.is_none());
        assert!(auth.resolve_token(&second.token).await.is_some());
    }

    #[tokio::test]
    async fn test_forged_token_does_not_resolve() {
        let auth = service();
        auth.login("admin", "correct-password").await.unwrap();

        assert!(auth.resolve_token(r#"{"username":"admin"}"#).await.is_none());
        assert!(auth.resolve_token("deadbeef").await.is_none());
    }

    #[test]
    fn test_dummy_hash_is_well_formed() {
        // The dummy record must parse so the derivation actually runs;
        // a malformed record would short-circuit and leak timing.
        let (salt, key) = DUMMY_HASH.split_once(':').unwrap();
        assert_eq!(salt.len(), crate::auth::SALT_LEN * 2);
        assert_eq!(key.len(), crate::auth::KEY_LEN * 2);
    }
}
