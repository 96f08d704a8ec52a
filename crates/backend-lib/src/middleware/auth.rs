// ============================
// crates/backend-lib/src/middleware/auth.rs
// ============================
//! Authorization gate for protected routes.
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Request header carrying the opaque session token verbatim. No scheme
/// prefix; the value is trimmed and looked up as-is.
pub const AUTH_HEADER: &str = "x-authorization";

/// Admit the request if its token resolves to a live session, attaching
/// the resolved identity for downstream handlers; reject otherwise.
///
/// Performs no business logic of its own.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        tracing::debug!("request rejected: missing credentials");
        return Err(AppError::Unauthorized);
    }

    let Some(current_user) = state.auth.resolve_token(token).await else {
        tracing::debug!("request rejected: invalid or expired session");
        return Err(AppError::Unauthorized);
    };

    request.extensions_mut().insert(current_user);
    Ok(next.run(request).await)
}
