// ============================
// crates/backend-lib/src/handlers/login.rs
// ============================
//! Login route.
use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use taskboard_common::{LoginRequest, LoginResponse};

/// `POST /api/login`
///
/// Field validation happens before any credential work. The 401 for a
/// wrong password is byte-identical to the 401 for an unknown user.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.username.is_empty() {
        return Err(AppError::Validation("username".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("password".to_string()));
    }

    let response = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(response))
}
