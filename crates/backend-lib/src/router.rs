// ============================
// crates/backend-lib/src/router.rs
// ============================
//! Route wiring.
use crate::handlers::{items, login};
use crate::middleware::require_auth;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Plain-text liveness probe.
async fn hello() -> &'static str {
    "Hello World!"
}

/// Build the application router: open login and liveness routes, and the
/// item collection behind the authorization gate.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/todos", get(items::list_items).post(items::create_item))
        .route(
            "/api/todos/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api", get(hello))
        .route("/api/login", post(login::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
