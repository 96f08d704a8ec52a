use backend_lib::{config::Settings, router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the configured level applies
    // from the first log line.
    let settings = Settings::load().or_else(|err| {
        eprintln!("config load failed ({err}); trying config/default.toml");
        Settings::load_from("config/default.toml")
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let state = AppState::new(settings)?;
    let app = router::create_router(state.clone());

    let addr = state.settings.bind_addr;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, users = state.users.len(), "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
