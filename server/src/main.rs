//! Globoticket server: builds the database pool, serves the API and the static bundle.
//!
//! Run from repo root: `cargo run -p globoticket-server`

use globoticket_api::{app_router, connect, AppState, PgEventStore, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("globoticket_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if !settings.static_dir.is_dir() {
        tracing::warn!(dir = %settings.static_dir.display(), "static directory not found; only API routes will answer");
    }

    let pool = connect(&settings).await?;
    let state = AppState::new(PgEventStore::new(pool, &settings.events_table));

    let app = app_router(state.clone(), &settings.static_dir);
    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.store.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
