// File: crates/chart-web/src/main.rs
// Summary: Boots logging, the router, and the web server.

mod error;
mod handlers;
mod models;
mod router;
mod state;
mod templates;

use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let state = AppState::new();
    let app = router::app_router(state);

    let mut bind = env::var("PRISM_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    // Deployed environments usually hand us just a port.
    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        bind = format!("0.0.0.0:{port}");
    }

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("web server listening on {bind} (visit http://{bind})");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chart_web=info,tower_http=info")),
        )
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
