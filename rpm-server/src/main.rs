mod routes;
mod singleton;
mod state;

use anyhow::Result;
use axum::Router;
use rpm_core::config::RpmConfig;
use rpm_core::{CalendarEvent, Category, RpmBlock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RpmConfig::load()?;
    let data_dir = config.data_path();
    std::fs::create_dir_all(&data_dir)?;

    // Ensure only one instance is running
    let _lock = singleton::acquire_lock(&data_dir)?;

    let state = AppState::new(&data_dir)?;
    tracing::info!("serving stores from {}", data_dir.display());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("rpm-server listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("rpm-server stopped");
    Ok(())
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::resources::router::<Category>())
        .merge(routes::resources::router::<CalendarEvent>())
        .merge(routes::resources::router::<RpmBlock>())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
