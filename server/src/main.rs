#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let upstream = config.upstream_url.clone();

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, %upstream, "novademy listening");
    axum::serve(listener, app).await?;
    Ok(())
}
