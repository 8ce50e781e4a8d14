//! Study Assistant HTTP Server Binary
//!
//! This is the main entry point for the study-assistant REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin study-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CONFIG_FILE`: Optional TOML configuration file
//! - `REPOSITORY_TYPE`: Storage backend selection (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use studyassistant_rust::db::{self, RepositoryConfig};
use studyassistant_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Study Assistant HTTP Server");

    // Optional configuration file; env vars below override its values.
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => Some(RepositoryConfig::from_file(&path)?),
        Err(_) => None,
    };

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let default_host = config
        .as_ref()
        .map(|c| c.server.host.clone())
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let default_port = config.as_ref().map(|c| c.server.port).unwrap_or(8080);

    let host = env::var("HOST").unwrap_or(default_host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default_port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
