//! Local viewer server: static files with client-side caching disabled, so a
//! regenerated questions.json is always picked up on reload.

use std::net::Ipv4Addr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::header::{HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 8000;

/// Explicit server configuration. The serving root is passed in rather than
/// taken from (or written into) the process working directory.
pub struct ServerConfig {
    pub port: u16,
    pub root: PathBuf,
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    if !config.root.join("questions.json").exists() {
        warn!(
            "questions.json not found under {}; run 'parse' first",
            config.root.display()
        );
    }

    let app = Router::new()
        .fallback_service(ServeDir::new(&config.root))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    info!("serving {} on port {}", config.root.display(), config.port);
    println!("Server running at http://localhost:{}", config.port);
    println!("Press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;
    Ok(())
}
