mod catalog;
mod config;
mod errors;
mod intake;
mod layout;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::careers::CAREER_PATHS;
use crate::config::Config;
use crate::layout::{FallbackPositionSource, PositionSource, PrecomputedPositionSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dreamer API v{}", env!("CARGO_PKG_VERSION"));
    info!("Career catalog loaded ({} careers)", CAREER_PATHS.len());

    let position_source = build_position_source(&config);
    info!("Position source: {}", position_source.backend());

    let state = AppState::new(&config, position_source);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Precomputed coordinates when configured and readable; the static layout otherwise.
fn build_position_source(config: &Config) -> Arc<dyn PositionSource> {
    let Some(path) = config.career_positions_path.as_deref() else {
        return Arc::new(FallbackPositionSource);
    };
    match PrecomputedPositionSource::from_file(path) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            warn!("Ignoring career positions file: {e:#}");
            Arc::new(FallbackPositionSource)
        }
    }
}
