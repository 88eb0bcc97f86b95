mod config;
mod errors;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobs Insider ML scoring service v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = config.load_vocabulary()?;
    info!(
        "Skill vocabularies loaded: {} matching terms, {} CV terms{}",
        vocabulary.matching.len(),
        vocabulary.cv.len(),
        config
            .vocabulary_path
            .as_ref()
            .map(|p| format!(" (from {})", p.display()))
            .unwrap_or_default()
    );

    let state = AppState::new(vocabulary, config.match_use_skill_hints);
    info!(
        "Scorers initialized (matcher: {}, predictor: {})",
        state.matcher.backend(),
        state.predictor.backend()
    );

    let cors = cors_layer(&config.cors_allowed_origins)?;
    if config.cors_allowed_origins.is_empty() {
        info!("CORS: permissive");
    } else {
        info!("CORS: {} allowed origin(s)", config.cors_allowed_origins.len());
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
