pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::errors::AppError;
use crate::scoring::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match-jobs", post(handlers::handle_match_jobs))
        .route("/api/v1/analyze-cv", post(handlers::handle_analyze_cv))
        .route(
            "/api/v1/analyze-cv/upload",
            post(handlers::handle_analyze_cv_upload),
        )
        .route(
            "/api/v1/predict-success",
            post(handlers::handle_predict_success),
        )
        .route(
            "/api/v1/recommend-cv-version",
            post(handlers::handle_recommend_cv_version),
        )
        .route("/api/v1/insights", post(handlers::handle_insights))
        .fallback(not_found)
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise an explicit allow-list.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
