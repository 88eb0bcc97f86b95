//! Axum route handlers for the scoring API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::scoring::analysis::CvProfile;
use crate::scoring::document::{extract_cv_text, DocumentKind};
use crate::scoring::insights::{summarize_insights, ApplicationInsights};
use crate::scoring::matcher::{MatchResult, SkillHints};
use crate::scoring::predictor::{PredictionFactors, PredictionResult};
use crate::scoring::versions::{recommend_cv_version, CvVersion, CvVersionOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub user_cv: String,
    pub job_description: String,
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
    #[serde(default)]
    pub job_requirements: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCvRequest {
    pub cv_text: String,
    #[serde(default)]
    pub target_job: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendCvVersionRequest {
    pub job_description: String,
    pub cv_versions: Vec<CvVersion>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationEffort {
    /// Seconds; missing counts as zero.
    #[serde(default)]
    pub time_spent: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub applications: Vec<ApplicationEffort>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match-jobs
///
/// Keyword-overlap fit between a CV and a job description.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<MatchResult>, AppError> {
    info!("Processing job match request");

    let hints = SkillHints {
        user_skills: request.user_skills.unwrap_or_default(),
        job_requirements: request.job_requirements.unwrap_or_default(),
    };
    let result = state
        .matcher
        .match_jobs(&request.user_cv, &request.job_description, &hints);

    debug!(
        backend = state.matcher.backend(),
        score = result.score,
        band = ?result.band,
        "job match scored"
    );
    Ok(Json(result))
}

/// POST /api/v1/analyze-cv
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCvRequest>,
) -> Result<Json<CvProfile>, AppError> {
    info!("Processing CV analysis request");

    let profile = state
        .analyzer
        .analyze(&request.cv_text, request.target_job.as_deref());

    debug!(
        skills = profile.skills.len(),
        optimization_score = profile.optimization_score,
        "CV analyzed"
    );
    Ok(Json(profile))
}

/// POST /api/v1/analyze-cv/upload
///
/// Multipart form: `file` (PDF or plain text, required), `target_job` (optional).
pub async fn handle_analyze_cv_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CvProfile>, AppError> {
    info!("Processing CV upload analysis request");

    let mut upload: Option<(Bytes, DocumentKind)> = None;
    let mut target_job: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                let kind =
                    DocumentKind::detect(&bytes, content_type.as_deref(), file_name.as_deref());
                upload = Some((bytes, kind));
            }
            Some("target_job") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read target_job: {e}")))?;
                target_job = Some(value);
            }
            _ => {}
        }
    }

    let (bytes, kind) = upload
        .ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;
    debug!(kind = ?kind, size = bytes.len(), "CV document received");

    let cv_text = tokio::task::spawn_blocking(move || extract_cv_text(&bytes, kind))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Document extraction task failed: {e}")))??;

    let profile = state.analyzer.analyze(&cv_text, target_job.as_deref());
    Ok(Json(profile))
}

/// POST /api/v1/predict-success
pub async fn handle_predict_success(
    State(state): State<AppState>,
    Json(factors): Json<PredictionFactors>,
) -> Result<Json<PredictionResult>, AppError> {
    info!("Processing success prediction request");

    let prediction = state.predictor.predict(&factors)?;

    debug!(
        backend = state.predictor.backend(),
        probability = prediction.probability,
        band = ?prediction.band,
        "success predicted"
    );
    Ok(Json(prediction))
}

/// POST /api/v1/recommend-cv-version
///
/// Picks the caller's CV version that best matches one job description.
pub async fn handle_recommend_cv_version(
    State(state): State<AppState>,
    Json(request): Json<RecommendCvVersionRequest>,
) -> Result<Json<CvVersionOutcome>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    info!(
        versions = request.cv_versions.len(),
        "Processing CV version recommendation request"
    );

    let outcome = recommend_cv_version(
        state.matcher.as_ref(),
        &request.job_description,
        &request.cv_versions,
    );
    Ok(Json(outcome))
}

/// POST /api/v1/insights
pub async fn handle_insights(
    Json(request): Json<InsightsRequest>,
) -> Result<Json<ApplicationInsights>, AppError> {
    info!(
        applications = request.applications.len(),
        "Processing application insights request"
    );

    let efforts: Vec<u64> = request
        .applications
        .iter()
        .map(|a| a.time_spent.unwrap_or(0))
        .collect();
    Ok(Json(summarize_insights(&efforts)))
}
