// Scoring engine: keyword extraction, similarity, experience inference,
// recommendations and rule-based prediction. Everything here is pure and
// synchronous; handlers.rs is the only part that knows about HTTP.

pub mod analysis;
pub mod document;
pub mod experience;
pub mod extractor;
pub mod handlers;
pub mod insights;
pub mod matcher;
pub mod optimization;
pub mod predictor;
pub mod profile;
pub mod recommendations;
pub mod similarity;
pub mod versions;
pub mod vocabulary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
}

/// Rounds half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
