//! Application success prediction.
//!
//! `RuleBasedPredictor` is the default `SuccessPredictor`: a base probability
//! nudged by independent additive rules, then clamped. Its numeric output is
//! relied on by clients, so any model-backed predictor must live beside it
//! rather than replace it.

use serde::{Deserialize, Serialize};

use crate::scoring::round_to;
use crate::scoring::ScoringError;

const BASE_PROBABILITY: f64 = 0.5;

const STRONG_CV_THRESHOLD: f64 = 0.8;
const STRONG_CV_BONUS: f64 = 0.15;

const SUCCESS_HISTORY_THRESHOLD: f64 = 0.3;
const SUCCESS_HISTORY_BONUS: f64 = 0.1;

/// Seconds. More than ten minutes on an application counts as real effort.
const EFFORT_THRESHOLD_SECS: i64 = 600;
const EFFORT_BONUS: f64 = 0.1;

const FRESH_POSTING_DAYS: i64 = 7;
const FRESH_POSTING_BONUS: f64 = 0.1;

/// Exact, case-sensitive board names. Unknown boards add nothing.
const JOB_BOARD_ADJUSTMENTS: &[(&str, f64)] = &[
    ("LinkedIn", 0.05),
    ("Indeed", 0.02),
    ("Direct", 0.08),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionBand {
    HighChance,
    ModerateChance,
    LowChance,
}

impl PredictionBand {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.7 {
            PredictionBand::HighChance
        } else if probability >= 0.5 {
            PredictionBand::ModerateChance
        } else {
            PredictionBand::LowChance
        }
    }

    /// Fixed per band; not derived from the probability itself.
    pub fn confidence(self) -> f64 {
        match self {
            PredictionBand::HighChance => 0.8,
            PredictionBand::ModerateChance => 0.7,
            PredictionBand::LowChance => 0.6,
        }
    }
}

/// Signals describing one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFactors {
    pub days_since_posted: i64,
    #[serde(rename = "cv_version_score")]
    pub cv_score: f64,
    #[serde(rename = "time_spent")]
    pub time_spent_secs: i64,
    #[serde(rename = "previous_success_rate")]
    pub success_rate_history: f64,
    pub job_board: String,
}

/// Subset of the inputs echoed back with a prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorEcho {
    pub cv_score: f64,
    pub time_invested: i64,
    pub fresh_posting: bool,
    pub job_board: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "success_probability")]
    pub probability: f64,
    #[serde(rename = "recommendation")]
    pub band: PredictionBand,
    pub factors: FactorEcho,
    pub confidence: f64,
}

pub trait SuccessPredictor: Send + Sync {
    fn predict(&self, factors: &PredictionFactors) -> Result<PredictionResult, ScoringError>;

    fn backend(&self) -> &'static str;
}

#[derive(Debug, Default, Clone)]
pub struct RuleBasedPredictor;

impl RuleBasedPredictor {
    pub fn board_adjustment(job_board: &str) -> f64 {
        JOB_BOARD_ADJUSTMENTS
            .iter()
            .find(|(board, _)| *board == job_board)
            .map(|(_, adjustment)| *adjustment)
            .unwrap_or(0.0)
    }
}

impl SuccessPredictor for RuleBasedPredictor {
    fn predict(&self, factors: &PredictionFactors) -> Result<PredictionResult, ScoringError> {
        ensure_finite("cv_version_score", factors.cv_score)?;
        ensure_finite("previous_success_rate", factors.success_rate_history)?;

        let fresh_posting = factors.days_since_posted < FRESH_POSTING_DAYS;

        let mut probability = BASE_PROBABILITY;
        if factors.cv_score > STRONG_CV_THRESHOLD {
            probability += STRONG_CV_BONUS;
        }
        if factors.success_rate_history > SUCCESS_HISTORY_THRESHOLD {
            probability += SUCCESS_HISTORY_BONUS;
        }
        if factors.time_spent_secs > EFFORT_THRESHOLD_SECS {
            probability += EFFORT_BONUS;
        }
        if fresh_posting {
            probability += FRESH_POSTING_BONUS;
        }
        probability += Self::board_adjustment(&factors.job_board);

        let probability = probability.clamp(0.0, 1.0);
        let band = PredictionBand::from_probability(probability);

        Ok(PredictionResult {
            probability: round_to(probability, 3),
            band,
            factors: FactorEcho {
                cv_score: factors.cv_score,
                time_invested: factors.time_spent_secs,
                fresh_posting,
                job_board: factors.job_board.clone(),
            },
            confidence: band.confidence(),
        })
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::NonFiniteInput { field, value })
    }
}
