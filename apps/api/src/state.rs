use std::sync::Arc;

use crate::scoring::analysis::CvAnalyzer;
use crate::scoring::matcher::{HeuristicMatcher, JobMatcher};
use crate::scoring::predictor::{RuleBasedPredictor, SuccessPredictor};
use crate::scoring::vocabulary::VocabularySet;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; the scorers hold no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable matcher. Default: HeuristicMatcher (keyword overlap).
    pub matcher: Arc<dyn JobMatcher>,
    pub analyzer: Arc<CvAnalyzer>,
    /// Pluggable predictor. Default: RuleBasedPredictor.
    pub predictor: Arc<dyn SuccessPredictor>,
}

impl AppState {
    pub fn new(vocabulary: VocabularySet, use_skill_hints: bool) -> Self {
        Self {
            matcher: Arc::new(
                HeuristicMatcher::new(vocabulary.matching).with_skill_hints(use_skill_hints),
            ),
            analyzer: Arc::new(CvAnalyzer::new(vocabulary.cv)),
            predictor: Arc::new(RuleBasedPredictor),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(VocabularySet::default(), false)
    }
}
