//! Job matching — pluggable, trait-based scorer for CV ↔ job description fit.
//!
//! Default: `HeuristicMatcher` (keyword extraction + Jaccard overlap). Trained
//! models are out of scope; any future backend implements `JobMatcher` and the
//! heuristic stays available as the baseline.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`.

use serde::{Deserialize, Serialize};

use crate::scoring::extractor::{extract_keywords, merge_hints};
use crate::scoring::round_to;
use crate::scoring::similarity::jaccard_similarity;
use crate::scoring::vocabulary::Vocabulary;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    HighMatch,
    ModerateMatch,
    LowMatch,
}

impl MatchBand {
    /// ≥ 0.8 high, ≥ 0.6 moderate, else low. Both bounds inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            MatchBand::HighMatch
        } else if score >= 0.6 {
            MatchBand::ModerateMatch
        } else {
            MatchBand::LowMatch
        }
    }

    pub fn reasons(self) -> [&'static str; 2] {
        match self {
            MatchBand::HighMatch => ["Strong skill alignment", "Good experience match"],
            MatchBand::ModerateMatch => ["Some relevant experience", "Partial skill match"],
            MatchBand::LowMatch => ["Limited relevant experience", "Some skills missing"],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "match_score")]
    pub score: f64,
    #[serde(rename = "recommendation")]
    pub band: MatchBand,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

/// Optional skill lists supplied by the caller alongside the raw texts.
#[derive(Debug, Clone, Default)]
pub struct SkillHints {
    pub user_skills: Vec<String>,
    pub job_requirements: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait JobMatcher: Send + Sync {
    fn match_jobs(
        &self,
        cv_text: &str,
        job_description: &str,
        hints: &SkillHints,
    ) -> MatchResult;

    /// Short label for logs, e.g. "heuristic".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-overlap matcher.
///
/// 1. Extract vocabulary terms from both texts.
/// 2. score = Jaccard(cv_terms, jd_terms)
/// 3. Band from the unrounded score; confidence = score.
///
/// Skill hints are ignored unless enabled with `with_skill_hints(true)`; the
/// default output depends on the two texts alone.
pub struct HeuristicMatcher {
    vocabulary: Vocabulary,
    use_skill_hints: bool,
}

impl HeuristicMatcher {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            use_skill_hints: false,
        }
    }

    /// When enabled, in-vocabulary hints are added to the extracted keyword sets.
    pub fn with_skill_hints(mut self, enabled: bool) -> Self {
        self.use_skill_hints = enabled;
        self
    }
}

impl Default for HeuristicMatcher {
    fn default() -> Self {
        Self::new(Vocabulary::default_matching())
    }
}

impl JobMatcher for HeuristicMatcher {
    fn match_jobs(
        &self,
        cv_text: &str,
        job_description: &str,
        hints: &SkillHints,
    ) -> MatchResult {
        let mut cv_keywords = extract_keywords(cv_text, &self.vocabulary);
        let mut job_keywords = extract_keywords(job_description, &self.vocabulary);

        if self.use_skill_hints {
            merge_hints(&mut cv_keywords, &hints.user_skills, &self.vocabulary);
            merge_hints(&mut job_keywords, &hints.job_requirements, &self.vocabulary);
        }

        let score = jaccard_similarity(&cv_keywords, &job_keywords);
        let band = MatchBand::from_score(score);

        tracing::debug!(
            cv_keywords = ?cv_keywords,
            job_keywords = ?job_keywords,
            score,
            "keyword overlap computed"
        );

        MatchResult {
            score: round_to(score, 3),
            band,
            confidence: round_to(score, 3),
            reasons: band.reasons().iter().map(|r| r.to_string()).collect(),
        }
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
