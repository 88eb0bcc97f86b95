//! Picks the CV version that best fits a job description.

use serde::{Deserialize, Serialize};

use crate::scoring::matcher::{JobMatcher, SkillHints};

/// A recommendation is only made above this match score.
pub const MIN_RECOMMENDATION_SCORE: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvVersion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CvVersionRecommendation {
    pub cv_version_id: String,
    pub cv_name: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvVersionOutcome {
    pub recommendation: Option<CvVersionRecommendation>,
    pub message: String,
}

/// Scores every version that has content; the first highest score wins.
pub fn recommend_cv_version(
    matcher: &dyn JobMatcher,
    job_description: &str,
    versions: &[CvVersion],
) -> CvVersionOutcome {
    if versions.is_empty() {
        return CvVersionOutcome {
            recommendation: None,
            message: "No CV versions found. Please upload a CV first.".to_string(),
        };
    }

    let hints = SkillHints::default();
    let mut best: Option<(&CvVersion, f64)> = None;

    for version in versions {
        let Some(content) = version.content.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        let score = matcher.match_jobs(content, job_description, &hints).score;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((version, score));
        }
    }

    match best {
        Some((version, score)) if score > MIN_RECOMMENDATION_SCORE => CvVersionOutcome {
            message: format!("AI recommends using \"{}\" for this application", version.name),
            recommendation: Some(CvVersionRecommendation {
                cv_version_id: version.id.clone(),
                cv_name: version.name.clone(),
                match_score: score,
            }),
        },
        _ => CvVersionOutcome {
            recommendation: None,
            message: "No suitable CV version found for this job".to_string(),
        },
    }
}
