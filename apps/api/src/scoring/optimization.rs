use serde::{Deserialize, Serialize};

use crate::scoring::round_to;

/// Component weights for the CV optimization score. They sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationWeights {
    pub skills: f64,
    pub experience: f64,
    pub completeness: f64,
}

impl Default for OptimizationWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            completeness: 0.3,
        }
    }
}

const SKILLS_SATURATION: f64 = 10.0;
const EXPERIENCE_SATURATION_YEARS: f64 = 5.0;
const OUTSTANDING_RECOMMENDATION_CAP: f64 = 3.0;

/// Weighted CV score in [0, 1], rounded to 2 decimals.
///
/// skills = min(n/10, 1), experience = min(years/5, 1),
/// completeness = max(0, (3 - recommendations)/3).
pub fn compute_optimization_score(
    skills: &[String],
    experience_years: f64,
    recommendations: &[String],
    weights: &OptimizationWeights,
) -> f64 {
    let skills_part = (skills.len() as f64 / SKILLS_SATURATION).min(1.0);
    let experience_part = (experience_years / EXPERIENCE_SATURATION_YEARS).min(1.0);
    let completeness_part = ((OUTSTANDING_RECOMMENDATION_CAP - recommendations.len() as f64)
        / OUTSTANDING_RECOMMENDATION_CAP)
        .max(0.0);

    let score = skills_part * weights.skills
        + experience_part * weights.experience
        + completeness_part * weights.completeness;

    round_to(score, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    #[test]
    fn test_saturated_profile_scores_one() {
        let w = OptimizationWeights::default();
        let score = compute_optimization_score(&items(12), 8.0, &[], &w);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_empty_profile_with_three_recommendations() {
        let w = OptimizationWeights::default();
        let score = compute_optimization_score(&[], 0.0, &items(3), &w);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_typical_profile() {
        // 3 skills → 0.12, 2 years → 0.12, 3 recs → 0.0
        let w = OptimizationWeights::default();
        let score = compute_optimization_score(&items(3), 2.0, &items(3), &w);
        assert_eq!(score, 0.24);
    }

    #[test]
    fn test_one_outstanding_recommendation() {
        // 6 skills → 0.24, 5 years → 0.3, 1 rec → 0.2
        let w = OptimizationWeights::default();
        let score = compute_optimization_score(&items(6), 5.0, &items(1), &w);
        assert_eq!(score, 0.74);
    }

    #[test]
    fn test_completeness_floor_at_zero() {
        let w = OptimizationWeights::default();
        let score = compute_optimization_score(&[], 0.0, &items(5), &w);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_monotonic_in_skills_and_experience() {
        let w = OptimizationWeights::default();
        let recs = items(1);
        let mut prev = 0.0;
        for n in 0..15 {
            let score = compute_optimization_score(&items(n), 2.0, &recs, &w);
            assert!(score >= prev, "skills {n}: {score} < {prev}");
            prev = score;
        }
        let mut prev = 0.0;
        for years in 0..10 {
            let score = compute_optimization_score(&items(4), years as f64, &recs, &w);
            assert!(score >= prev, "years {years}: {score} < {prev}");
            prev = score;
        }
    }
}
