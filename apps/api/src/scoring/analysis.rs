//! CV analysis: skills, experience, recommendations, score and labels in one pass.

use serde::{Deserialize, Serialize};

use crate::scoring::experience::extract_experience_years;
use crate::scoring::extractor::extract_skills;
use crate::scoring::optimization::{compute_optimization_score, OptimizationWeights};
use crate::scoring::profile::{identify_strengths, identify_weaknesses};
use crate::scoring::recommendations::generate_recommendations;
use crate::scoring::vocabulary::Vocabulary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvProfile {
    #[serde(rename = "skills_found")]
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub recommendations: Vec<String>,
    pub optimization_score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

pub struct CvAnalyzer {
    vocabulary: Vocabulary,
    weights: OptimizationWeights,
}

impl CvAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            weights: OptimizationWeights::default(),
        }
    }

    pub fn analyze(&self, cv_text: &str, target_role: Option<&str>) -> CvProfile {
        let skills = extract_skills(cv_text, &self.vocabulary);
        let experience_years = extract_experience_years(cv_text);
        let recommendations = generate_recommendations(cv_text, &skills, target_role);
        let optimization_score =
            compute_optimization_score(&skills, experience_years, &recommendations, &self.weights);

        CvProfile {
            strengths: identify_strengths(skills.len(), experience_years),
            weaknesses: identify_weaknesses(skills.len(), experience_years),
            skills,
            experience_years,
            recommendations,
            optimization_score,
        }
    }
}

impl Default for CvAnalyzer {
    fn default() -> Self {
        Self::new(Vocabulary::default_cv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::profile::{LIMITED_SKILLS, SOLID_EXPERIENCE, STRONG_SKILLS};
    use crate::scoring::recommendations::{ADD_ACHIEVEMENTS, ADD_PROJECTS, ADD_SKILLS};

    const SENIOR_CV: &str = "
        Staff engineer, 8+ years building platforms.
        Stack: JavaScript, TypeScript, React, Node.js, Python, SQL, AWS, Docker, Kubernetes.
        Projects: migrated a monolith to services, cut infra cost by 30%.
    ";

    #[test]
    fn test_senior_cv_profile() {
        let profile = CvAnalyzer::default().analyze(SENIOR_CV, None);

        // Java is found inside JavaScript.
        assert_eq!(
            profile.skills,
            vec![
                "JavaScript",
                "Python",
                "React",
                "Node.js",
                "TypeScript",
                "Java",
                "SQL",
                "AWS",
                "Docker",
                "Kubernetes",
            ]
        );
        assert_eq!(profile.experience_years, 8.0);
        assert_eq!(profile.recommendations, vec![ADD_ACHIEVEMENTS.to_string()]);
        // 0.4 + 0.3 + (2/3)*0.3 = 0.9
        assert_eq!(profile.optimization_score, 0.9);
        assert_eq!(
            profile.strengths,
            vec![STRONG_SKILLS.to_string(), SOLID_EXPERIENCE.to_string()]
        );
        assert!(profile.weaknesses.is_empty());
    }

    #[test]
    fn test_sparse_cv_with_target_role() {
        let profile = CvAnalyzer::default().analyze("Junior developer, Python", Some("Backend"));

        assert_eq!(profile.skills, vec!["Python"]);
        assert_eq!(profile.experience_years, 2.0);
        assert_eq!(
            profile.recommendations,
            vec![
                ADD_SKILLS.to_string(),
                ADD_PROJECTS.to_string(),
                "Tailor CV to highlight relevant Backend experience".to_string(),
            ]
        );
        // 0.04 + 0.12 + 0.0
        assert_eq!(profile.optimization_score, 0.16);
        assert!(profile.strengths.is_empty());
        assert_eq!(profile.weaknesses, vec![LIMITED_SKILLS.to_string()]);
    }

    #[test]
    fn test_empty_cv() {
        let profile = CvAnalyzer::default().analyze("", None);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 2.0);
        assert_eq!(profile.recommendations.len(), 3);
        assert_eq!(profile.optimization_score, 0.12);
    }

    #[test]
    fn test_custom_vocabulary_analyzer() {
        let analyzer = CvAnalyzer::new(Vocabulary::new(["Rust", "Tokio"]));
        let profile = analyzer.analyze("tokio and rust, project lead", None);
        assert_eq!(profile.skills, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let value = serde_json::to_value(CvAnalyzer::default().analyze("python", None)).unwrap();
        assert!(value["skills_found"].is_array());
        assert_eq!(value["experience_years"], 2.0);
        assert!(value.get("optimization_score").is_some());
    }
}
