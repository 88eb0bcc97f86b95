//! CV recommendation rules.
//!
//! Rules are evaluated in a fixed order and the accumulated list is cut to
//! `MAX_RECOMMENDATIONS`. The generic "quantifiable achievements" entry is
//! appended last, so it is the one dropped when the first three rules all fire.

pub const MAX_RECOMMENDATIONS: usize = 3;

const MIN_SKILLS: usize = 5;

pub const ADD_SKILLS: &str = "Add more technical skills to your CV";
pub const ADD_PROJECTS: &str = "Include project descriptions to showcase experience";
pub const ADD_ACHIEVEMENTS: &str = "Add quantifiable achievements with numbers";

pub fn generate_recommendations(
    cv_text: &str,
    skills: &[String],
    target_role: Option<&str>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skills.len() < MIN_SKILLS {
        recommendations.push(ADD_SKILLS.to_string());
    }

    if !cv_text.to_lowercase().contains("project") {
        recommendations.push(ADD_PROJECTS.to_string());
    }

    if let Some(role) = target_role.filter(|r| !r.is_empty()) {
        recommendations.push(format!("Tailor CV to highlight relevant {role} experience"));
    }

    recommendations.push(ADD_ACHIEVEMENTS.to_string());

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
