//! Strength / weakness labels from skill-count and experience thresholds.
//! The two lists are independent; a mid-range profile gets neither.

pub const STRONG_SKILLS: &str = "Strong technical skills diversity";
pub const SOLID_EXPERIENCE: &str = "Solid industry experience";
pub const LIMITED_SKILLS: &str = "Limited technical skills";
pub const LIMITED_EXPERIENCE: &str = "Limited industry experience";

pub fn identify_strengths(skill_count: usize, experience_years: f64) -> Vec<String> {
    let mut strengths = Vec::new();
    if skill_count >= 8 {
        strengths.push(STRONG_SKILLS.to_string());
    }
    if experience_years >= 3.0 {
        strengths.push(SOLID_EXPERIENCE.to_string());
    }
    strengths
}

pub fn identify_weaknesses(skill_count: usize, experience_years: f64) -> Vec<String> {
    let mut weaknesses = Vec::new();
    if skill_count < 5 {
        weaknesses.push(LIMITED_SKILLS.to_string());
    }
    if experience_years < 2.0 {
        weaknesses.push(LIMITED_EXPERIENCE.to_string());
    }
    weaknesses
}
