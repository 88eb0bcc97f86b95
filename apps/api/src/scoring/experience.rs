use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when the text carries no "N years" signal. Low confidence.
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 2.0;

// ASCII digits only; other scripts' numerals do not count as a years signal.
static YEARS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs)").expect("years pattern is a valid regex")
});

/// Extracts years of experience from free text.
///
/// Takes the numerically largest "N years" / "N+ yrs" mention, since CVs
/// usually state both per-role and total experience.
pub fn extract_experience_years(text: &str) -> f64 {
    YEARS_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .fold(None, |best: Option<f64>, years| {
            Some(best.map_or(years, |b| b.max(years)))
        })
        .unwrap_or(DEFAULT_EXPERIENCE_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_years() {
        assert_eq!(extract_experience_years("3+ years of experience"), 3.0);
    }

    #[test]
    fn test_no_mention_defaults() {
        assert_eq!(
            extract_experience_years("no experience mentioned"),
            DEFAULT_EXPERIENCE_YEARS
        );
    }

    #[test]
    fn test_empty_text_defaults() {
        assert_eq!(extract_experience_years(""), 2.0);
    }

    #[test]
    fn test_takes_numeric_maximum() {
        let text = "3 years at Acme, 10 years total in software, 7 yrs Python";
        assert_eq!(extract_experience_years(text), 10.0);
    }

    #[test]
    fn test_case_insensitive_units() {
        assert_eq!(extract_experience_years("5 YEARS in backend"), 5.0);
        assert_eq!(extract_experience_years("4YRS devops"), 4.0);
    }

    #[test]
    fn test_singular_year() {
        assert_eq!(extract_experience_years("1 year internship"), 1.0);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_match() {
        assert_eq!(extract_experience_years("٣ years in backend"), DEFAULT_EXPERIENCE_YEARS);
        assert_eq!(extract_experience_years("٣ years, then 4 years"), 4.0);
    }

    #[test]
    fn test_zero_years_is_a_match_not_default() {
        assert_eq!(extract_experience_years("0 years professional"), 0.0);
    }
}
