use serde::{Deserialize, Serialize};

const MIN_APPLICATION_VOLUME: usize = 10;
/// Seconds.
const MIN_AVERAGE_EFFORT: f64 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationInsights {
    pub total_applications: usize,
    pub average_time_per_app: f64,
    pub recommendation: Option<String>,
}

/// Summarizes a batch of applications by the time spent on each (seconds).
pub fn summarize_insights(time_spent_secs: &[u64]) -> ApplicationInsights {
    let total_applications = time_spent_secs.len();
    if total_applications == 0 {
        return ApplicationInsights {
            total_applications,
            average_time_per_app: 0.0,
            recommendation: None,
        };
    }

    // Summed as f64: a u64 total overflows on large per-application values.
    let average_time_per_app =
        time_spent_secs.iter().map(|&t| t as f64).sum::<f64>() / total_applications as f64;

    let recommendation = if total_applications < MIN_APPLICATION_VOLUME {
        "Increase application volume to improve success chances"
    } else if average_time_per_app < MIN_AVERAGE_EFFORT {
        "Spend more time tailoring each application"
    } else {
        "Good application effort. Keep tracking and optimize!"
    };

    ApplicationInsights {
        total_applications,
        average_time_per_app,
        recommendation: Some(recommendation.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let insights = summarize_insights(&[]);
        assert_eq!(insights.total_applications, 0);
        assert_eq!(insights.average_time_per_app, 0.0);
        assert!(insights.recommendation.is_none());
    }

    #[test]
    fn test_low_volume_takes_priority() {
        let insights = summarize_insights(&[10, 20]);
        assert_eq!(insights.average_time_per_app, 15.0);
        assert!(insights.recommendation.unwrap().contains("volume"));
    }

    #[test]
    fn test_low_effort() {
        let insights = summarize_insights(&[120; 12]);
        assert_eq!(
            insights.recommendation.as_deref(),
            Some("Spend more time tailoring each application")
        );
    }

    #[test]
    fn test_huge_time_values_do_not_overflow() {
        let insights = summarize_insights(&[u64::MAX, 1]);
        let expected = (u64::MAX as f64 + 1.0) / 2.0;
        assert!((insights.average_time_per_app - expected).abs() <= expected * 1e-12);
        assert_eq!(insights.total_applications, 2);
    }

    #[test]
    fn test_good_effort() {
        let insights = summarize_insights(&[300; 10]);
        assert!(insights.recommendation.unwrap().starts_with("Good application effort"));
    }
}
