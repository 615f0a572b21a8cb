//! Aggregation helpers for the dashboard: feature-mix breakdown for the
//! proportional chart and study-time formatting.

use serde::Serialize;

use crate::PromptRecord;

/// Feature labels the breakdown recognizes; anything else is bucketed under
/// "Other".
pub const KNOWN_FEATURES: &[&str] = &[
    "Factcheck",
    "Source Analysis",
    "Comparison",
    "Background Research",
    "Argument Building",
    "Concept Explanation",
    "Experiment Design",
    "Problem Solving",
    "Data Analyze",
    "Application",
];

/// Bucket every prompt by its feature label, collapsing unknown labels into
/// "Other". Buckets keep first-seen order.
pub fn feature_breakdown(prompts: &[PromptRecord]) -> Vec<(String, u32)> {
    let mut buckets: Vec<(String, u32)> = Vec::new();
    for prompt in prompts {
        let label = if KNOWN_FEATURES.contains(&prompt.feature.as_str()) {
            prompt.feature.as_str()
        } else {
            "Other"
        };
        match buckets.iter_mut().find(|(name, _)| name == label) {
            Some((_, count)) => *count += 1,
            None => buckets.push((label.to_string(), 1)),
        }
    }
    buckets
}

/// One slice of the proportional chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureShare {
    pub feature: String,
    pub count: u32,
    /// Percentage share, rounded independently per bucket; shares need not
    /// sum to exactly 100.
    pub percent: u32,
}

pub fn feature_shares(prompts: &[PromptRecord]) -> Vec<FeatureShare> {
    let total: u32 = prompts.len() as u32;
    feature_breakdown(prompts)
        .into_iter()
        .map(|(feature, count)| FeatureShare {
            feature,
            count,
            percent: (f64::from(count) / f64::from(total) * 100.0).round() as u32,
        })
        .collect()
}

/// Render cumulative study time as "{h} h {m} min", dropping a zero term.
pub fn format_study_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        return format!("{} min", rest);
    }
    if rest == 0 {
        return format!("{} h", hours);
    }
    format!("{} h {} min", hours, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(feature: &str) -> PromptRecord {
        PromptRecord {
            id: "p".to_string(),
            text: "t".to_string(),
            feature: feature.to_string(),
            reflection: String::new(),
            rating: None,
            pushed_to_community: false,
            user_added: false,
        }
    }

    #[test]
    fn breakdown_collapses_unknown_features() {
        let prompts = vec![
            record("Factcheck"),
            record("Factcheck"),
            record("Comparison"),
            record("Doodling"),
            record("Other"),
        ];
        assert_eq!(
            feature_breakdown(&prompts),
            vec![
                ("Factcheck".to_string(), 2),
                ("Comparison".to_string(), 1),
                ("Other".to_string(), 2),
            ]
        );
    }

    #[test]
    fn shares_round_independently() {
        let prompts = vec![
            record("Factcheck"),
            record("Factcheck"),
            record("Comparison"),
        ];
        let shares = feature_shares(&prompts);
        assert_eq!(shares[0].percent, 67);
        assert_eq!(shares[1].percent, 33);
    }

    #[test]
    fn study_minutes_formatting() {
        assert_eq!(format_study_minutes(135), "2 h 15 min");
        assert_eq!(format_study_minutes(60), "1 h");
        assert_eq!(format_study_minutes(45), "45 min");
        assert_eq!(format_study_minutes(0), "0 min");
    }
}
