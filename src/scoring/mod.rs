//! Evaluation scoring and training recommendations.
//!
//! Converts the five raw metric scores into an overall score (rounded
//! arithmetic mean) and a training-recommendation list driven by the
//! fixed rule tables in [`rules`]. Scoring is deterministic and
//! side-effect free; it runs once at evaluation creation or update and
//! its output is cached on the evaluation record.

pub mod rules;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Metrics;
use crate::validation;

/// Output of scoring one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Arithmetic mean of the five metrics, rounded to one decimal,
    /// clamped to `[0.0, 10.0]`.
    pub overall_score: f64,
    /// Ordered, de-duplicated training labels.
    pub recommended_training: Vec<String>,
}

/// Computes the overall score: mean of the five metrics, rounded to one
/// decimal place, clamped to `[0.0, 10.0]`.
///
/// Monotonic: raising any single metric never lowers the result.
pub fn overall_score(metrics: &Metrics) -> f64 {
    let sum: i32 = metrics.ordered().iter().map(|(_, v)| v).sum();
    let mean = sum as f64 / 5.0;
    ((mean * 10.0).round() / 10.0).clamp(0.0, 10.0)
}

/// Builds the training-recommendation list from both rule sources,
/// preserving first-seen order and dropping duplicates.
///
/// Metric-threshold rules fire first, in fixed metric order; then each
/// constraint string is scanned against the keyword table in list order.
pub fn recommended_training(metrics: &Metrics, constraints: &[String]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();

    for rule in &rules::METRIC_RULES {
        if rule.fires(metrics.get(rule.metric)) {
            push_unique(&mut labels, rule.label);
        }
    }

    for constraint in constraints {
        for rule in &rules::KEYWORD_RULES {
            if rule.fires(constraint) {
                push_unique(&mut labels, rule.label);
            }
        }
    }

    labels
}

/// Scores one evaluation request: validates the metrics, then computes
/// the overall score and training recommendations.
pub fn score(metrics: &Metrics, constraints: &[String]) -> EngineResult<ScoreReport> {
    validation::validate_metrics(metrics).map_err(EngineError::from_issues)?;

    Ok(ScoreReport {
        overall_score: overall_score(metrics),
        recommended_training: recommended_training(metrics, constraints),
    })
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|l| l == label) {
        labels.push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overall_score_is_rounded_mean() {
        // (3 + 8 + 7 + 9 + 6) / 5 = 6.6
        let m = Metrics::new(3, 8, 7, 9, 6);
        assert!((overall_score(&m) - 6.6).abs() < 1e-10);
    }

    #[test]
    fn test_overall_score_bounds() {
        assert!((overall_score(&Metrics::new(0, 0, 0, 0, 0))).abs() < 1e-10);
        assert!((overall_score(&Metrics::new(10, 10, 10, 10, 10)) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_overall_score_monotonic_in_each_metric() {
        let base = Metrics::new(4, 5, 6, 7, 8);
        let base_score = overall_score(&base);
        for kind in crate::models::MetricKind::ALL {
            let mut bumped = base;
            match kind {
                crate::models::MetricKind::Productivity => bumped.productivity += 1,
                crate::models::MetricKind::Quality => bumped.quality += 1,
                crate::models::MetricKind::Teamwork => bumped.teamwork += 1,
                crate::models::MetricKind::Innovation => bumped.innovation += 1,
                crate::models::MetricKind::Communication => bumped.communication += 1,
            }
            assert!(overall_score(&bumped) >= base_score);
        }
    }

    #[test]
    fn test_low_productivity_recommends_time_management() {
        let m = Metrics::new(3, 8, 7, 9, 6);
        let report = score(&m, &[]).unwrap();
        assert!((report.overall_score - 6.6).abs() < 1e-10);
        assert_eq!(
            report.recommended_training,
            vec!["Time Management & Workflow Training"]
        );
    }

    #[test]
    fn test_no_rule_fires() {
        let m = Metrics::new(6, 7, 8, 9, 10);
        let report = score(&m, &constraints(&["keeps delivering"])).unwrap();
        assert!(report.recommended_training.is_empty());
    }

    #[test]
    fn test_metric_rules_fire_in_fixed_order() {
        let m = Metrics::new(5, 5, 5, 5, 5);
        let labels = recommended_training(&m, &[]);
        assert_eq!(
            labels,
            vec![
                "Time Management & Workflow Training",
                "Quality Assurance Fundamentals",
                "Collaborative Teamwork Workshop",
                "Creative Problem Solving",
                "Effective Communication Skills",
            ]
        );
    }

    #[test]
    fn test_keyword_rules_append_in_constraint_order() {
        let m = Metrics::new(8, 8, 8, 8, 8);
        let labels = recommended_training(
            &m,
            &constraints(&[
                "needs LEADERSHIP exposure",
                "must improve around deadlines",
            ]),
        );
        assert_eq!(
            labels,
            vec![
                "Leadership Development Program",
                "Time Management & Workflow Training",
            ]
        );
    }

    #[test]
    fn test_duplicate_labels_kept_once_first_seen() {
        // Low productivity fires the time-management rule; the
        // "deadline" keyword maps to the same label and must not repeat.
        let m = Metrics::new(3, 8, 8, 8, 8);
        let labels = recommended_training(&m, &constraints(&["missed a deadline"]));
        assert_eq!(labels, vec!["Time Management & Workflow Training"]);
    }

    #[test]
    fn test_one_constraint_can_fire_multiple_rules() {
        let m = Metrics::new(8, 8, 8, 8, 8);
        let labels = recommended_training(
            &m,
            &constraints(&["mentor juniors and own the documentation"]),
        );
        assert_eq!(
            labels,
            vec!["Mentoring & Coaching Skills", "Technical Writing Essentials"]
        );
    }

    #[test]
    fn test_score_rejects_out_of_range_metric() {
        let m = Metrics::new(11, 5, 5, 5, 5);
        let err = score(&m, &[]).unwrap_err();
        assert!(err.to_string().contains("productivity"));
    }

    #[test]
    fn test_score_is_deterministic() {
        let m = Metrics::new(2, 9, 4, 7, 5);
        let cs = constraints(&["conflict with peers", "quality drop"]);
        let a = score(&m, &cs).unwrap();
        let b = score(&m, &cs).unwrap();
        assert_eq!(a, b);
    }
}
