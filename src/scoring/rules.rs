//! Fixed training-recommendation rule tables.
//!
//! Two rule sources feed the recommendation list:
//!
//! - **Metric-threshold rules**: one per metric, firing when the score
//!   falls strictly below the threshold.
//! - **Constraint-keyword rules**: a keyword fact base scanned against
//!   each free-text constraint string (case-insensitive substring).
//!
//! Both tables are fixed configuration data, not learned state, so they
//! can be audited and tested independently of the scoring arithmetic.

use crate::models::MetricKind;

/// Metric score below which training is recommended.
pub const METRIC_THRESHOLD: i32 = 6;

/// A metric-threshold rule: fires when the metric value is strictly
/// below [`METRIC_THRESHOLD`].
#[derive(Debug, Clone, Copy)]
pub struct MetricRule {
    /// The metric this rule watches.
    pub metric: MetricKind,
    /// Canonical training label appended when the rule fires.
    pub label: &'static str,
}

/// A keyword rule: keyword presence in a constraint implies a training need.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Lowercase keyword matched as a substring.
    pub keyword: &'static str,
    /// Canonical training label appended when the rule fires.
    pub label: &'static str,
}

/// Metric rules, evaluated in this fixed order.
pub const METRIC_RULES: [MetricRule; 5] = [
    MetricRule {
        metric: MetricKind::Productivity,
        label: "Time Management & Workflow Training",
    },
    MetricRule {
        metric: MetricKind::Quality,
        label: "Quality Assurance Fundamentals",
    },
    MetricRule {
        metric: MetricKind::Teamwork,
        label: "Collaborative Teamwork Workshop",
    },
    MetricRule {
        metric: MetricKind::Innovation,
        label: "Creative Problem Solving",
    },
    MetricRule {
        metric: MetricKind::Communication,
        label: "Effective Communication Skills",
    },
];

/// Keyword rules, scanned per constraint string in this order.
pub const KEYWORD_RULES: [KeywordRule; 8] = [
    KeywordRule {
        keyword: "deadline",
        label: "Time Management & Workflow Training",
    },
    KeywordRule {
        keyword: "quality",
        label: "Quality Assurance Fundamentals",
    },
    KeywordRule {
        keyword: "leadership",
        label: "Leadership Development Program",
    },
    KeywordRule {
        keyword: "mentor",
        label: "Mentoring & Coaching Skills",
    },
    KeywordRule {
        keyword: "presentation",
        label: "Presentation & Public Speaking",
    },
    KeywordRule {
        keyword: "conflict",
        label: "Conflict Resolution Workshop",
    },
    KeywordRule {
        keyword: "documentation",
        label: "Technical Writing Essentials",
    },
    KeywordRule {
        keyword: "certification",
        label: "Professional Certification Program",
    },
];

impl MetricRule {
    /// Whether this rule fires for the given metric value.
    pub fn fires(&self, value: i32) -> bool {
        value < METRIC_THRESHOLD
    }
}

impl KeywordRule {
    /// Whether this rule fires for the given constraint string.
    pub fn fires(&self, constraint: &str) -> bool {
        constraint.to_lowercase().contains(self.keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_rule_threshold_is_strict() {
        let rule = METRIC_RULES[0];
        assert!(rule.fires(5));
        assert!(!rule.fires(6));
        assert!(!rule.fires(10));
        assert!(rule.fires(0));
    }

    #[test]
    fn test_metric_rules_cover_every_metric_once() {
        for (i, kind) in MetricKind::ALL.iter().enumerate() {
            assert_eq!(METRIC_RULES[i].metric, *kind);
        }
    }

    #[test]
    fn test_keyword_rule_case_insensitive_substring() {
        let rule = KEYWORD_RULES[0]; // "deadline"
        assert!(rule.fires("Missed the DEADLINE twice last quarter"));
        assert!(rule.fires("tight deadlines"));
        assert!(!rule.fires("on time every sprint"));
    }

    #[test]
    fn test_keyword_rules_are_lowercase() {
        // Matching lowercases the constraint only, so keywords must
        // already be lowercase.
        for rule in &KEYWORD_RULES {
            assert_eq!(rule.keyword, rule.keyword.to_lowercase());
        }
    }
}
