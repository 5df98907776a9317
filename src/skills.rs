//! Skill normalization and matching.
//!
//! The leaf utility shared by both solvers. Skills are free-text labels
//! entered by users; matching canonicalizes them (trim + case-fold) so
//! "Rust ", "rust" and "RUST" compare equal. All functions are pure.

use std::collections::BTreeSet;

/// Canonicalizes a skill label: trims whitespace and case-folds.
pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Builds the canonical skill set, dropping labels that are empty after trimming.
pub fn normalized_set(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Counts canonical matches between a candidate's skills and a required set.
///
/// Duplicate labels count once; comparison is on canonical form.
pub fn overlap(candidate: &[String], required: &[String]) -> usize {
    let candidate = normalized_set(candidate);
    normalized_set(required)
        .iter()
        .filter(|r| candidate.contains(*r))
        .count()
}

/// Fraction of the required skill set the candidate covers, in `[0.0, 1.0]`.
///
/// An empty requirement is fully satisfied (ratio 1.0).
pub fn coverage_ratio(candidate: &[String], required: &[String]) -> f64 {
    let required_set = normalized_set(required);
    if required_set.is_empty() {
        return 1.0;
    }
    let candidate = normalized_set(candidate);
    let matched = required_set.iter().filter(|r| candidate.contains(*r)).count();
    matched as f64 / required_set.len().max(1) as f64
}
