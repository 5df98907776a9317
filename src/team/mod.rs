//! Optimal team composition via branch-and-bound.
//!
//! Selects exactly `team_size` employees maximizing an objective built
//! from cached evaluation scores, requirement-keyword coverage, and
//! role balance, under a per-role cap. The search is a recursive
//! include/exclude walk over candidates pre-sorted by descending score,
//! with two independent prunes:
//!
//! - **infeasibility**: fewer unvisited candidates than open slots;
//! - **bound**: even the top-scoring remainder plus the full keyword
//!   bonus cannot beat the best complete team found so far.
//!
//! The sorted order and strict improvement test make the result
//! deterministic: ties keep the first complete team encountered.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Team, TeamRequest};
use crate::skills;
use crate::validation;

const EPSILON: f64 = 1e-9;

/// Shortest requirement keyword worth matching against skills.
const MIN_KEYWORD_LEN: usize = 3;

/// Objective weights for team scoring.
#[derive(Debug, Clone, Copy)]
pub struct TeamObjective {
    /// Bonus per distinct requirement keyword covered by the union of
    /// member skills.
    pub coverage_bonus: f64,
    /// Weight on the population variance of per-role member counts.
    pub imbalance_penalty: f64,
}

impl Default for TeamObjective {
    fn default() -> Self {
        Self {
            coverage_bonus: 0.5,
            imbalance_penalty: 0.25,
        }
    }
}

/// Team composition solver.
///
/// Stateless between calls; each composition works on the snapshot it
/// is given.
///
/// # Example
/// ```
/// use workforce_optim::models::{Employee, TeamRequest};
/// use workforce_optim::team::TeamComposer;
///
/// let pool = vec![
///     Employee::new("E1").with_position("Developer").with_average_score(9.0),
///     Employee::new("E2").with_position("Developer").with_average_score(8.0),
///     Employee::new("E3").with_position("Designer").with_average_score(2.0),
/// ];
/// let request = TeamRequest::new(2).with_max_per_role(2);
///
/// let team = TeamComposer::new().compose(&request, &pool).unwrap();
/// assert!(team.contains("E1") && team.contains("E2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamComposer {
    objective: TeamObjective,
}

struct SearchState<'a> {
    candidates: &'a [&'a Employee],
    /// `score_prefix[i]` = sum of candidate scores `0..i`.
    score_prefix: Vec<f64>,
    keywords: Vec<String>,
    team_size: usize,
    max_per_role: usize,
    objective: TeamObjective,
    best: Option<(f64, Vec<usize>)>,
}

impl TeamComposer {
    /// Creates a composer with the default objective weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composer with explicit objective weights.
    pub fn with_objective(objective: TeamObjective) -> Self {
        Self { objective }
    }

    /// Composes the highest-scoring team for the request.
    ///
    /// Fails with [`EngineError::Validation`] on out-of-range request
    /// fields, [`EngineError::InsufficientCandidates`] when the pool is
    /// smaller than the requested size, and
    /// [`EngineError::InfeasibleConstraints`] when no complete team
    /// respects the per-role cap.
    pub fn compose(&self, request: &TeamRequest, pool: &[Employee]) -> EngineResult<Team> {
        validation::validate_team_request(request, pool).map_err(EngineError::from_issues)?;

        if pool.len() < request.team_size {
            return Err(EngineError::InsufficientCandidates {
                needed: request.team_size,
                available: pool.len(),
            });
        }

        // Best-first candidate order makes the bound prune effective.
        let mut candidates: Vec<&Employee> = pool.iter().collect();
        candidates.sort_by(|a, b| {
            b.average_score
                .partial_cmp(&a.average_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut score_prefix = Vec::with_capacity(candidates.len() + 1);
        let mut running = 0.0;
        score_prefix.push(running);
        for candidate in &candidates {
            running += candidate.average_score;
            score_prefix.push(running);
        }

        let keywords = requirement_keywords(&request.project_requirements);
        debug!(
            "composing team of {} from {} candidates, {} requirement keywords",
            request.team_size,
            candidates.len(),
            keywords.len()
        );

        let mut state = SearchState {
            candidates: &candidates,
            score_prefix,
            keywords,
            team_size: request.team_size,
            max_per_role: request.max_per_role,
            objective: self.objective,
            best: None,
        };

        let mut chosen = Vec::with_capacity(request.team_size);
        let mut role_counts = BTreeMap::new();
        search(&mut state, 0, &mut chosen, &mut role_counts, 0.0);

        match state.best {
            Some((score, indices)) => Ok(Team {
                members: indices.iter().map(|&i| candidates[i].clone()).collect(),
                score,
            }),
            None => Err(EngineError::InfeasibleConstraints {
                team_size: request.team_size,
                max_per_role: request.max_per_role,
            }),
        }
    }
}

/// Recursive include/exclude step at `cursor` with a partial selection.
fn search(
    state: &mut SearchState<'_>,
    cursor: usize,
    chosen: &mut Vec<usize>,
    role_counts: &mut BTreeMap<String, usize>,
    score_sum: f64,
) {
    let slots_left = state.team_size - chosen.len();

    if slots_left == 0 {
        let score = complete_score(state, chosen, score_sum);
        let improved = match &state.best {
            None => true,
            Some((best_score, _)) => score > best_score + EPSILON,
        };
        if improved {
            state.best = Some((score, chosen.clone()));
        }
        return;
    }

    // Infeasibility prune: not enough candidates left to fill the team.
    if slots_left > state.candidates.len() - cursor {
        return;
    }

    // Bound prune: the top-scoring remainder plus the whole keyword
    // bonus is an upper bound on anything below this node.
    if let Some((best_score, _)) = &state.best {
        let top_remaining = state.score_prefix[cursor + slots_left] - state.score_prefix[cursor];
        let bound = score_sum
            + top_remaining
            + state.objective.coverage_bonus * state.keywords.len() as f64;
        if bound <= best_score + EPSILON {
            return;
        }
    }

    let candidate = state.candidates[cursor];
    let role_count = role_counts.get(&candidate.position).copied().unwrap_or(0);

    // Include, if the role cap allows it.
    if role_count < state.max_per_role {
        chosen.push(cursor);
        *role_counts.entry(candidate.position.clone()).or_insert(0) += 1;

        search(
            state,
            cursor + 1,
            chosen,
            role_counts,
            score_sum + candidate.average_score,
        );

        chosen.pop();
        if let Some(count) = role_counts.get_mut(&candidate.position) {
            *count -= 1;
            if *count == 0 {
                role_counts.remove(&candidate.position);
            }
        }
    }

    // Exclude.
    search(state, cursor + 1, chosen, role_counts, score_sum);
}

/// Objective value of a complete team: member scores + keyword coverage
/// bonus − role imbalance penalty.
fn complete_score(state: &SearchState<'_>, chosen: &[usize], score_sum: f64) -> f64 {
    let union: Vec<String> = chosen
        .iter()
        .flat_map(|&i| state.candidates[i].skills.iter().cloned())
        .collect();
    let covered = skills::overlap(&union, &state.keywords);
    let bonus = state.objective.coverage_bonus * covered as f64;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in chosen {
        *counts.entry(state.candidates[i].position.as_str()).or_insert(0) += 1;
    }
    let penalty = state.objective.imbalance_penalty * variance(&counts);

    score_sum + bonus - penalty
}

/// Population variance of per-role member counts.
fn variance(counts: &BTreeMap<&str, usize>) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.values().sum::<usize>() as f64 / n;
    counts
        .values()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

/// Extracts distinct canonical keywords from the requirement text:
/// alphanumeric runs, case-folded, at least [`MIN_KEYWORD_LEN`] long.
fn requirement_keywords(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    text.split(|c: char| !c.is_alphanumeric())
        .map(skills::normalize)
        .filter(|w| w.len() >= MIN_KEYWORD_LEN)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, position: &str, score: f64, skill_list: &[&str]) -> Employee {
        Employee::new(id)
            .with_position(position)
            .with_average_score(score)
            .with_skills(skill_list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_picks_two_highest_scorers() {
        let pool = vec![
            member("E1", "Developer", 9.0, &[]),
            member("E2", "Developer", 8.0, &[]),
            member("E3", "Developer", 2.0, &[]),
        ];
        let request = TeamRequest::new(2).with_max_per_role(2);

        let team = TeamComposer::new().compose(&request, &pool).unwrap();
        assert_eq!(team.size(), 2);
        assert!(team.contains("E1"));
        assert!(team.contains("E2"));
    }

    #[test]
    fn test_role_cap_forces_mixed_team() {
        // Two strong developers, but only one developer slot allowed.
        let pool = vec![
            member("E1", "Developer", 9.0, &[]),
            member("E2", "Developer", 8.0, &[]),
            member("E3", "Designer", 3.0, &[]),
        ];
        let request = TeamRequest::new(2).with_max_per_role(1);

        let team = TeamComposer::new().compose(&request, &pool).unwrap();
        assert!(team.contains("E1"));
        assert!(team.contains("E3"));
        let counts = team.role_counts();
        assert!(counts.values().all(|&c| c <= 1));
    }

    #[test]
    fn test_insufficient_candidates() {
        let pool = vec![member("E1", "Developer", 5.0, &[])];
        let request = TeamRequest::new(3);

        let err = TeamComposer::new().compose(&request, &pool).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientCandidates {
                needed: 3,
                available: 1
            }
        );
    }

    #[test]
    fn test_infeasible_role_cap() {
        // Three of the same role, cap 1, team of 3 → impossible.
        let pool = vec![
            member("E1", "Developer", 9.0, &[]),
            member("E2", "Developer", 8.0, &[]),
            member("E3", "Developer", 7.0, &[]),
        ];
        let request = TeamRequest::new(3).with_max_per_role(1);

        let err = TeamComposer::new().compose(&request, &pool).unwrap_err();
        assert_eq!(
            err,
            EngineError::InfeasibleConstraints {
                team_size: 3,
                max_per_role: 1
            }
        );
    }

    #[test]
    fn test_validation_rejects_bad_request() {
        let pool = vec![member("E1", "Developer", 5.0, &[])];
        let err = TeamComposer::new()
            .compose(&TeamRequest::new(1), &pool)
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
    }

    #[test]
    fn test_keyword_coverage_beats_raw_score() {
        // E2 scores slightly lower but covers both requirement
        // keywords; the bonus must tip the selection.
        let pool = vec![
            member("E1", "Developer", 7.0, &[]),
            member("E2", "Developer", 6.5, &["rust", "graphql"]),
            member("E3", "Designer", 7.0, &[]),
        ];
        let request = TeamRequest::new(2)
            .with_max_per_role(2)
            .with_requirements("rust service with graphql api");

        let team = TeamComposer::new().compose(&request, &pool).unwrap();
        assert!(team.contains("E2"));
    }

    #[test]
    fn test_members_ordered_by_descending_score() {
        let pool = vec![
            member("E1", "Developer", 3.0, &[]),
            member("E2", "Designer", 9.0, &[]),
            member("E3", "Tester", 6.0, &[]),
        ];
        let request = TeamRequest::new(3).with_max_per_role(1);

        let team = TeamComposer::new().compose(&request, &pool).unwrap();
        let ids: Vec<&str> = team.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["E2", "E3", "E1"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let pool = vec![
            member("E1", "Developer", 7.0, &["rust"]),
            member("E2", "Developer", 7.0, &["sql"]),
            member("E3", "Designer", 7.0, &["figma"]),
            member("E4", "Tester", 5.0, &[]),
        ];
        let request = TeamRequest::new(3)
            .with_max_per_role(2)
            .with_requirements("rust dashboard with figma design");

        let composer = TeamComposer::new();
        let first = composer.compose(&request, &pool).unwrap();
        for _ in 0..5 {
            let again = composer.compose(&request, &pool).unwrap();
            let ids: Vec<&str> = again.members.iter().map(|m| m.id.as_str()).collect();
            let first_ids: Vec<&str> = first.members.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids, first_ids);
            assert!((again.score - first.score).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pruning_matches_exhaustive_result() {
        // Small pool where the best team is easy to reason out: the
        // imbalance penalty is identical for every same-role pair, so
        // the two top scorers win.
        let pool = vec![
            member("E1", "Developer", 9.5, &[]),
            member("E2", "Developer", 9.0, &[]),
            member("E3", "Developer", 1.0, &[]),
            member("E4", "Developer", 0.5, &[]),
        ];
        let request = TeamRequest::new(2).with_max_per_role(2);

        let team = TeamComposer::new().compose(&request, &pool).unwrap();
        assert!(team.contains("E1") && team.contains("E2"));
        // Sum 18.5, single role of 2 → variance 0 → no penalty.
        assert!((team.score - 18.5).abs() < 1e-10);
    }

    #[test]
    fn test_requirement_keywords_extraction() {
        let words = requirement_keywords("Rust + SQL, rust-based ETL (v2)!");
        assert_eq!(words, vec!["rust", "sql", "based", "etl"]);
    }

    #[test]
    fn test_variance() {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        counts.insert("a", 2);
        counts.insert("b", 2);
        assert!(variance(&counts).abs() < 1e-10);

        counts.insert("c", 5);
        assert!(variance(&counts) > 0.0);
    }
}
