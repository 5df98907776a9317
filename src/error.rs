//! Engine error types.
//!
//! Every engine operation terminates with either a result or one of
//! these errors. Partial task assignment is not an error — it is
//! reported through [`crate::assignment::AssignmentResult::unassigned`].

use thiserror::Error;

use crate::validation::ValidationIssue;

/// Errors returned by the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed or out-of-range input, detected before any search begins.
    #[error("invalid input: {message}")]
    Validation {
        /// All detected issues, joined into one description.
        message: String,
    },

    /// Fewer employees in the pool than the requested team size.
    #[error("insufficient candidates: requested team of {needed}, pool has {available}")]
    InsufficientCandidates { needed: usize, available: usize },

    /// No complete team satisfies the per-role cap at the requested size.
    #[error("infeasible constraints: no team of {team_size} respects at most {max_per_role} per role")]
    InfeasibleConstraints { team_size: usize, max_per_role: usize },
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Folds a non-empty list of validation issues into a single error.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let message = issues
            .iter()
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation { message }
    }
}
