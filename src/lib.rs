//! Decision engine for workforce management.
//!
//! Provides the optimization core of an employee-performance system:
//! rule-based evaluation scoring, constraint-based task assignment, and
//! branch-and-bound team composition over a shared employee/skill model.
//! Storage, transport, and presentation are external collaborators —
//! the engine consumes immutable snapshots and returns plain values.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Evaluation`, `Metrics`,
//!   `Task`, `TeamRequest`, `Team`
//! - **`skills`**: Skill normalization and coverage matching
//! - **`scoring`**: Evaluation scoring and training-recommendation rules
//! - **`assignment`**: Task-to-employee assignment (greedy pass plus
//!   bounded backtracking repair)
//! - **`team`**: Optimal team composition (branch-and-bound)
//! - **`analytics`**: Aggregate performance summaries
//! - **`validation`**: Input integrity checks
//!
//! # Concurrency
//!
//! Every solver invocation is a pure, synchronous computation over the
//! snapshot it is handed; the engine keeps no state between calls and
//! performs no I/O. Concurrent solves on independent snapshots need no
//! locking. Bounded backtracking and bound pruning keep each call's
//! wall-clock behavior bounded without external timeouts.
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6 (Constraint Satisfaction Problems)
//! - Morrison et al. (2016), "Branch-and-bound algorithms: A survey"

pub mod analytics;
pub mod assignment;
pub mod error;
pub mod models;
pub mod scoring;
pub mod skills;
pub mod team;
pub mod validation;

pub use error::{EngineError, EngineResult};
