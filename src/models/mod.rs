//! Workforce domain models.
//!
//! Core data types shared by the scorer and both solvers. The engine
//! reads these as immutable, call-scoped snapshots — storage and
//! mutation belong to the calling layer.
//!
//! | Type | Owned by | Consumed by |
//! |------|----------|-------------|
//! | `Employee` | storage collaborator | both solvers, analytics |
//! | `Evaluation` | storage collaborator | scorer, analytics |
//! | `Task` | request (transient) | assignment solver |
//! | `TeamRequest` | request (transient) | team composer |

mod employee;
mod evaluation;
mod task;
mod team;

pub use employee::Employee;
pub use evaluation::{Evaluation, Evaluator, MetricKind, Metrics, ReviewPeriod};
pub use task::Task;
pub use team::{Team, TeamRequest};
