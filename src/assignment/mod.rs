//! Task-to-employee assignment.
//!
//! A constraint-satisfaction formulation: tasks are the variables, the
//! eligible employees form each task's domain, a per-employee workload
//! cap is the hard constraint, and skill coverage plus load balancing
//! are the soft preference. The solver runs a greedy priority pass
//! followed by a bounded backtracking repair — see [`AssignmentSolver`].
//!
//! A task with an empty domain is a normal outcome, reported in
//! [`AssignmentResult::unassigned`], never an error.

mod solver;

pub use solver::AssignmentSolver;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default cap on concurrent tasks per employee.
pub const DEFAULT_MAX_TASKS_PER_EMPLOYEE: usize = 3;

/// Solver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Hard cap on tasks assigned to one employee within a solve.
    pub max_tasks_per_employee: usize,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            max_tasks_per_employee: DEFAULT_MAX_TASKS_PER_EMPLOYEE,
        }
    }
}

/// Outcome of one assignment solve.
///
/// Ordered maps keep repeated runs byte-identical when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Task ID → assigned employee ID, `None` when unassigned.
    pub assignments: BTreeMap<String, Option<String>>,
    /// Employee ID → final task count. Every employee appears, zeros included.
    pub employee_load: BTreeMap<String, usize>,
    /// IDs of unassigned tasks, ascending.
    pub unassigned: Vec<String>,
}

impl AssignmentResult {
    /// Whether every task received an employee.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Final load for one employee (0 if unknown).
    pub fn load(&self, employee_id: &str) -> usize {
        self.employee_load.get(employee_id).copied().unwrap_or(0)
    }

    /// The employee a task was assigned to, if any.
    pub fn assignee(&self, task_id: &str) -> Option<&str> {
        self.assignments
            .get(task_id)
            .and_then(|a| a.as_deref())
    }
}
