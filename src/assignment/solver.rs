//! Greedy assignment with bounded backtracking repair.
//!
//! # Algorithm
//!
//! 1. Order tasks by priority descending, ties by ascending task ID.
//! 2. For each task, build its domain: employees under the workload cap
//!    whose skills overlap the requirement (any employee qualifies when
//!    the requirement is empty). An empty domain leaves the task
//!    unassigned and the pass continues.
//! 3. Among the domain, pick the employee maximizing
//!    `(coverage_ratio, -current_load)` lexicographically, ties by
//!    ascending employee ID.
//! 4. Repair pass: for each still-unassigned task, in the same order,
//!    at most one eviction — if every skill-capable employee sits at the
//!    cap, undo that employee's strictly-lower-priority assignment and
//!    re-run the selection. The one-undo-per-task bound keeps the repair
//!    linear and terminating regardless of input.
//!
//! Identical input always yields identical output.

use log::{debug, trace};

use super::{AssignmentConfig, AssignmentResult};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Task};
use crate::skills;
use crate::validation;

const EPSILON: f64 = 1e-9;

/// Task-to-employee assignment solver.
///
/// Stateless between calls; each solve works on the snapshot it is given.
///
/// # Example
/// ```
/// use workforce_optim::assignment::AssignmentSolver;
/// use workforce_optim::models::{Employee, Task};
///
/// let tasks = vec![Task::new("T1").with_priority(4).with_required_skill("rust")];
/// let employees = vec![Employee::new("E1").with_skill("Rust")];
///
/// let result = AssignmentSolver::new().solve(&tasks, &employees).unwrap();
/// assert_eq!(result.assignee("T1"), Some("E1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolver {
    config: AssignmentConfig,
}

impl AssignmentSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Assigns tasks to employees.
    ///
    /// Fails with [`EngineError::Validation`] on malformed input
    /// (duplicate IDs, priorities outside `[1, 5]`). Unassignable tasks
    /// are a normal outcome reported in the result.
    pub fn solve(&self, tasks: &[Task], employees: &[Employee]) -> EngineResult<AssignmentResult> {
        validation::validate_assignment_input(tasks, employees)
            .map_err(EngineError::from_issues)?;

        let cap = self.config.max_tasks_per_employee;

        // Employees in ascending-ID order so selection ties are stable.
        let mut emp_order: Vec<usize> = (0..employees.len()).collect();
        emp_order.sort_by(|&a, &b| employees[a].id.cmp(&employees[b].id));
        let pool: Vec<&Employee> = emp_order.iter().map(|&i| &employees[i]).collect();

        // Tasks by priority descending, ties by ascending ID.
        let mut task_order: Vec<usize> = (0..tasks.len()).collect();
        task_order.sort_by(|&a, &b| {
            tasks[b]
                .priority
                .cmp(&tasks[a].priority)
                .then_with(|| tasks[a].id.cmp(&tasks[b].id))
        });

        let mut loads = vec![0usize; pool.len()];
        let mut assigned_to: Vec<Option<usize>> = vec![None; tasks.len()];
        // Task indices currently held by each employee, for eviction lookups.
        let mut held_by: Vec<Vec<usize>> = vec![Vec::new(); pool.len()];

        // Greedy pass.
        for &ti in &task_order {
            let task = &tasks[ti];
            match self.select_best(task, &pool, &loads, cap) {
                Some(ei) => {
                    trace!("task {} -> employee {}", task.id, pool[ei].id);
                    assigned_to[ti] = Some(ei);
                    loads[ei] += 1;
                    held_by[ei].push(ti);
                }
                None => {
                    trace!("task {} has an empty domain", task.id);
                }
            }
        }

        // Bounded repair: one eviction attempt per task left unassigned
        // by the greedy pass.
        let blocked: Vec<usize> = task_order
            .iter()
            .copied()
            .filter(|&ti| assigned_to[ti].is_none())
            .collect();

        for ti in blocked {
            let task = &tasks[ti];

            // An earlier eviction may already have freed capacity.
            if let Some(ei) = self.select_best(task, &pool, &loads, cap) {
                assigned_to[ti] = Some(ei);
                loads[ei] += 1;
                held_by[ei].push(ti);
                continue;
            }

            let Some((ei, victim)) = find_eviction(task, tasks, &pool, &loads, &held_by, cap)
            else {
                continue;
            };

            debug!(
                "evicting task {} from employee {} for higher-priority task {}",
                tasks[victim].id, pool[ei].id, task.id
            );
            assigned_to[victim] = None;
            loads[ei] -= 1;
            held_by[ei].retain(|&t| t != victim);

            if let Some(target) = self.select_best(task, &pool, &loads, cap) {
                assigned_to[ti] = Some(target);
                loads[target] += 1;
                held_by[target].push(ti);
            }
        }

        Ok(build_result(tasks, &pool, &assigned_to, &loads))
    }

    /// Picks the best employee for a task from its current domain:
    /// maximal coverage ratio, then minimal load, then lowest ID.
    fn select_best(
        &self,
        task: &Task,
        pool: &[&Employee],
        loads: &[usize],
        cap: usize,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (ei, employee) in pool.iter().enumerate() {
            if loads[ei] >= cap || !capable(task, employee) {
                continue;
            }
            let coverage = skills::coverage_ratio(&employee.skills, &task.required_skills);

            let better = match best {
                None => true,
                Some((bi, bc)) => {
                    coverage > bc + EPSILON
                        || ((coverage - bc).abs() <= EPSILON && loads[ei] < loads[bi])
                }
            };
            if better {
                best = Some((ei, coverage));
            }
        }

        best.map(|(ei, _)| ei)
    }
}

/// Skill eligibility alone, ignoring workload.
fn capable(task: &Task, employee: &Employee) -> bool {
    !task.has_skill_requirement()
        || skills::overlap(&employee.skills, &task.required_skills) > 0
}

/// Finds a priority inversion blocking `task`: a capable employee at the
/// cap holding a strictly-lower-priority assignment. Returns the
/// employee (lowest ID first) and the victim task (lowest priority,
/// ties by ascending task ID).
fn find_eviction(
    task: &Task,
    tasks: &[Task],
    pool: &[&Employee],
    loads: &[usize],
    held_by: &[Vec<usize>],
    cap: usize,
) -> Option<(usize, usize)> {
    for (ei, employee) in pool.iter().enumerate() {
        if loads[ei] < cap || !capable(task, employee) {
            continue;
        }

        let victim = held_by[ei]
            .iter()
            .copied()
            .filter(|&t| tasks[t].priority < task.priority)
            .min_by(|&a, &b| {
                tasks[a]
                    .priority
                    .cmp(&tasks[b].priority)
                    .then_with(|| tasks[a].id.cmp(&tasks[b].id))
            });

        if let Some(victim) = victim {
            return Some((ei, victim));
        }
    }
    None
}

fn build_result(
    tasks: &[Task],
    pool: &[&Employee],
    assigned_to: &[Option<usize>],
    loads: &[usize],
) -> AssignmentResult {
    let mut result = AssignmentResult::default();

    for (ti, task) in tasks.iter().enumerate() {
        let assignee = assigned_to[ti].map(|ei| pool[ei].id.clone());
        if assignee.is_none() {
            result.unassigned.push(task.id.clone());
        }
        result.assignments.insert(task.id.clone(), assignee);
    }
    result.unassigned.sort();

    for (ei, employee) in pool.iter().enumerate() {
        result.employee_load.insert(employee.id.clone(), loads[ei]);
    }

    result
}
