//! Input validation for engine requests.
//!
//! Checks structural and range integrity of metrics, tasks, employees,
//! and team requests before any search begins. Detects:
//! - Metric values outside `[0, 10]`
//! - Task priorities outside `[1, 5]`
//! - Duplicate task or employee IDs
//! - Review periods with `start > end`
//! - Team sizes or role caps outside their bounds
//!
//! All issues are collected and reported together rather than failing
//! on the first one.

use std::collections::HashSet;

use crate::models::{Employee, Metrics, ReviewPeriod, Task, TeamRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationIssue>>;

/// Lowest legal metric value.
pub const METRIC_MIN: i32 = 0;
/// Highest legal metric value.
pub const METRIC_MAX: i32 = 10;
/// Lowest legal task priority.
pub const PRIORITY_MIN: i32 = 1;
/// Highest legal task priority.
pub const PRIORITY_MAX: i32 = 5;
/// Smallest composable team.
pub const TEAM_SIZE_MIN: usize = 2;
/// Largest composable team.
pub const TEAM_SIZE_MAX: usize = 10;
/// Lowest legal per-role cap.
pub const MAX_PER_ROLE_MIN: usize = 1;
/// Highest legal per-role cap.
pub const MAX_PER_ROLE_MAX: usize = 5;

/// A validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Issue category.
    pub kind: ValidationIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssueKind {
    /// A metric value is outside `[0, 10]`.
    MetricOutOfRange,
    /// A task priority is outside `[1, 5]`.
    PriorityOutOfRange,
    /// Two entities share the same ID.
    DuplicateId,
    /// A review period ends before it starts.
    InvalidPeriod,
    /// The requested team size is outside `[2, 10]`.
    TeamSizeOutOfRange,
    /// The per-role cap is outside `[1, 5]`.
    RoleCapOutOfRange,
}

impl ValidationIssue {
    pub(crate) fn new(kind: ValidationIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the five metric values.
pub fn validate_metrics(metrics: &Metrics) -> ValidationResult {
    let mut issues = Vec::new();

    for (kind, value) in metrics.ordered() {
        if !(METRIC_MIN..=METRIC_MAX).contains(&value) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::MetricOutOfRange,
                format!(
                    "metric '{}' is {value}, must be in [{METRIC_MIN}, {METRIC_MAX}]",
                    kind.name()
                ),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validates a review period (`start <= end`).
pub fn validate_period(period: &ReviewPeriod) -> ValidationResult {
    if period.is_valid() {
        Ok(())
    } else {
        Err(vec![ValidationIssue::new(
            ValidationIssueKind::InvalidPeriod,
            format!("period ends ({}) before it starts ({})", period.end, period.start),
        )])
    }
}

/// Validates the input data for an assignment solve.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No duplicate employee IDs
/// 3. All task priorities in `[1, 5]`
///
/// An empty employee pool is legal — every task simply ends up unassigned.
pub fn validate_assignment_input(tasks: &[Task], employees: &[Employee]) -> ValidationResult {
    let mut issues = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::DuplicateId,
                format!("duplicate task ID: {}", task.id),
            ));
        }

        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&task.priority) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::PriorityOutOfRange,
                format!(
                    "task '{}' has priority {}, must be in [{PRIORITY_MIN}, {PRIORITY_MAX}]",
                    task.id, task.priority
                ),
            ));
        }
    }

    let mut employee_ids = HashSet::new();
    for employee in employees {
        if !employee_ids.insert(employee.id.as_str()) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::DuplicateId,
                format!("duplicate employee ID: {}", employee.id),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validates a team composition request and its employee pool.
///
/// Checks the team size and role cap ranges and duplicate employee IDs.
/// Pool size versus team size is checked by the composer itself, since a
/// short pool is an `InsufficientCandidates` outcome, not a malformed
/// request.
pub fn validate_team_request(request: &TeamRequest, pool: &[Employee]) -> ValidationResult {
    let mut issues = Vec::new();

    if !(TEAM_SIZE_MIN..=TEAM_SIZE_MAX).contains(&request.team_size) {
        issues.push(ValidationIssue::new(
            ValidationIssueKind::TeamSizeOutOfRange,
            format!(
                "team size is {}, must be in [{TEAM_SIZE_MIN}, {TEAM_SIZE_MAX}]",
                request.team_size
            ),
        ));
    }

    if !(MAX_PER_ROLE_MIN..=MAX_PER_ROLE_MAX).contains(&request.max_per_role) {
        issues.push(ValidationIssue::new(
            ValidationIssueKind::RoleCapOutOfRange,
            format!(
                "max per role is {}, must be in [{MAX_PER_ROLE_MIN}, {MAX_PER_ROLE_MAX}]",
                request.max_per_role
            ),
        ));
    }

    let mut ids = HashSet::new();
    for employee in pool {
        if !ids.insert(employee.id.as_str()) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::DuplicateId,
                format!("duplicate employee ID: {}", employee.id),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
