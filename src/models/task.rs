//! Task model.
//!
//! A task is a transient, request-scoped unit of work submitted to the
//! assignment solver: created by the caller, consumed by one solve,
//! discarded.

use serde::{Deserialize, Serialize};

/// A task to be assigned to an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (within one solve).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Urgency, `1` (lowest) to `5` (highest).
    pub priority: i32,
    /// Skills an assignee must overlap with. Empty means anyone qualifies.
    pub required_skills: Vec<String>,
}

impl Task {
    /// Creates a task with default (medium) priority.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            priority: 3,
            required_skills: Vec::new(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority (1..=5).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Replaces the required-skill list.
    pub fn with_required_skills(mut self, skills: Vec<String>) -> Self {
        self.required_skills = skills;
        self
    }

    /// Whether this task requires any skills at all.
    pub fn has_skill_requirement(&self) -> bool {
        !self.required_skills.is_empty()
    }
}
