//! Team request and result models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Employee;

/// A request to compose an optimal team. Transient and request-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRequest {
    /// Requested team size, `2..=10`.
    pub team_size: usize,
    /// Maximum members sharing one role label, `1..=5`.
    pub max_per_role: usize,
    /// Free project description; its keywords drive skill-coverage scoring.
    pub project_requirements: String,
}

impl TeamRequest {
    /// Creates a request with the given team size.
    pub fn new(team_size: usize) -> Self {
        Self {
            team_size,
            max_per_role: 1,
            project_requirements: String::new(),
        }
    }

    /// Sets the per-role cap.
    pub fn with_max_per_role(mut self, max_per_role: usize) -> Self {
        self.max_per_role = max_per_role;
        self
    }

    /// Sets the project requirement text.
    pub fn with_requirements(mut self, text: impl Into<String>) -> Self {
        self.project_requirements = text.into();
        self
    }
}

/// A composed team: exactly `team_size` distinct employees, at most
/// `max_per_role` sharing a role label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Selected members, in descending-score order.
    pub members: Vec<Employee>,
    /// Objective value of this team.
    pub score: f64,
}

impl Team {
    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether an employee is on the team.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.members.iter().any(|m| m.id == employee_id)
    }

    /// Member counts per role label.
    pub fn role_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for member in &self.members {
            *counts.entry(member.position.clone()).or_insert(0) += 1;
        }
        counts
    }
}
