//! Employee model.
//!
//! An employee record as the engine sees it: identity, role, department,
//! skill labels, and a cached evaluation score. The record is owned by
//! the storage collaborator; the engine only reads value snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::skills;

/// An employee snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Role label (e.g., "Developer", "Designer"). Used as the category
    /// for per-role caps in team composition.
    pub position: String,
    /// Department name.
    pub department: String,
    /// Hire date. `None` if unknown.
    pub join_date: Option<NaiveDate>,
    /// Skill labels, matched case-insensitively by the solvers.
    pub skills: Vec<String>,
    /// Cached mean of evaluation overall scores, in `[0.0, 10.0]`.
    /// 0.0 when the employee has no evaluations yet.
    pub average_score: f64,
}

impl Employee {
    /// Creates a new employee with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            position: String::new(),
            department: String::new(),
            join_date: None,
            skills: Vec::new(),
            average_score: 0.0,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role label.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the hire date.
    pub fn with_join_date(mut self, date: NaiveDate) -> Self {
        self.join_date = Some(date);
        self
    }

    /// Adds a skill label.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Replaces the skill list.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Sets the cached evaluation score.
    pub fn with_average_score(mut self, score: f64) -> Self {
        self.average_score = score;
        self
    }

    /// Whether this employee has a skill (canonical comparison).
    pub fn has_skill(&self, skill: &str) -> bool {
        let wanted = skills::normalize(skill);
        self.skills.iter().any(|s| skills::normalize(s) == wanted)
    }
}
