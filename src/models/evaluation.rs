//! Performance evaluation model.
//!
//! One evaluation records five metric scores for one employee over a
//! review period, plus free-text constraints and feedback. The derived
//! fields (`overall_score`, `recommended_training`) are pure functions
//! of the metrics and constraints — they are recomputed through
//! [`crate::scoring`] whenever the metrics change and never edited
//! directly. Evaluations are immutable history once scored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::scoring;

/// The five performance metrics, each an integer in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub productivity: i32,
    pub quality: i32,
    pub teamwork: i32,
    pub innovation: i32,
    pub communication: i32,
}

/// Identifies one of the five metrics.
///
/// The declaration order is the fixed evaluation order for the
/// metric-threshold training rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Productivity,
    Quality,
    Teamwork,
    Innovation,
    Communication,
}

impl MetricKind {
    /// All metrics in fixed evaluation order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Productivity,
        MetricKind::Quality,
        MetricKind::Teamwork,
        MetricKind::Innovation,
        MetricKind::Communication,
    ];

    /// Metric name as it appears in requests and messages.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Productivity => "productivity",
            MetricKind::Quality => "quality",
            MetricKind::Teamwork => "teamwork",
            MetricKind::Innovation => "innovation",
            MetricKind::Communication => "communication",
        }
    }
}

impl Metrics {
    /// Creates a metric set.
    pub fn new(productivity: i32, quality: i32, teamwork: i32, innovation: i32, communication: i32) -> Self {
        Self {
            productivity,
            quality,
            teamwork,
            innovation,
            communication,
        }
    }

    /// Returns the value of a single metric.
    pub fn get(&self, kind: MetricKind) -> i32 {
        match kind {
            MetricKind::Productivity => self.productivity,
            MetricKind::Quality => self.quality,
            MetricKind::Teamwork => self.teamwork,
            MetricKind::Innovation => self.innovation,
            MetricKind::Communication => self.communication,
        }
    }

    /// All values paired with their kind, in fixed evaluation order.
    pub fn ordered(&self) -> [(MetricKind, i32); 5] {
        MetricKind::ALL.map(|k| (k, self.get(k)))
    }
}

/// The person who performed an evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Evaluator {
    pub name: String,
    pub position: String,
}

impl Evaluator {
    /// Creates an evaluator.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

/// The period an evaluation covers. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReviewPeriod {
    /// Creates a review period.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the period is well-formed (`start <= end`).
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

/// A performance evaluation for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Unique evaluation identifier.
    pub id: String,
    /// The evaluated employee.
    pub employee_id: String,
    /// Who evaluated.
    pub evaluator: Evaluator,
    /// Covered period.
    pub period: ReviewPeriod,
    /// The five metric scores.
    pub metrics: Metrics,
    /// Free-text requirement strings (e.g., "must complete X training").
    pub constraints: Vec<String>,
    /// Free-text feedback.
    pub feedback: String,
    /// Derived: rounded mean of the metrics, in `[0.0, 10.0]`.
    pub overall_score: f64,
    /// Derived: ordered, de-duplicated training labels.
    pub recommended_training: Vec<String>,
}

impl Evaluation {
    /// Creates an unscored evaluation. Call [`Evaluation::rescore`]
    /// (or build via [`Evaluation::scored`]) before reading the
    /// derived fields.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        period: ReviewPeriod,
        metrics: Metrics,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            evaluator: Evaluator::default(),
            period,
            metrics,
            constraints: Vec::new(),
            feedback: String::new(),
            overall_score: 0.0,
            recommended_training: Vec::new(),
        }
    }

    /// Creates and immediately scores an evaluation.
    pub fn scored(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        period: ReviewPeriod,
        metrics: Metrics,
    ) -> EngineResult<Self> {
        let mut eval = Self::new(id, employee_id, period, metrics);
        eval.rescore()?;
        Ok(eval)
    }

    /// Sets the evaluator.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Adds a constraint string.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Sets the feedback text.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    /// Replaces the metrics and recomputes the derived fields.
    pub fn update_metrics(&mut self, metrics: Metrics) -> EngineResult<()> {
        self.metrics = metrics;
        self.rescore()
    }

    /// Recomputes `overall_score` and `recommended_training` from the
    /// current metrics and constraints.
    pub fn rescore(&mut self) -> EngineResult<()> {
        let report = scoring::score(&self.metrics, &self.constraints)?;
        self.overall_score = report.overall_score;
        self.recommended_training = report.recommended_training;
        Ok(())
    }
}
