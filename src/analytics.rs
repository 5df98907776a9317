//! Aggregate performance summaries.
//!
//! Read-only rollups over evaluation history: the per-employee average
//! score cached on [`Employee::average_score`], per-department metric
//! averages, and company-wide metric averages. All output is ordered
//! deterministically for stable rendering and serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Employee, Evaluation, MetricKind};

/// Mean of the overall scores in a slice of evaluations.
///
/// Returns 0.0 for an empty slice — the score an unevaluated employee
/// carries into team composition.
pub fn average_score(evaluations: &[Evaluation]) -> f64 {
    if evaluations.is_empty() {
        return 0.0;
    }
    let sum: f64 = evaluations.iter().map(|e| e.overall_score).sum();
    sum / evaluations.len() as f64
}

/// Mean of the overall scores of one employee's evaluations.
pub fn average_score_for(employee_id: &str, evaluations: &[Evaluation]) -> f64 {
    let own: Vec<&Evaluation> = evaluations
        .iter()
        .filter(|e| e.employee_id == employee_id)
        .collect();
    if own.is_empty() {
        return 0.0;
    }
    own.iter().map(|e| e.overall_score).sum::<f64>() / own.len() as f64
}

/// Mean value of each metric across a set of evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAverages {
    pub productivity: f64,
    pub quality: f64,
    pub teamwork: f64,
    pub innovation: f64,
    pub communication: f64,
}

impl MetricAverages {
    fn from_sums(sums: [i64; 5], count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let n = count as f64;
        Self {
            productivity: sums[0] as f64 / n,
            quality: sums[1] as f64 / n,
            teamwork: sums[2] as f64 / n,
            innovation: sums[3] as f64 / n,
            communication: sums[4] as f64 / n,
        }
    }
}

/// Aggregate metrics for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department: String,
    /// Evaluations contributing to this summary.
    pub evaluation_count: usize,
    pub metrics: MetricAverages,
    /// Mean overall score across the department's evaluations.
    pub average_overall: f64,
}

/// Company-wide metric averages across all evaluations.
pub fn metric_averages(evaluations: &[Evaluation]) -> MetricAverages {
    let mut sums = [0i64; 5];
    for eval in evaluations {
        for (i, (_, value)) in eval.metrics.ordered().iter().enumerate() {
            sums[i] += *value as i64;
        }
    }
    MetricAverages::from_sums(sums, evaluations.len())
}

/// Per-department metric averages, joined on `Evaluation::employee_id`.
///
/// Evaluations whose employee is not in the snapshot are skipped.
/// Results are ordered by department name.
pub fn department_breakdown(
    employees: &[Employee],
    evaluations: &[Evaluation],
) -> Vec<DepartmentSummary> {
    let department_of: BTreeMap<&str, &str> = employees
        .iter()
        .map(|e| (e.id.as_str(), e.department.as_str()))
        .collect();

    struct Acc {
        sums: [i64; 5],
        overall_sum: f64,
        count: usize,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for eval in evaluations {
        let Some(&department) = department_of.get(eval.employee_id.as_str()) else {
            continue;
        };
        let acc = groups.entry(department).or_insert(Acc {
            sums: [0; 5],
            overall_sum: 0.0,
            count: 0,
        });
        for (i, kind) in MetricKind::ALL.iter().enumerate() {
            acc.sums[i] += eval.metrics.get(*kind) as i64;
        }
        acc.overall_sum += eval.overall_score;
        acc.count += 1;
    }

    groups
        .into_iter()
        .map(|(department, acc)| DepartmentSummary {
            department: department.to_string(),
            evaluation_count: acc.count,
            metrics: MetricAverages::from_sums(acc.sums, acc.count),
            average_overall: acc.overall_sum / acc.count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metrics, ReviewPeriod};
    use chrono::NaiveDate;

    fn eval(id: &str, employee_id: &str, metrics: Metrics) -> Evaluation {
        let period = ReviewPeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
        Evaluation::scored(id, employee_id, period, metrics).unwrap()
    }

    #[test]
    fn test_average_score_empty_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_average_score() {
        let evals = vec![
            eval("V1", "E1", Metrics::new(8, 8, 8, 8, 8)), // 8.0
            eval("V2", "E1", Metrics::new(6, 6, 6, 6, 6)), // 6.0
        ];
        assert!((average_score(&evals) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_score_for_filters_by_employee() {
        let evals = vec![
            eval("V1", "E1", Metrics::new(8, 8, 8, 8, 8)),
            eval("V2", "E2", Metrics::new(2, 2, 2, 2, 2)),
        ];
        assert!((average_score_for("E1", &evals) - 8.0).abs() < 1e-10);
        assert!((average_score_for("E2", &evals) - 2.0).abs() < 1e-10);
        assert_eq!(average_score_for("E3", &evals), 0.0);
    }

    #[test]
    fn test_metric_averages() {
        let evals = vec![
            eval("V1", "E1", Metrics::new(10, 8, 6, 4, 2)),
            eval("V2", "E2", Metrics::new(0, 8, 6, 4, 2)),
        ];
        let avg = metric_averages(&evals);
        assert!((avg.productivity - 5.0).abs() < 1e-10);
        assert!((avg.quality - 8.0).abs() < 1e-10);
        assert!((avg.communication - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_department_breakdown() {
        let employees = vec![
            Employee::new("E1").with_department("Engineering"),
            Employee::new("E2").with_department("Engineering"),
            Employee::new("E3").with_department("Design"),
        ];
        let evals = vec![
            eval("V1", "E1", Metrics::new(8, 8, 8, 8, 8)),
            eval("V2", "E2", Metrics::new(6, 6, 6, 6, 6)),
            eval("V3", "E3", Metrics::new(9, 9, 9, 9, 9)),
            eval("V4", "E9", Metrics::new(1, 1, 1, 1, 1)), // unknown employee
        ];

        let summaries = department_breakdown(&employees, &evals);
        assert_eq!(summaries.len(), 2);
        // Ordered by department name.
        assert_eq!(summaries[0].department, "Design");
        assert_eq!(summaries[1].department, "Engineering");
        assert_eq!(summaries[1].evaluation_count, 2);
        assert!((summaries[1].metrics.productivity - 7.0).abs() < 1e-10);
        assert!((summaries[1].average_overall - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_department_breakdown_empty() {
        assert!(department_breakdown(&[], &[]).is_empty());
    }
}
