// crates/lexdrift-core/src/record.rs
//
// Iteration records, snapshot labels, and the report produced by a drift run.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::params::ControlParameters;

/// One accepted iteration of a drift run.
///
/// Only iterations that satisfied the convergence constraint produce a record;
/// rejected iterations still consume the iteration budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 0-based iteration index within the run.
    pub index: usize,
    /// Mutated term (Ti).
    pub term: String,
    /// Mutated definition (Di).
    pub definition: String,
    /// Index of the last accepted iteration (xCurrent) after this acceptance.
    pub accepted_index: usize,
    /// Tolerance (yCurrent) after the post-acceptance update.
    pub convergence_score: f64,
    /// Temperature at the time of acceptance.
    pub temperature: f64,
    /// Randomness at the time of acceptance.
    pub randomness: f64,
    /// d(Ti, T0) + d(Di, D0), normalized and case-folded.
    pub total_distance: f64,
    /// Tolerance the constraint was checked against (before the update).
    pub tolerance: f64,
}

impl IterationRecord {
    /// Whether this record satisfies `total_distance <= 2 * tolerance`.
    pub fn satisfies_constraint(&self) -> bool {
        self.total_distance <= 2.0 * self.tolerance
    }
}

/// Fixed checkpoint names. These are labels, not token counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SnapshotLabel {
    V240,
    V280,
    V350,
    V420,
}

impl SnapshotLabel {
    /// All labels in checkpoint order.
    pub const ALL: [SnapshotLabel; 4] = [
        SnapshotLabel::V240,
        SnapshotLabel::V280,
        SnapshotLabel::V350,
        SnapshotLabel::V420,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotLabel::V240 => "V240",
            SnapshotLabel::V280 => "V280",
            SnapshotLabel::V350 => "V350",
            SnapshotLabel::V420 => "V420",
        }
    }
}

impl fmt::Display for SnapshotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The original inputs of a run and the word sets derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftInput {
    /// Original term (T0).
    pub term: String,
    /// Original definition (D0).
    pub definition: String,
    /// Content words of the term, W(T0).
    pub term_words: Vec<String>,
    /// Content words of the definition, W(D0).
    pub definition_words: Vec<String>,
}

/// Everything a drift run returns. Nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReport {
    /// Run identifier (UUID v7), used to correlate log lines.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Inputs and word sets.
    pub input: DriftInput,
    /// Accepted iterations, in iteration order.
    pub iterations: Vec<IterationRecord>,
    /// Indices of iterations that violated the constraint.
    pub rejected_iterations: Vec<usize>,
    /// Named checkpoints; empty when fewer than four iterations were accepted.
    pub snapshots: BTreeMap<SnapshotLabel, IterationRecord>,
    /// Control parameters at the end of the run.
    pub final_parameters: ControlParameters,
}

impl DriftReport {
    /// Total number of iterations executed (accepted + rejected).
    pub fn iterations_run(&self) -> usize {
        self.iterations.len() + self.rejected_iterations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total_distance: f64, tolerance: f64) -> IterationRecord {
        IterationRecord {
            index: 0,
            term: "cat".to_string(),
            definition: "small pet".to_string(),
            accepted_index: 0,
            convergence_score: 0.9,
            temperature: 0.3,
            randomness: 0.4,
            total_distance,
            tolerance,
        }
    }

    #[test]
    fn constraint_boundary_is_inclusive() {
        assert!(record(2.0, 1.0).satisfies_constraint());
        assert!(!record(2.0001, 1.0).satisfies_constraint());
    }

    #[test]
    fn labels_order_and_display() {
        let names: Vec<String> = SnapshotLabel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["V240", "V280", "V350", "V420"]);
        assert!(SnapshotLabel::V240 < SnapshotLabel::V420);
    }

    #[test]
    fn snapshot_map_serializes_with_label_keys() {
        let mut snapshots = BTreeMap::new();
        snapshots.insert(SnapshotLabel::V420, record(0.1, 1.0));
        let json = serde_json::to_string(&snapshots).unwrap();
        assert!(json.starts_with("{\"V420\":"));
    }
}
