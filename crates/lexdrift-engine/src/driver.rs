// crates/lexdrift-engine/src/driver.rs
//
// Run driver: executes a fixed iteration budget and extracts checkpoints.

use std::collections::BTreeMap;

use chrono::Utc;
use lexdrift_core::{ControlParameters, DriftReport, IterationRecord, SnapshotLabel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::controller::{DriftController, DriftState, StepOutcome};

/// Iteration budget used when the caller does not supply one.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Minimum number of accepted iterations before snapshots are extracted.
pub const SNAPSHOT_MIN_ACCEPTED: usize = 4;

/// Run iterations `0..max_iterations` against `term`/`definition`.
///
/// Rejected iterations consume the budget but produce no record. The RNG is
/// supplied by the caller so runs can be reproduced.
pub fn run_drift<R: Rng + ?Sized>(
    term: &str,
    definition: &str,
    max_iterations: usize,
    params: ControlParameters,
    rng: &mut R,
) -> DriftReport {
    let run_id = Uuid::now_v7();
    let started_at = Utc::now();
    let controller = DriftController::new(term, definition);
    let mut state = DriftState::new(params);

    tracing::info!(
        %run_id,
        term,
        max_iterations,
        term_words = controller.input().term_words.len(),
        definition_words = controller.input().definition_words.len(),
        "starting drift run"
    );

    let mut iterations = Vec::new();
    let mut rejected_iterations = Vec::new();

    for i in 0..max_iterations {
        match controller.step(&mut state, i, rng) {
            StepOutcome::Accepted(record) => iterations.push(record),
            StepOutcome::Rejected { .. } => rejected_iterations.push(i),
        }
    }

    let snapshots = extract_snapshots(&iterations);

    tracing::info!(
        %run_id,
        accepted = iterations.len(),
        rejected = rejected_iterations.len(),
        snapshots = snapshots.len(),
        temperature = state.params.temperature,
        randomness = state.params.randomness,
        "drift run complete"
    );

    DriftReport {
        run_id,
        started_at,
        input: controller.input().clone(),
        iterations,
        rejected_iterations,
        snapshots,
        final_parameters: state.params,
    }
}

/// Pick the named checkpoints from the accepted records.
///
/// With at least four records: V240, V280 and V350 take positions 2, 3 and 4
/// (clamped to the last index), V420 takes the last record. Otherwise empty.
pub fn extract_snapshots(records: &[IterationRecord]) -> BTreeMap<SnapshotLabel, IterationRecord> {
    let mut snapshots = BTreeMap::new();
    if records.len() < SNAPSHOT_MIN_ACCEPTED {
        return snapshots;
    }

    let last = records.len() - 1;
    for label in SnapshotLabel::ALL {
        let position = match label {
            SnapshotLabel::V240 => last.min(2),
            SnapshotLabel::V280 => last.min(3),
            SnapshotLabel::V350 => last.min(4),
            SnapshotLabel::V420 => last,
        };
        snapshots.insert(label, records[position].clone());
    }
    snapshots
}

/// Convenience facade bundling parameters, budget and an optional seed.
#[derive(Debug, Clone)]
pub struct SemanticDrift {
    /// Starting control parameters for each run.
    pub params: ControlParameters,
    /// Iteration budget per run.
    pub max_iterations: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SemanticDrift {
    pub fn new() -> Self {
        Self {
            params: ControlParameters::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }

    pub fn with_params(mut self, params: ControlParameters) -> Self {
        self.params = params;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Execute one independent run. Each call starts from `self.params`.
    pub fn execute(&self, term: &str, definition: &str) -> DriftReport {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        run_drift(term, definition, self.max_iterations, self.params, &mut rng)
    }
}

impl Default for SemanticDrift {
    fn default() -> Self {
        Self::new()
    }
}
