// crates/lexdrift-core/src/params.rs
//
// Control parameters for a drift run.
//
// Temperature and randomness shape the per-word mutation intensity and decay
// each time an iteration violates the convergence constraint. The drift
// threshold and limiter are fixed for the lifetime of a run.

use serde::{Deserialize, Serialize};

/// Default temperature (theta): scales how fast intensity grows per iteration.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Default randomness (rho): half-width of the uniform noise added to intensity.
pub const DEFAULT_RANDOMNESS: f64 = 0.4;

/// Default drift threshold (delta): effective intensity above which the
/// semantic selector is used.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.8;

/// Default drift limiter (lambda): caps effective intensity and damps the
/// tolerance after each accepted iteration.
pub const DEFAULT_DRIFT_LIMITER: f64 = 0.9;

/// Multiplier applied to temperature on a constraint violation.
pub const TEMPERATURE_DECAY: f64 = 0.8;

/// Multiplier applied to randomness on a constraint violation.
pub const RANDOMNESS_DECAY: f64 = 0.9;

/// The four control parameters of a drift run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlParameters {
    /// Transformation intensity growth factor (theta). Decays on violation.
    pub temperature: f64,
    /// Noise half-width for per-word intensity (rho). Decays on violation.
    pub randomness: f64,
    /// Selector threshold (delta). Immutable during a run.
    pub drift_threshold: f64,
    /// Intensity cap and tolerance damping factor (lambda). Immutable during a run.
    pub drift_limiter: f64,
}

impl ControlParameters {
    /// Build a parameter set, clamping every value into `[0, 1]`.
    ///
    /// Non-finite values fall back to the corresponding default.
    pub fn new(temperature: f64, randomness: f64, drift_threshold: f64, drift_limiter: f64) -> Self {
        Self {
            temperature: clamp_unit(temperature, DEFAULT_TEMPERATURE),
            randomness: clamp_unit(randomness, DEFAULT_RANDOMNESS),
            drift_threshold: clamp_unit(drift_threshold, DEFAULT_DRIFT_THRESHOLD),
            drift_limiter: clamp_unit(drift_limiter, DEFAULT_DRIFT_LIMITER),
        }
    }

    /// Apply one violation step: temperature *= 0.8, randomness *= 0.9.
    pub fn decay(&mut self) {
        self.temperature *= TEMPERATURE_DECAY;
        self.randomness *= RANDOMNESS_DECAY;
    }
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            randomness: DEFAULT_RANDOMNESS,
            drift_threshold: DEFAULT_DRIFT_THRESHOLD,
            drift_limiter: DEFAULT_DRIFT_LIMITER,
        }
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
