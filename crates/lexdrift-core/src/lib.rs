// crates/lexdrift-core/src/lib.rs
//
// lexdrift-core: Core types, errors, and seed derivation for the Lexdrift
// semantic drift engine.
//
// This is the leaf crate that the engine and the CLI depend on. It defines
// the control parameters, the per-iteration records, the snapshot labels and
// the report returned by a drift run.

pub mod error;
pub mod params;
pub mod record;
pub mod seed;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use lexdrift_core::ControlParameters;`

// Parameter types
pub use params::ControlParameters;

// Record and report types
pub use record::{DriftInput, DriftReport, IterationRecord, SnapshotLabel};

// Error type
pub use error::DriftError;
