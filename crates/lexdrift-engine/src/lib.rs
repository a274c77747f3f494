// crates/lexdrift-engine/src/lib.rs
//
// lexdrift-engine: the semantic drift engine.
//
// Given a term and its definition, the engine produces a bounded sequence of
// progressively mutated variants of both, keeping each accepted pair within a
// shrinking edit-distance tolerance of the originals. Layers, leaf first:
// tokenizer and distance metric, mutation operators, drift controller, run
// driver.

pub mod controller;
pub mod distance;
pub mod driver;
pub mod operators;
pub mod tokenizer;

pub use controller::{DriftController, DriftState, StepOutcome};
pub use distance::{edit_distance, normalized_distance, text_distance};
pub use driver::{extract_snapshots, run_drift, SemanticDrift, DEFAULT_MAX_ITERATIONS};
pub use operators::{morphological_variants, transform_word, Tier};
pub use tokenizer::tokenize;
