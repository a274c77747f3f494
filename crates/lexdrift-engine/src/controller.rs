// crates/lexdrift-engine/src/controller.rs
//
// Per-iteration drift orchestration.
//
// Each step mutates every content word of the term and definition, rebuilds
// both texts, and tests the convergence constraint
//     d(Ti, T0) + d(Di, D0) <= 2 * yCurrent
// against the tolerance left by the previous acceptance. Accepted steps
// tighten the tolerance; rejected steps decay temperature and randomness.

use lexdrift_core::{ControlParameters, DriftInput, IterationRecord};
use rand::Rng;

use crate::distance::text_distance;
use crate::operators::transform_word;
use crate::tokenizer::{clean_token, token_punctuation, tokenize};

/// Starting tolerance (yCurrent) of every run.
pub const INITIAL_TOLERANCE: f64 = 1.0;

/// Floor below which the tolerance never drops.
pub const MIN_TOLERANCE: f64 = 0.1;

/// Share of the accepted distance subtracted from the tolerance.
pub const DISTANCE_PENALTY: f64 = 0.1;

/// Texts with at most this many whitespace tokens are rebuilt from the mutated
/// words alone.
const SHORT_TEXT_TOKENS: usize = 2;

/// Mutable state threaded through the iterations of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftState {
    /// Current control parameters; temperature and randomness only decay.
    pub params: ControlParameters,
    /// Current tolerance (yCurrent).
    pub tolerance: f64,
    /// Index of the last accepted iteration (xCurrent).
    pub last_accepted: usize,
}

impl DriftState {
    pub fn new(params: ControlParameters) -> Self {
        Self {
            params,
            tolerance: INITIAL_TOLERANCE,
            last_accepted: 0,
        }
    }
}

/// Result of a single controller step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Constraint held; the record was produced.
    Accepted(IterationRecord),
    /// Constraint violated; parameters were decayed.
    Rejected {
        /// Combined distance that failed the test.
        total_distance: f64,
        /// Tolerance it was tested against.
        tolerance: f64,
    },
}

/// sigma(w, i): per-word intensity for iteration `i`.
///
/// `0.1 * i * temperature` plus uniform noise in `[-randomness, randomness]`,
/// capped at 1.0. Negative values are kept; they fall into the identity tier.
pub fn intensity<R: Rng + ?Sized>(iteration: usize, params: &ControlParameters, rng: &mut R) -> f64 {
    let base = 0.1 * iteration as f64 * params.temperature;
    let noise = if params.randomness > 0.0 {
        rng.gen_range(-params.randomness..=params.randomness)
    } else {
        0.0
    };
    (base + noise).min(1.0)
}

/// Mutate every word of `words` for iteration `iteration` and rebuild `text`.
///
/// Short texts (two tokens or fewer) become the mutated words joined by single
/// spaces. Longer texts keep their structure: each token whose cleaned form is
/// a content word takes the next mutated word plus its own punctuation, and
/// everything else passes through verbatim.
pub fn transform_text<R: Rng + ?Sized>(
    text: &str,
    words: &[String],
    iteration: usize,
    params: &ControlParameters,
    rng: &mut R,
) -> String {
    let mutated: Vec<String> = words
        .iter()
        .map(|w| {
            let sigma = intensity(iteration, params, rng);
            transform_word(w, sigma, params, rng)
        })
        .collect();

    let original_tokens: Vec<&str> = text.split_whitespace().collect();
    if original_tokens.len() <= SHORT_TEXT_TOKENS {
        return mutated.join(" ");
    }

    let mut next = mutated.iter();
    let rebuilt: Vec<String> = original_tokens
        .iter()
        .map(|token| {
            let clean = clean_token(token);
            if words.iter().any(|w| *w == clean) {
                if let Some(replacement) = next.next() {
                    let punct = token_punctuation(token);
                    return format!("{replacement}{punct}");
                }
            }
            token.to_string()
        })
        .collect();

    rebuilt.join(" ")
}

/// Runs single drift iterations against one fixed term/definition pair.
#[derive(Debug, Clone)]
pub struct DriftController {
    input: DriftInput,
}

impl DriftController {
    /// Tokenize the originals once; the word sets are read-only afterwards.
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            input: DriftInput {
                term: term.to_string(),
                definition: definition.to_string(),
                term_words: tokenize(term),
                definition_words: tokenize(definition),
            },
        }
    }

    pub fn input(&self) -> &DriftInput {
        &self.input
    }

    /// Combined case-folded distance of a candidate pair from the originals.
    pub fn total_distance(&self, term: &str, definition: &str) -> f64 {
        text_distance(term, &self.input.term) + text_distance(definition, &self.input.definition)
    }

    /// Run iteration `iteration`, updating `state` in place.
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: &mut DriftState,
        iteration: usize,
        rng: &mut R,
    ) -> StepOutcome {
        let term = transform_text(
            &self.input.term,
            &self.input.term_words,
            iteration,
            &state.params,
            rng,
        );
        let definition = transform_text(
            &self.input.definition,
            &self.input.definition_words,
            iteration,
            &state.params,
            rng,
        );

        let total_distance = self.total_distance(&term, &definition);
        let tolerance = state.tolerance;

        if total_distance <= 2.0 * tolerance {
            state.last_accepted = iteration;
            state.tolerance = (tolerance * state.params.drift_limiter
                - total_distance * DISTANCE_PENALTY)
                .max(MIN_TOLERANCE);

            tracing::debug!(
                iteration,
                total_distance,
                tolerance = state.tolerance,
                "iteration accepted"
            );

            StepOutcome::Accepted(IterationRecord {
                index: iteration,
                term,
                definition,
                accepted_index: state.last_accepted,
                convergence_score: state.tolerance,
                temperature: state.params.temperature,
                randomness: state.params.randomness,
                total_distance,
                tolerance,
            })
        } else {
            state.params.decay();

            tracing::debug!(
                iteration,
                total_distance,
                tolerance,
                temperature = state.params.temperature,
                randomness = state.params.randomness,
                "iteration rejected, parameters decayed"
            );

            StepOutcome::Rejected {
                total_distance,
                tolerance,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn calm() -> ControlParameters {
        // Zero temperature and randomness keep every intensity at 0: identity tier.
        ControlParameters::new(0.0, 0.0, 0.8, 0.9)
    }

    #[test]
    fn intensity_without_noise_is_linear() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = ControlParameters::new(0.3, 0.0, 0.8, 0.9);
        assert_eq!(intensity(0, &params, &mut rng), 0.0);
        assert!((intensity(5, &params, &mut rng) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn intensity_never_exceeds_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = ControlParameters::new(1.0, 1.0, 0.8, 0.9);
        for i in 0..100 {
            assert!(intensity(i, &params, &mut rng) <= 1.0);
        }
    }

    #[test]
    fn intensity_noise_stays_in_band_at_iteration_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = ControlParameters::default();
        for _ in 0..100 {
            let s = intensity(0, &params, &mut rng);
            assert!((-0.4..=0.4).contains(&s));
        }
    }

    #[test]
    fn short_text_joins_mutated_words() {
        let mut rng = StdRng::seed_from_u64(4);
        let words = tokenize("The Grotesque");
        assert_eq!(transform_text("The Grotesque", &words, 0, &calm(), &mut rng), "grotesque");
    }

    #[test]
    fn long_text_keeps_structure_and_punctuation() {
        let mut rng = StdRng::seed_from_u64(5);
        let text = "Reclaiming the Monstrous, as site of power.";
        let words = tokenize(text);
        let out = transform_text(text, &words, 0, &calm(), &mut rng);
        assert_eq!(out, "reclaiming the monstrous, as site of power.");
    }

    #[test]
    fn hyphenated_token_passes_through_and_words_are_consumed_in_order() {
        // "monstrous-feminine" cleans to "monstrousfeminine", which is not a
        // content word, so "power" receives the first mutated word.
        let mut rng = StdRng::seed_from_u64(6);
        let text = "the monstrous-feminine as power";
        let words = tokenize(text);
        assert_eq!(words, vec!["monstrous", "feminine", "power"]);
        let out = transform_text(text, &words, 0, &calm(), &mut rng);
        assert_eq!(out, "the monstrous-feminine as monstrous");
    }

    #[test]
    fn decomposed_accent_matches_its_own_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = "the cafe\u{301} serves coffee";
        let words = tokenize(text);
        assert_eq!(words, vec!["cafe\u{301}", "serves", "coffee"]);
        let out = transform_text(text, &words, 9, &calm(), &mut rng);
        assert_eq!(out, text);
    }

    #[test]
    fn decomposed_accent_takes_its_own_mutation() {
        let params = ControlParameters::new(1.0, 0.0, 0.8, 0.9);
        let text = "the cafe\u{301} serves coffee";
        let words = tokenize(text);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut replay = rng.clone();
            let out = transform_text(text, &words, 9, &params, &mut rng);
            let expected: Vec<String> = words
                .iter()
                .map(|w| {
                    let sigma = intensity(9, &params, &mut replay);
                    transform_word(w, sigma, &params, &mut replay)
                })
                .collect();
            assert_eq!(out, format!("the {}", expected.join(" ")), "seed {seed}");
        }
    }

    #[test]
    fn empty_text_stays_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(transform_text("", &[], 3, &ControlParameters::default(), &mut rng), "");
    }

    #[test]
    fn identity_step_is_accepted_and_tightens_tolerance() {
        let controller = DriftController::new("cat", "a small pet");
        let mut state = DriftState::new(calm());
        let mut rng = StdRng::seed_from_u64(8);

        match controller.step(&mut state, 0, &mut rng) {
            StepOutcome::Accepted(record) => {
                assert_eq!(record.term, "cat");
                assert_eq!(record.definition, "a small pet");
                assert_eq!(record.total_distance, 0.0);
                assert_eq!(record.tolerance, 1.0);
                assert!((record.convergence_score - 0.9).abs() < 1e-12);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert!((state.tolerance - 0.9).abs() < 1e-12);
    }

    #[test]
    fn violation_decays_parameters() {
        // A negative tolerance rejects even an unchanged pair.
        let controller = DriftController::new("cat", "a small pet");
        let mut state = DriftState::new(ControlParameters::default());
        state.tolerance = -1.0;
        let mut rng = StdRng::seed_from_u64(9);

        let outcome = controller.step(&mut state, 0, &mut rng);
        assert!(matches!(outcome, StepOutcome::Rejected { .. }));
        assert!((state.params.temperature - 0.24).abs() < 1e-12);
        assert!((state.params.randomness - 0.36).abs() < 1e-12);
    }

    #[test]
    fn tolerance_never_drops_below_floor() {
        let controller = DriftController::new("cat", "a small pet");
        let mut state = DriftState::new(calm());
        let mut rng = StdRng::seed_from_u64(10);
        for i in 0..50 {
            controller.step(&mut state, i, &mut rng);
            assert!(state.tolerance >= MIN_TOLERANCE);
        }
    }
}
