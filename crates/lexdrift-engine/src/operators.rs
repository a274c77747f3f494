// crates/lexdrift-engine/src/operators.rs
//
// Word-level mutation operators and the intensity-tier dispatch.
//
// Every operator is a pure function of (word, intensity) plus an injected RNG.
// None of them fail: words too short for an operation come back unchanged.

use lexdrift_core::ControlParameters;
use rand::seq::SliceRandom;
use rand::Rng;

/// Prefixes added to or stripped from words by the morphological operator.
pub const PREFIXES: [&str; 7] = ["re", "un", "pre", "dis", "over", "under", "mis"];

/// Suffixes added to or stripped from words by the morphological operator.
pub const SUFFIXES: [&str; 8] = ["ing", "ed", "er", "est", "ly", "ness", "tion", "able"];

/// Effective intensity above which phonetic shifts apply.
pub const PHONETIC_FLOOR: f64 = 0.4;

/// Effective intensity above which character-level edits apply.
pub const CHARACTER_FLOOR: f64 = 0.1;

/// Vowel rotation a -> e -> i -> o -> u -> a.
fn vowel_shift(c: char) -> Option<char> {
    match c {
        'a' => Some('e'),
        'e' => Some('i'),
        'i' => Some('o'),
        'o' => Some('u'),
        'u' => Some('a'),
        _ => None,
    }
}

/// Voiced/voiceless (and nasal) consonant pairs.
fn consonant_shift(c: char) -> Option<char> {
    match c {
        'b' => Some('p'),
        'p' => Some('b'),
        'd' => Some('t'),
        't' => Some('d'),
        'g' => Some('k'),
        'k' => Some('g'),
        'f' => Some('v'),
        'v' => Some('f'),
        's' => Some('z'),
        'z' => Some('s'),
        'm' => Some('n'),
        'n' => Some('m'),
        _ => None,
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.gen_range(b'a'..=b'z') as char
}

/// Which operator family handles a word at a given effective intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Word returned as-is.
    Identity,
    /// Single random insert/delete/substitute/transpose steps.
    CharacterLevel,
    /// Vowel and consonant-pair shifts.
    Phonetic,
    /// Candidate pool drawn from every other operator.
    SemanticSelector,
}

impl Tier {
    /// Pick the tier for an effective (already limited) intensity.
    pub fn classify(effective: f64, drift_threshold: f64) -> Tier {
        if effective > drift_threshold {
            Tier::SemanticSelector
        } else if effective > PHONETIC_FLOOR {
            Tier::Phonetic
        } else if effective > CHARACTER_FLOOR {
            Tier::CharacterLevel
        } else {
            Tier::Identity
        }
    }
}

/// Shift `max(1, floor(len * intensity))` randomly chosen characters.
///
/// Vowels rotate, paired consonants swap; any other character is replaced by a
/// random lowercase letter with probability 0.3. Output is lowercase. Words
/// shorter than 2 characters are returned unchanged.
pub fn phonetic_transform<R: Rng + ?Sized>(word: &str, intensity: f64, rng: &mut R) -> String {
    let word_len = word.chars().count();
    if word_len < 2 {
        return word.to_string();
    }

    let mut chars: Vec<char> = word.to_lowercase().chars().collect();
    let transform_count = ((word_len as f64 * intensity) as usize).max(1);

    for _ in 0..transform_count {
        let pos = rng.gen_range(0..chars.len());
        let c = chars[pos];
        if let Some(shifted) = vowel_shift(c) {
            chars[pos] = shifted;
        } else if let Some(shifted) = consonant_shift(c) {
            chars[pos] = shifted;
        } else if rng.gen::<f64>() < 0.3 {
            chars[pos] = random_letter(rng);
        }
    }

    chars.into_iter().collect()
}

/// Apply insertion, deletion, substitution and adjacent transposition, each at
/// most once and in that order, with probabilities 0.3, 0.2, 0.4 and 0.3 times
/// `intensity`.
///
/// Deletion and transposition only apply while the word is longer than 2
/// characters. Words shorter than 2 characters are returned unchanged.
pub fn character_level_transform<R: Rng + ?Sized>(
    word: &str,
    intensity: f64,
    rng: &mut R,
) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.to_string();
    }

    if rng.gen::<f64>() < intensity * 0.3 {
        let pos = rng.gen_range(0..=chars.len());
        let letter = random_letter(rng);
        chars.insert(pos, letter);
    }

    if chars.len() > 2 && rng.gen::<f64>() < intensity * 0.2 {
        let pos = rng.gen_range(0..chars.len());
        chars.remove(pos);
    }

    if rng.gen::<f64>() < intensity * 0.4 {
        let pos = rng.gen_range(0..chars.len());
        chars[pos] = random_letter(rng);
    }

    if chars.len() > 2 && rng.gen::<f64>() < intensity * 0.3 {
        let i = rng.gen_range(0..chars.len() - 1);
        chars.swap(i, i + 1);
    }

    chars.into_iter().collect()
}

/// Candidate affix variants of `word`. Does not mutate; may be empty.
///
/// Every prefix is prepended when the word is longer than 4 characters, every
/// suffix appended when it is longer than 3. Existing affixes are stripped when
/// more than 2 characters would remain.
pub fn morphological_variants(word: &str) -> Vec<String> {
    let len = word.chars().count();
    let mut variants = Vec::new();

    if len > 4 {
        variants.extend(PREFIXES.iter().map(|p| format!("{p}{word}")));
    }
    if len > 3 {
        variants.extend(SUFFIXES.iter().map(|s| format!("{word}{s}")));
    }

    for prefix in PREFIXES {
        if let Some(rest) = word.strip_prefix(prefix) {
            if rest.chars().count() > 2 {
                variants.push(rest.to_string());
            }
        }
    }
    for suffix in SUFFIXES {
        if let Some(rest) = word.strip_suffix(suffix) {
            if rest.chars().count() > 2 {
                variants.push(rest.to_string());
            }
        }
    }

    variants
}

/// Build a candidate pool from every operator and pick one.
///
/// Below intensity 0.3 the candidate whose length is closest to the original
/// wins (first one on ties); otherwise the pick is uniform. Above 0.6 the pool
/// also holds a second-half reversal (words longer than 5) and a full reversal.
/// Words shorter than 3 characters are returned unchanged.
pub fn semantic_similarity_transform<R: Rng + ?Sized>(
    word: &str,
    intensity: f64,
    rng: &mut R,
) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len < 3 {
        return word.to_string();
    }

    let mut candidates = vec![
        phonetic_transform(word, intensity, rng),
        character_level_transform(word, intensity, rng),
    ];

    let morphological = morphological_variants(word);
    candidates.extend(morphological.choose_multiple(rng, 3).cloned());

    candidates.extend(reversal_candidates(&chars, intensity));

    let picked = if intensity < 0.3 {
        candidates
            .iter()
            .min_by_key(|c| c.chars().count().abs_diff(len))
    } else {
        candidates.choose(rng)
    };

    picked.cloned().unwrap_or_else(|| word.to_string())
}

/// High-intensity selector candidates: the half-swap (first half plus the
/// reversed second half, words longer than five characters only) and the full
/// reversal. Empty at intensity 0.6 and below.
fn reversal_candidates(chars: &[char], intensity: f64) -> Vec<String> {
    if intensity <= 0.6 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2);
    if chars.len() > 5 {
        let mid = chars.len() / 2;
        out.push(chars[..mid].iter().chain(chars[mid..].iter().rev()).collect());
    }
    out.push(chars.iter().rev().collect());
    out
}

/// S(w, sigma): limit the intensity, classify it, and run the matching operator.
pub fn transform_word<R: Rng + ?Sized>(
    word: &str,
    intensity: f64,
    params: &ControlParameters,
    rng: &mut R,
) -> String {
    if word.is_empty() {
        return String::new();
    }

    let effective = intensity.min(params.drift_limiter);
    let tier = Tier::classify(effective, params.drift_threshold);
    let mutated = match tier {
        Tier::Identity => word.to_string(),
        Tier::CharacterLevel => character_level_transform(word, effective, rng),
        Tier::Phonetic => phonetic_transform(word, effective, rng),
        Tier::SemanticSelector => semantic_similarity_transform(word, effective, rng),
    };

    tracing::trace!(word, %mutated, effective, ?tier, "word transformed");
    mutated
}
