// crates/lexdrift-engine/src/tokenizer.rs
//
// Content-word extraction for terms and definitions.

use std::sync::OnceLock;

use regex::Regex;

/// Function words dropped from every word set.
pub const STOPWORDS: [&str; 14] = [
    "the", "as", "of", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with",
];

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"))
}

/// Split text into lowercase content words, in order of appearance.
///
/// Duplicates are kept: text reassembly consumes mutated words positionally.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Whether `word` (already lowercase) is in the stopword set.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Lowercased word characters of a whitespace token, as `tokenize` sees them.
///
/// Built from the same pattern as `tokenize`, so a token always cleans to the
/// word-set entry it produced (combining marks included).
pub(crate) fn clean_token(token: &str) -> String {
    word_pattern()
        .find_iter(&token.to_lowercase())
        .map(|m| m.as_str())
        .collect()
}

/// Everything in a token outside the word pattern, in order.
pub(crate) fn token_punctuation(token: &str) -> String {
    word_pattern().replace_all(token, "").into_owned()
}
