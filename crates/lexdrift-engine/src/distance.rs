// crates/lexdrift-engine/src/distance.rs
//
// Levenshtein edit distance and its normalized form.
//
// Lengths are counted in Unicode scalar values, not bytes.

/// Classic Levenshtein distance with unit insertion, deletion and substitution costs.
///
/// Uses the full `(len1 + 1) x (len2 + 1)` dynamic-programming table with row
/// and column 0 initialized to their index. An empty side yields the length of
/// the other side.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

/// Edit distance divided by the longer length, in `[0, 1]`.
///
/// Two empty strings are at distance 0.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    edit_distance(a, b) as f64 / max_len as f64
}

/// Case-folded normalized distance, d(Ti, T0).
pub fn text_distance(a: &str, b: &str) -> f64 {
    normalized_distance(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(edit_distance("grotesque", "grotesque"), 0);
        assert_eq!(normalized_distance("grotesque", "grotesque"), 0.0);
    }

    #[test]
    fn empty_side_is_other_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn both_empty_normalizes_to_zero() {
        assert_eq!(normalized_distance("", ""), 0.0);
    }

    #[test]
    fn one_empty_normalizes_to_one() {
        assert_eq!(normalized_distance("", "pet"), 1.0);
    }

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("ab", "ba"), 2);
    }

    #[test]
    fn normalized_uses_longer_length() {
        let d = normalized_distance("kitten", "sitting");
        assert!((d - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn text_distance_ignores_case() {
        assert_eq!(text_distance("Feminine", "fEMININE"), 0.0);
        assert!(normalized_distance("Feminine", "feminine") > 0.0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert!((normalized_distance("café", "cafe") - 0.25).abs() < 1e-12);
    }
}
