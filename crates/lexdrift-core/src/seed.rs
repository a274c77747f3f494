// crates/lexdrift-core/src/seed.rs
//
// Deterministic RNG seeds derived from run inputs.

use sha2::{Digest, Sha256};

/// Derive a reproducible 64-bit seed from a term and its definition.
///
/// Hashes `term || 0x00 || definition` with SHA-256 and interprets the first
/// 8 bytes as a little-endian u64. The separator keeps ("ab", "c") and
/// ("a", "bc") apart. Identical inputs always yield the same seed.
pub fn seed_from_text(term: &str, definition: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(term.as_bytes());
    hasher.update([0u8]);
    hasher.update(definition.as_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}
