//! Small utility functions used across the crate
//!
//! Keep this light — if it grows, split further.

use blake3::Hasher;

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(data);
    finalize_hex(&hasher)
}

/// Lowercase hex digest of an incremental hasher
pub fn finalize_hex(hasher: &Hasher) -> String {
    hasher.finalize().to_hex().to_string()
}
