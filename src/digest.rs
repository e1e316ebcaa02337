//! Content Digest

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of raw bytes.
///
/// Deterministic over content; callers compare digests to detect config
/// file changes and never interpret the value itself.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
