//! Item fingerprinting
//!
//! Every harvested record is keyed by a deterministic digest of its item URL.
//! The fingerprint doubles as the store's primary key and the dedup lookup
//! key, so it must be a pure function of the URL string.

use sha2::{Digest, Sha256};

/// Computes the fingerprint of an item URL
///
/// Returns the lowercase hex SHA-256 digest of the URL string. Two calls with
/// the same URL always produce the same fingerprint; distinct URLs collide
/// only with cryptographically negligible probability.
pub fn fingerprint(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
