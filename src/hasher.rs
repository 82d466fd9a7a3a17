//! Content hash of a normalized URL.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a normalized URL string.
///
/// Hashing the normalized form means URLs that differ only in query
/// parameter order share a hash.
pub fn hash_normalized(normalized: &str) -> String {
    hex::encode(Sha256::digest(normalized.as_bytes()))
}
