//! SHA-256 digests of fetched pages, logged for post-hoc verification.

use sha2::{Digest, Sha256};

/// SHA-256 of an in-memory buffer as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
