//! Cryptographic Utilities

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
///
/// Also used to stretch an arbitrary-length configured secret into the
/// fixed 32-byte key the session signer expects.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
