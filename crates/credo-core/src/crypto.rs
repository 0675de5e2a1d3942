// crates/credo-core/src/crypto.rs
//
// The single 256-bit hash (SHA-256) used everywhere: score commitments,
// proof hashes, and export hashes. Also salt generation.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::identity::{DomainId, UserId};

/// Compute SHA-256 of the given bytes.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Generate a fresh 32-byte salt from the OS CSPRNG.
///
/// Generated once per user on their first event and stable thereafter;
/// rotating it invalidates every previously issued commitment.
pub fn random_salt() -> [u8; 32] {
    let mut salt = [0u8; 32];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Score commitment: `Sha256(score_le ‖ user ‖ salt)`.
///
/// The commitment is the only score-derived value disclosed publicly.
pub fn commitment_hash(score: u64, user: &UserId, salt: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(score.to_le_bytes());
    hasher.update(user.as_bytes());
    hasher.update(salt);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash of opaque proof bytes, recorded on each attestation.
pub fn proof_hash(proof: &[u8]) -> [u8; 32] {
    hash_bytes(proof)
}

/// Export hash: `Sha256(from_domain_le ‖ user ‖ threshold_le ‖ unix_ts_le)`.
///
/// Identifies one export for the cross-domain replay guard.
pub fn export_hash(
    from_domain: DomainId,
    user: &UserId,
    score_threshold: u64,
    unix_ts: i64,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(from_domain.0.to_le_bytes());
    hasher.update(user.as_bytes());
    hasher.update(score_threshold.to_le_bytes());
    hasher.update(unix_ts.to_le_bytes());
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
