// crates/credo-verify/src/attestation.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use credo_core::UserId;

/// A recorded threshold attestation: "this user proved, at `timestamp`,
/// that their hidden score was at least `score_threshold`".
///
/// Attestations are append-only audit records: created by a successful
/// verification, never mutated, never deleted. One user accumulates many
/// over time; "latest" and "count" are derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// The subject who submitted the proof.
    pub user: UserId,
    /// The threshold the proof established.
    pub score_threshold: u64,
    /// When the attestation was recorded.
    pub timestamp: DateTime<Utc>,
    /// SHA-256 of the submitted proof bytes.
    pub proof_hash: [u8; 32],
    /// Always true for recorded attestations — failed attempts leave no
    /// trace. Kept explicit so future revocation has somewhere to land.
    pub valid: bool,
}
