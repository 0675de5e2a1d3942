// crates/credo-bridge/src/export.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use credo_core::crypto::export_hash;
use credo_core::{DomainId, UserId};

/// A packaged score export: one attestation's proof material lifted out of
/// its source domain so a destination domain can re-verify and import it.
///
/// `proof` is the serialized `ProofBundle` (proof bytes + the public
/// inputs they were checked against) — opaque to the bridge itself.
/// `export_hash` identifies this export for the replay guard: each export
/// may be consumed at most once, ever, across all destination domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// The domain the attestation was issued in.
    pub from_domain: DomainId,
    /// The user exporting their reputation.
    pub user: UserId,
    /// The threshold the exported attestation established.
    pub score_threshold: u64,
    /// Opaque serialized proof bundle.
    pub proof: Vec<u8>,
    /// When the export was created.
    pub timestamp: DateTime<Utc>,
    /// `Sha256(from_domain ‖ user ‖ threshold ‖ unix_ts)`.
    pub export_hash: [u8; 32],
}

impl ExportRecord {
    /// Package an export, stamping it with the current time and computing
    /// its export hash.
    pub fn new(
        from_domain: DomainId,
        user: UserId,
        score_threshold: u64,
        proof: Vec<u8>,
    ) -> Self {
        let timestamp = Utc::now();
        let hash = export_hash(from_domain, &user, score_threshold, timestamp.timestamp());
        Self {
            from_domain,
            user,
            score_threshold,
            proof,
            timestamp,
            export_hash: hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_hash_matches_preimage() {
        let user = UserId([1u8; 32]);
        let record = ExportRecord::new(DomainId(1), user, 200, vec![1, 2, 3]);
        let expected = export_hash(
            DomainId(1),
            &user,
            200,
            record.timestamp.timestamp(),
        );
        assert_eq!(record.export_hash, expected);
    }

    #[test]
    fn different_thresholds_give_different_hashes() {
        let user = UserId([1u8; 32]);
        let a = ExportRecord::new(DomainId(1), user, 200, vec![]);
        let b = ExportRecord::new(DomainId(1), user, 300, vec![]);
        assert_ne!(a.export_hash, b.export_hash);
    }
}
