// crates/credo-domain/src/bridge.rs
//
// ScoreBridge: exports a user's attestation from a source domain and
// imports it into a destination domain at the destination's dilution
// weight. The bridge is a client of the destination ledger's append
// interface, never a back-door into it.
//
// The replay guard's check-then-mark sequence is the one place a critical
// section is mandatory. The slow external proof check runs with no bridge
// lock held; the guard is re-run inside the lock before the mark.

use tokio::sync::Mutex;

use credo_bridge::{BridgeLedger, ExportRecord};
use credo_core::error::CredoError;
use credo_core::{ProofBundle, UserId};

use crate::domain::Domain;

/// Cross-domain score portability. One bridge instance spans every domain
/// it serves, so its consumed-export set is global across destinations.
pub struct ScoreBridge {
    state: Mutex<BridgeLedger>,
}

impl ScoreBridge {
    /// Create a bridge with an empty export history.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BridgeLedger::new()),
        }
    }

    /// Export the caller's reputation from `source`.
    ///
    /// Requires at least one valid attestation; packages the latest one's
    /// proof material into an `ExportRecord` and appends it to the
    /// caller's export history. The source domain's own ledger is not
    /// touched.
    ///
    /// # Errors
    /// `Unauthorized` if the caller holds no valid attestation in the
    /// source domain; `NotFound` if its proof material is unavailable.
    pub async fn export_score(
        &self,
        source: &Domain,
        caller: UserId,
    ) -> Result<ExportRecord, CredoError> {
        let record = {
            let verifier = source.verifier.read().await;
            let attestation = verifier
                .latest_attestation(&caller)
                .filter(|a| a.valid)
                .ok_or_else(|| {
                    CredoError::Unauthorized(format!(
                        "{} has no valid attestation in {}",
                        caller,
                        source.domain_id()
                    ))
                })?;
            let bundle = verifier.proof_material(&attestation.proof_hash).ok_or_else(|| {
                CredoError::NotFound(format!(
                    "No proof material retained for attestation {}",
                    hex::encode(attestation.proof_hash)
                ))
            })?;
            ExportRecord::new(
                source.domain_id(),
                caller,
                attestation.score_threshold,
                bundle.to_bytes()?,
            )
        };

        self.state.lock().await.record_export(record.clone());
        tracing::info!(
            user = %caller,
            from = %record.from_domain,
            threshold = record.score_threshold,
            "score exported"
        );
        Ok(record)
    }

    /// Import an export into `dest`, at the destination's dilution weight.
    ///
    /// The presented record is untrusted: it is only honored if it matches
    /// an export this bridge recorded, field for field, and that export is
    /// unconsumed. The embedded proof is then re-validated (an import is
    /// itself a verification, not a blind copy) with no bridge lock held —
    /// the checker may be slow — before the narrow check-and-mark critical
    /// section re-runs the guard, appends a bridged event worth
    /// `floor(threshold * bridge_weight_bps / 10_000)` points, and marks
    /// the export consumed. On any rejection no state changes anywhere.
    pub async fn import_score(
        &self,
        dest: &Domain,
        record: &ExportRecord,
    ) -> Result<bool, CredoError> {
        // Fail fast on forged or consumed records before the slow check.
        self.state.lock().await.authorize_import(record)?;

        let bundle = ProofBundle::from_bytes(&record.proof)?;
        if bundle.public_inputs.score_threshold != record.score_threshold {
            return Err(CredoError::Validation(format!(
                "Export threshold {} disagrees with embedded public inputs ({})",
                record.score_threshold, bundle.public_inputs.score_threshold
            )));
        }

        let accepted = dest
            .checker
            .check(&bundle.proof, &bundle.public_inputs)
            .await
            .unwrap_or(false);
        if !accepted {
            return Err(CredoError::ProofRejected(format!(
                "Embedded proof for export {} failed re-validation",
                hex::encode(record.export_hash)
            )));
        }

        // Check-and-mark critical section: re-authorize under the lock so
        // a concurrent import of the same export cannot slip between the
        // guard check and the mark.
        let mut state = self.state.lock().await;
        state.authorize_import(record)?;

        let points = dest.params().diluted_points(record.score_threshold);
        {
            let lock = dest.user_lock(record.user).await;
            let _guard = lock.lock().await;
            dest.ledger.write().await.append_bridged(
                record.user,
                record.from_domain,
                points,
                0,
            )?;
            dest.refresh_score(record.user).await;
        }
        state.mark_consumed(record.export_hash);

        tracing::info!(
            user = %record.user,
            from = %record.from_domain,
            to = %dest.domain_id(),
            points,
            "score imported"
        );
        Ok(true)
    }

    /// Exports created by `user`, in creation order.
    pub async fn exports_for(&self, user: &UserId) -> Vec<ExportRecord> {
        self.state
            .lock()
            .await
            .exports_for(user)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Default for ScoreBridge {
    fn default() -> Self {
        Self::new()
    }
}
