// crates/credo-domain/src/domain.rs
//
// Domain: one deployed Credo instance, wiring the ledger, scoring, and
// commitment/attestation stores into the one-directional pipeline
//   append -> recompute -> refresh commitment
// as an explicit call chain (no back-references between components).
//
// Lock discipline: all mutations of a user's score state are serialized
// behind that user's mutex; cross-user operations proceed in parallel.
// The external proof check is awaited with no score lock held — it only
// reads the already-durable commitment — and the structural checks are
// re-run after the await before anything is recorded.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use credo_commit::CommitmentStore;
use credo_core::error::CredoError;
use credo_core::{
    ActionType, CreditEvent, DomainId, ProofChecker, ProtocolParams, PublicInputs, UserId,
};
use credo_ledger::{summarize, EventLedger};
use credo_verify::{Attestation, AttestationVerifier};

use crate::config::DomainConfig;

/// A running Credo domain.
///
/// Cloneable handle style: internal state sits behind `Arc<RwLock<...>>`
/// so the domain can be shared across tasks.
#[derive(Clone)]
pub struct Domain {
    domain_id: DomainId,
    admin: UserId,
    params: ProtocolParams,
    pub(crate) ledger: Arc<RwLock<EventLedger>>,
    pub(crate) commitments: Arc<RwLock<CommitmentStore>>,
    pub(crate) verifier: Arc<RwLock<AttestationVerifier>>,
    pub(crate) checker: Arc<dyn ProofChecker>,
    user_locks: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl Domain {
    /// Create a domain from explicit parts.
    pub fn new(
        domain_id: DomainId,
        admin: UserId,
        params: ProtocolParams,
        checker: Arc<dyn ProofChecker>,
    ) -> Self {
        Self {
            domain_id,
            admin,
            params,
            ledger: Arc::new(RwLock::new(EventLedger::new(domain_id, admin))),
            commitments: Arc::new(RwLock::new(CommitmentStore::new())),
            verifier: Arc::new(RwLock::new(AttestationVerifier::new())),
            checker,
            user_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a domain from a loaded configuration.
    ///
    /// Applies configured action-weight overrides through the admin path,
    /// so they are validated exactly like runtime weight changes.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` for out-of-range parameters, a bad
    /// admin address, or an invalid weight override.
    pub async fn from_config(
        config: &DomainConfig,
        checker: Arc<dyn ProofChecker>,
    ) -> Result<Self, CredoError> {
        let params = ProtocolParams::new(config.max_score, config.bridge_weight_bps)?;
        let admin = config.admin_id()?;
        let domain = Self::new(DomainId(config.domain_id), admin, params, checker);
        for (&action, &weight) in &config.action_weights {
            domain.set_action_weight(&admin, action, weight).await?;
        }
        Ok(domain)
    }

    /// This domain's identifier.
    pub fn domain_id(&self) -> DomainId {
        self.domain_id
    }

    /// This domain's protocol parameters.
    pub fn params(&self) -> ProtocolParams {
        self.params
    }

    /// The per-user mutex serializing score mutations for `user`.
    pub(crate) async fn user_lock(&self, user: UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Recompute the user's score from the event log and refresh their
    /// commitment. Called with the user's lock held.
    pub(crate) async fn refresh_score(&self, user: UserId) -> [u8; 32] {
        let events = self.ledger.read().await.events_for(&user);
        let summary = summarize(&events, self.params.max_score);
        self.commitments
            .write()
            .await
            .refresh(user, summary.total_score, summary.event_count)
    }

    /// Append a scoring event for the caller and run the recompute chain.
    pub async fn append(
        &self,
        caller: UserId,
        action: ActionType,
        amount: u128,
    ) -> Result<CreditEvent, CredoError> {
        let lock = self.user_lock(caller).await;
        let _guard = lock.lock().await;

        let event = self.ledger.write().await.append(caller, action, amount)?;
        self.refresh_score(caller).await;
        tracing::debug!(
            user = %caller,
            action = ?action,
            points = event.points_earned,
            "appended credit event"
        );
        Ok(event)
    }

    /// The caller's own score; 0 for anyone else's (privacy rule).
    pub async fn my_score(&self, caller: &UserId, subject: &UserId) -> u64 {
        self.commitments.read().await.score(caller, subject)
    }

    /// The caller's own salt; zeroed for anyone else's.
    pub async fn my_salt(&self, caller: &UserId, subject: &UserId) -> [u8; 32] {
        self.commitments.read().await.salt(caller, subject)
    }

    /// The caller's own history; empty for anyone else's.
    pub async fn history(&self, caller: &UserId, subject: &UserId) -> Vec<CreditEvent> {
        self.ledger.read().await.history(caller, subject)
    }

    /// The caller's own event count; 0 for anyone else's.
    pub async fn event_count(&self, caller: &UserId, subject: &UserId) -> u64 {
        self.ledger.read().await.event_count(caller, subject)
    }

    /// Domain-wide event count. Public.
    pub async fn total_event_count(&self) -> u64 {
        self.ledger.read().await.total_event_count()
    }

    /// The subject's latest commitment. Public.
    pub async fn commitment(&self, user: &UserId) -> Option<[u8; 32]> {
        self.commitments.read().await.commitment(user)
    }

    /// Local commitment check with caller-supplied score and salt. Public,
    /// pure, no mutation.
    pub async fn verify_commitment(
        &self,
        user: &UserId,
        claimed_score: u64,
        claimed_salt: &[u8; 32],
    ) -> bool {
        self.commitments
            .read()
            .await
            .verify_commitment(user, claimed_score, claimed_salt)
    }

    /// Change an action weight. Admin-only; future events only.
    pub async fn set_action_weight(
        &self,
        caller: &UserId,
        action: ActionType,
        weight: u64,
    ) -> Result<(), CredoError> {
        self.ledger
            .write()
            .await
            .set_action_weight(caller, action, weight)?;
        tracing::info!(action = ?action, weight, "action weight changed");
        Ok(())
    }

    /// Rotate a user's commitment salt. Admin-only; invalidates every
    /// previously issued commitment and attestation proof for the user.
    pub async fn rotate_salt(
        &self,
        caller: &UserId,
        user: &UserId,
    ) -> Result<[u8; 32], CredoError> {
        if caller != &self.admin {
            return Err(CredoError::Unauthorized(format!(
                "{} is not the ledger administrator",
                caller
            )));
        }
        let lock = self.user_lock(*user).await;
        let _guard = lock.lock().await;
        let commitment = self.commitments.write().await.rotate_salt(user)?;
        tracing::warn!(user = %user, "commitment salt rotated; prior commitments are void");
        Ok(commitment)
    }

    /// Verify an externally generated proof and record a threshold
    /// attestation for the caller.
    ///
    /// The proof checker is awaited with no score lock held; the
    /// structural checks run again afterwards so a commitment that moved
    /// during verification surfaces as `StaleReference`, never as an
    /// attestation against a dead commitment. On any rejection nothing is
    /// recorded.
    pub async fn verify_and_attest(
        &self,
        caller: UserId,
        proof: &[u8],
        inputs: &PublicInputs,
    ) -> Result<Attestation, CredoError> {
        let stored = self.commitments.read().await.commitment(&caller);
        self.verifier
            .read()
            .await
            .precheck(&caller, proof, inputs, stored)?;

        // Untrusted collaborator: Err and Ok(false) are the same outcome.
        let accepted = self
            .checker
            .check(proof, inputs)
            .await
            .unwrap_or(false);
        if !accepted {
            tracing::debug!(user = %caller, "proof rejected by checker");
            return Err(CredoError::ProofRejected(format!(
                "External checker rejected the proof for {}",
                caller
            )));
        }

        let mut verifier = self.verifier.write().await;
        let stored = self.commitments.read().await.commitment(&caller);
        verifier.precheck(&caller, proof, inputs, stored)?;
        let attestation = verifier.record(caller, proof, inputs);
        tracing::info!(
            user = %caller,
            threshold = attestation.score_threshold,
            "attestation recorded"
        );
        Ok(attestation)
    }

    /// True iff the user holds a valid attestation at or above
    /// `min_threshold`. Public — the only third-party-facing score signal.
    pub async fn has_valid_attestation(&self, user: &UserId, min_threshold: u64) -> bool {
        self.verifier
            .read()
            .await
            .has_valid_attestation(user, min_threshold)
    }

    /// The user's latest attestation. Public.
    pub async fn latest_attestation(&self, user: &UserId) -> Option<Attestation> {
        self.verifier.read().await.latest_attestation(user).cloned()
    }

    /// Number of attestations recorded for the user. Public.
    pub async fn attestation_count(&self, user: &UserId) -> u64 {
        self.verifier.read().await.attestation_count(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credo_verify::MockProofChecker;

    fn admin() -> UserId {
        UserId([0xad; 32])
    }

    fn alice() -> UserId {
        UserId([1u8; 32])
    }

    fn domain() -> Domain {
        Domain::new(
            DomainId(1),
            admin(),
            ProtocolParams::default(),
            Arc::new(MockProofChecker::accepting()),
        )
    }

    #[tokio::test]
    async fn append_refreshes_score_and_commitment() {
        let domain = domain();
        domain.append(alice(), ActionType::Swap, 100).await.unwrap();
        assert_eq!(domain.my_score(&alice(), &alice()).await, 10);
        assert!(domain.commitment(&alice()).await.is_some());
    }

    #[tokio::test]
    async fn verify_and_attest_happy_path() {
        let domain = domain();
        domain.append(alice(), ActionType::Repay, 100).await.unwrap();
        let commitment = domain.commitment(&alice()).await.unwrap();

        let inputs = PublicInputs {
            commitment,
            score_threshold: 40,
        };
        let attestation = domain
            .verify_and_attest(alice(), b"proof", &inputs)
            .await
            .unwrap();
        assert_eq!(attestation.score_threshold, 40);
        assert!(domain.has_valid_attestation(&alice(), 40).await);
        assert_eq!(domain.attestation_count(&alice()).await, 1);
    }

    #[tokio::test]
    async fn attest_against_stale_commitment_fails_cleanly() {
        let domain = domain();
        domain.append(alice(), ActionType::Swap, 100).await.unwrap();
        let old = domain.commitment(&alice()).await.unwrap();
        // Score moves, commitment moves with it
        domain.append(alice(), ActionType::Repay, 100).await.unwrap();

        let inputs = PublicInputs {
            commitment: old,
            score_threshold: 10,
        };
        let err = domain
            .verify_and_attest(alice(), b"proof", &inputs)
            .await
            .unwrap_err();
        assert!(matches!(err, CredoError::StaleReference(_)));
        assert_eq!(domain.attestation_count(&alice()).await, 0);
    }

    #[tokio::test]
    async fn rejected_proof_records_nothing() {
        let domain = Domain::new(
            DomainId(1),
            admin(),
            ProtocolParams::default(),
            Arc::new(MockProofChecker::rejecting()),
        );
        domain.append(alice(), ActionType::Swap, 100).await.unwrap();
        let commitment = domain.commitment(&alice()).await.unwrap();

        let inputs = PublicInputs {
            commitment,
            score_threshold: 5,
        };
        let err = domain
            .verify_and_attest(alice(), b"proof", &inputs)
            .await
            .unwrap_err();
        assert!(matches!(err, CredoError::ProofRejected(_)));
        assert_eq!(domain.attestation_count(&alice()).await, 0);
        assert!(!domain.has_valid_attestation(&alice(), 0).await);
    }

    #[tokio::test]
    async fn rotate_salt_is_admin_only() {
        let domain = domain();
        domain.append(alice(), ActionType::Swap, 100).await.unwrap();

        let err = domain.rotate_salt(&alice(), &alice()).await.unwrap_err();
        assert!(matches!(err, CredoError::Unauthorized(_)));

        let salt_before = domain.my_salt(&alice(), &alice()).await;
        domain.rotate_salt(&admin(), &alice()).await.unwrap();
        assert_ne!(domain.my_salt(&alice(), &alice()).await, salt_before);
    }

    #[tokio::test]
    async fn from_config_applies_weight_overrides() {
        let mut config = DomainConfig::default();
        config.admin = format!("0x{}", hex::encode([0xad; 32]));
        config.action_weights.insert(ActionType::Swap, 15);
        let domain = Domain::from_config(&config, Arc::new(MockProofChecker::accepting()))
            .await
            .unwrap();

        domain.append(alice(), ActionType::Swap, 1).await.unwrap();
        assert_eq!(domain.my_score(&alice(), &alice()).await, 15);
    }

    #[tokio::test]
    async fn concurrent_appends_for_one_user_stay_consistent() {
        let domain = domain();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let d = domain.clone();
            handles.push(tokio::spawn(async move {
                d.append(alice(), ActionType::Transfer, 1).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        // 16 transfers at weight 5
        assert_eq!(domain.my_score(&alice(), &alice()).await, 80);
        assert_eq!(domain.event_count(&alice(), &alice()).await, 16);
    }
}
