// crates/credo-verify/src/verifier.rs
//
// AttestationVerifier: accepts externally generated proofs plus public
// inputs, gates them against the stored commitment, and records threshold
// attestations. The proof check itself is delegated to the ProofChecker
// collaborator; the check runs without any score lock held, so the caller
// re-runs `precheck` after the await before recording (the commitment may
// have moved during verification).

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use credo_core::crypto::proof_hash;
use credo_core::error::CredoError;
use credo_core::{ProofBundle, PublicInputs, UserId};

use crate::attestation::Attestation;

/// Owns per-user attestation history and the retained proof material the
/// bridge passes through on export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttestationVerifier {
    attestations: HashMap<UserId, Vec<Attestation>>,
    /// Proof material keyed by proof hash, kept so `exportScore` can embed
    /// the attestation's original proof bytes and public inputs.
    proof_material: HashMap<[u8; 32], ProofBundle>,
}

impl AttestationVerifier {
    /// Create an empty verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural checks that run before (and again after) the external
    /// proof check:
    ///
    /// 1. The proof must be non-empty.
    /// 2. The submission's commitment must match the currently stored one
    ///    (no proving against a stale or foreign commitment).
    /// 3. The proof must not already back an attestation for this user
    ///    (each submission is single-use).
    ///
    /// # Errors
    /// `Validation` for an empty proof, `StaleReference` for a commitment
    /// mismatch or a reused proof.
    pub fn precheck(
        &self,
        user: &UserId,
        proof: &[u8],
        inputs: &PublicInputs,
        stored_commitment: Option<[u8; 32]>,
    ) -> Result<(), CredoError> {
        if proof.is_empty() {
            return Err(CredoError::Validation("Empty proof".to_string()));
        }
        match stored_commitment {
            Some(stored) if stored == inputs.commitment => {}
            Some(_) => {
                return Err(CredoError::StaleReference(format!(
                    "Commitment in public inputs does not match the stored commitment for {}",
                    user
                )))
            }
            None => {
                return Err(CredoError::StaleReference(format!(
                    "No stored commitment for {}",
                    user
                )))
            }
        }
        let hash = proof_hash(proof);
        let reused = self
            .attestations
            .get(user)
            .is_some_and(|list| list.iter().any(|a| a.proof_hash == hash));
        if reused {
            return Err(CredoError::StaleReference(format!(
                "Proof {} already used",
                hex::encode(hash)
            )));
        }
        Ok(())
    }

    /// Record an attestation after the external checker accepted the proof.
    ///
    /// Retains the proof material for later export. Callers run `precheck`
    /// immediately before this under the same lock.
    pub fn record(&mut self, user: UserId, proof: &[u8], inputs: &PublicInputs) -> Attestation {
        let hash = proof_hash(proof);
        let attestation = Attestation {
            user,
            score_threshold: inputs.score_threshold,
            timestamp: Utc::now(),
            proof_hash: hash,
            valid: true,
        };
        self.attestations
            .entry(user)
            .or_default()
            .push(attestation.clone());
        self.proof_material.insert(
            hash,
            ProofBundle {
                proof: proof.to_vec(),
                public_inputs: *inputs,
            },
        );
        attestation
    }

    /// True iff any stored attestation for `user` is valid with
    /// `score_threshold >= min_threshold`. The only third-party-facing
    /// score signal in the system.
    pub fn has_valid_attestation(&self, user: &UserId, min_threshold: u64) -> bool {
        self.attestations
            .get(user)
            .is_some_and(|list| list.iter().any(|a| a.valid && a.score_threshold >= min_threshold))
    }

    /// The most recently recorded attestation for `user`. Public:
    /// attestations are meant to be shown to counterparties.
    pub fn latest_attestation(&self, user: &UserId) -> Option<&Attestation> {
        self.attestations.get(user).and_then(|list| list.last())
    }

    /// Number of attestations recorded for `user`. Public.
    pub fn attestation_count(&self, user: &UserId) -> u64 {
        self.attestations.get(user).map_or(0, |list| list.len() as u64)
    }

    /// Retained proof material for an attestation, keyed by its proof
    /// hash. Used by the bridge's export path.
    pub fn proof_material(&self, proof_hash: &[u8; 32]) -> Option<&ProofBundle> {
        self.proof_material.get(proof_hash)
    }
}
