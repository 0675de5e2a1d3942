// crates/credo-commit/src/store.rs
//
// Per-user score state and the commitment scheme over it.
//
// The commitment Sha256(score ‖ user ‖ salt) is the only score-derived
// value disclosed publicly. The score and salt themselves are query-gated
// to their owner: privacy through obscurity, preserved deliberately from
// the source contracts, not cryptographic privacy. The real privacy win is
// the attestation layer, which proves score >= threshold against this same
// commitment without revealing the score.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use credo_core::crypto::{commitment_hash, random_salt};
use credo_core::error::CredoError;
use credo_core::UserId;

/// Derived score aggregate for one user.
///
/// The salt is generated once on the user's first event and is stable
/// thereafter — regenerating it silently invalidates every previously
/// issued commitment, so it only moves via the explicit `rotate_salt`
/// administrative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// `min(max_score, Σ points_earned)` as of the last refresh.
    pub total_score: u64,
    /// Event count as of the last refresh. Unbounded after the score caps.
    pub event_count: u64,
    /// Commitment salt, stable for the life of the account.
    pub salt: [u8; 32],
}

/// Owns `ScoreState` and the latest commitment per user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitmentStore {
    states: HashMap<UserId, ScoreState>,
    commitments: HashMap<UserId, [u8; 32]>,
}

impl CommitmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh a user's score state and recompute their commitment.
    ///
    /// On the first call for a user, generates their salt. On every call,
    /// overwrites the stored commitment with
    /// `Sha256(new_score ‖ user ‖ salt)` — only the latest commitment is
    /// authoritative; old ones are not retained.
    pub fn refresh(&mut self, user: UserId, new_score: u64, event_count: u64) -> [u8; 32] {
        let state = self.states.entry(user).or_insert_with(|| ScoreState {
            total_score: 0,
            event_count: 0,
            salt: random_salt(),
        });
        state.total_score = new_score;
        state.event_count = event_count;
        let commitment = commitment_hash(new_score, &user, &state.salt);
        self.commitments.insert(user, commitment);
        commitment
    }

    /// The user's latest commitment. Publicly readable — the commitment
    /// leaks nothing by design.
    pub fn commitment(&self, user: &UserId) -> Option<[u8; 32]> {
        self.commitments.get(user).copied()
    }

    /// Recompute the hash from caller-supplied `(claimed_score,
    /// claimed_salt)` and compare against the stored commitment. Pure
    /// equality check, no mutation; false when the user has no commitment.
    pub fn verify_commitment(
        &self,
        user: &UserId,
        claimed_score: u64,
        claimed_salt: &[u8; 32],
    ) -> bool {
        match self.commitments.get(user) {
            Some(stored) => commitment_hash(claimed_score, user, claimed_salt) == *stored,
            None => false,
        }
    }

    /// The subject's exact score; 0 when `caller != subject` (privacy
    /// rule: neutral value, never an error, never the real score).
    pub fn score(&self, caller: &UserId, subject: &UserId) -> u64 {
        if caller != subject {
            return 0;
        }
        self.states.get(subject).map_or(0, |s| s.total_score)
    }

    /// The subject's event count as of the last refresh; 0 when
    /// `caller != subject`.
    pub fn event_count(&self, caller: &UserId, subject: &UserId) -> u64 {
        if caller != subject {
            return 0;
        }
        self.states.get(subject).map_or(0, |s| s.event_count)
    }

    /// The subject's salt; zeroed bytes when `caller != subject`.
    pub fn salt(&self, caller: &UserId, subject: &UserId) -> [u8; 32] {
        if caller != subject {
            return [0u8; 32];
        }
        self.states.get(subject).map_or([0u8; 32], |s| s.salt)
    }

    /// Regenerate a user's salt and recompute their commitment.
    ///
    /// Administrative escape hatch only: every commitment (and every
    /// attestation proof bound to one) issued before this call becomes
    /// unverifiable. The admin check lives on the domain pipeline path.
    ///
    /// # Errors
    /// Returns `CredoError::NotFound` if the user has no score state yet.
    pub fn rotate_salt(&mut self, user: &UserId) -> Result<[u8; 32], CredoError> {
        let state = self
            .states
            .get_mut(user)
            .ok_or_else(|| CredoError::NotFound(format!("No score state for {}", user)))?;
        state.salt = random_salt();
        let commitment = commitment_hash(state.total_score, user, &state.salt);
        self.commitments.insert(*user, commitment);
        Ok(commitment)
    }
}
