// crates/credo-core/src/proof.rs
//
// Public inputs for the fixed circuit statement:
//   "there exists (score, salt) such that
//    Sha256(score ‖ user ‖ salt) == commitment AND score >= score_threshold"
//
// The proof itself is opaque bytes produced by an external proving backend;
// this crate only defines what must be provable and checkable.

use serde::{Deserialize, Serialize};

use crate::error::CredoError;

/// Public inputs accompanying a proof submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputs {
    /// The currently stored score commitment of the subject. A submission
    /// against anything else is stale or foreign and must be rejected.
    pub commitment: [u8; 32],
    /// The threshold the proof claims the hidden score meets or exceeds.
    pub score_threshold: u64,
}

/// Proof bytes bundled with the public inputs they were issued against.
///
/// This is the opaque passthrough format the bridge embeds in an
/// `ExportRecord`: the destination domain deserializes it and re-runs the
/// proof checker against the embedded inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    /// Opaque proof bytes from the external proving backend.
    pub proof: Vec<u8>,
    /// The public inputs the proof was checked against.
    pub public_inputs: PublicInputs,
}

impl ProofBundle {
    /// Serialize the bundle into the opaque byte form carried by exports.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CredoError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize a bundle from its opaque byte form.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` if the bytes are not a well-formed
    /// bundle — a malformed import is a validation failure, not a crash.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CredoError> {
        serde_json::from_slice(bytes)
            .map_err(|e| CredoError::Validation(format!("Malformed proof bundle: {}", e)))
    }
}
