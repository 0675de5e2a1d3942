use thiserror::Error;

/// Protocol-wide error types for the Credo reputation ledger.
#[derive(Debug, Error)]
pub enum CredoError {
    /// Validation error (malformed amount, unknown action, out-of-range weight).
    /// Rejected before any state change.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authorization error on a mutating path (non-admin weight change,
    /// wrong caller on an append). Self-only *read* accessors never raise
    /// this — they return a neutral value instead.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A reference to derived state is no longer current (commitment in the
    /// public inputs does not match the stored commitment, export already
    /// consumed, proof already used).
    #[error("Stale reference: {0}")]
    StaleReference(String),

    /// The external proof checker rejected the proof. No attestation is
    /// recorded; retries are the caller's responsibility with a fresh proof.
    #[error("Proof rejected: {0}")]
    ProofRejected(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for CredoError {
    fn from(e: serde_json::Error) -> Self {
        CredoError::Serialization(e.to_string())
    }
}
