// crates/credo-core/src/traits.rs

use async_trait::async_trait;

use crate::error::CredoError;
use crate::proof::PublicInputs;

/// External proof-checking collaborator.
///
/// Given opaque proof bytes and the public inputs, decides whether the
/// proof satisfies the fixed circuit statement (see `proof.rs`). The
/// checker is untrusted, possibly slow, and possibly absent: callers must
/// treat `Err` and `Ok(false)` identically as a verification failure, and
/// must not hold per-user score locks across the call.
///
/// Implemented by real proving backends; `credo-verify` ships a mock for
/// tests that must never be a production default.
#[async_trait]
pub trait ProofChecker: Send + Sync {
    /// Check a proof against the public inputs. `Ok(true)` accepts.
    async fn check(&self, proof: &[u8], inputs: &PublicInputs) -> Result<bool, CredoError>;
}
