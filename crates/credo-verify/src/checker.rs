// crates/credo-verify/src/checker.rs
//
// MockProofChecker: implements the ProofChecker trait from credo-core.
//
// The mock does NOT verify anything cryptographic. It exists so the rest
// of the attestation and bridge pipeline can be exercised without a real
// proving backend, and it must never be wired into a production
// configuration path — production deployments supply a real backend
// implementation of ProofChecker.

use async_trait::async_trait;

use credo_core::error::CredoError;
use credo_core::{ProofChecker, PublicInputs};

/// A stand-in proof checker for tests and local development.
///
/// In accepting mode it accepts any non-empty proof; in rejecting mode it
/// rejects everything (useful for exercising the failure paths).
pub struct MockProofChecker {
    accept: bool,
}

impl MockProofChecker {
    /// A checker that accepts any non-empty proof.
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    /// A checker that rejects every proof.
    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

#[async_trait]
impl ProofChecker for MockProofChecker {
    async fn check(&self, proof: &[u8], _inputs: &PublicInputs) -> Result<bool, CredoError> {
        Ok(self.accept && !proof.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PublicInputs {
        PublicInputs {
            commitment: [1u8; 32],
            score_threshold: 100,
        }
    }

    #[tokio::test]
    async fn accepting_mode_accepts_non_empty() {
        let checker = MockProofChecker::accepting();
        assert!(checker.check(b"proof", &inputs()).await.unwrap());
    }

    #[tokio::test]
    async fn accepting_mode_rejects_empty() {
        let checker = MockProofChecker::accepting();
        assert!(!checker.check(b"", &inputs()).await.unwrap());
    }

    #[tokio::test]
    async fn rejecting_mode_rejects_everything() {
        let checker = MockProofChecker::rejecting();
        assert!(!checker.check(b"proof", &inputs()).await.unwrap());
    }
}
