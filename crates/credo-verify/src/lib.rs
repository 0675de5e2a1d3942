// crates/credo-verify/src/lib.rs
//
// credo-verify: Threshold attestations and pluggable proof checking for
// the Credo protocol.
//
// A prover demonstrates "score >= threshold" against the public score
// commitment without revealing the score. This crate records the
// resulting attestations; the proof check itself lives behind the
// ProofChecker trait from credo-core.

pub mod attestation;
pub mod checker;
pub mod verifier;

pub use attestation::Attestation;
pub use checker::MockProofChecker;
pub use verifier::AttestationVerifier;
