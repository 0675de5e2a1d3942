// crates/credo-commit/src/lib.rs
//
// credo-commit: Score state and privacy-preserving score commitments for
// the Credo protocol.

pub mod store;

pub use store::{CommitmentStore, ScoreState};
