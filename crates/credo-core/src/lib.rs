// crates/credo-core/src/lib.rs
//
// credo-core: Core types, protocol parameters, and crypto primitives for
// the Credo reputation ledger.
//
// This is the leaf crate every other crate in the workspace depends on.
// It defines the canonical data structures, error type, hashing helpers,
// and the proof-checker trait boundary.

pub mod action;
pub mod crypto;
pub mod error;
pub mod event;
pub mod identity;
pub mod params;
pub mod proof;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use credo_core::CreditEvent;`

pub use action::{ActionType, EventKind};
pub use error::CredoError;
pub use event::CreditEvent;
pub use identity::{DomainId, UserId};
pub use params::{
    ProtocolParams, BPS_DENOMINATOR, DEFAULT_BRIDGE_WEIGHT_BPS, DEFAULT_MAX_SCORE,
    MAX_ACTION_WEIGHT,
};
pub use proof::{ProofBundle, PublicInputs};
pub use traits::ProofChecker;
