// crates/credo-domain/src/lib.rs
//
// credo-domain: Composition layer for the Credo protocol.
//
// Wires the library crates into a running domain: the
// append -> recompute -> refresh pipeline with per-user serialization,
// the attestation flow with its lock discipline around the external proof
// checker, and the cross-domain bridge orchestration. Transport (RPC,
// CLI, chain indexing) is deliberately absent; embedders wrap the Domain
// and ScoreBridge APIs in whatever surface a deployment chooses.

pub mod bridge;
pub mod config;
pub mod domain;

pub use bridge::ScoreBridge;
pub use config::DomainConfig;
pub use domain::Domain;
