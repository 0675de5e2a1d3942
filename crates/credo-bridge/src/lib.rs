// crates/credo-bridge/src/lib.rs
//
// credo-bridge: Cross-domain score export records and the replay guard
// for the Credo protocol. Imported reputation is deliberately discounted
// relative to first-party activity (see ProtocolParams::bridge_weight_bps);
// the orchestration that re-verifies proofs and writes diluted events into
// a destination ledger lives in credo-domain.

pub mod export;
pub mod guard;

pub use export::ExportRecord;
pub use guard::BridgeLedger;
