// crates/credo-ledger/src/lib.rs
//
// credo-ledger: Append-only credit event ledger, per-domain weight table,
// and the pure scoring function for the Credo protocol.

pub mod ledger;
pub mod scoring;
pub mod weights;

pub use ledger::EventLedger;
pub use scoring::{score_events, summarize, ScoreSummary};
pub use weights::WeightTable;
