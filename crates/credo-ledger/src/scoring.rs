// crates/credo-ledger/src/scoring.rs
//
// Pure scoring over an ordered event slice. Points were already priced at
// append time, so scoring is a saturating sum clamped at the domain's
// score ceiling. No event ever reduces the score, and the event log keeps
// growing after the cap — event count still signals activity level.

use credo_core::CreditEvent;

/// Derived score aggregate for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    /// `min(max_score, Σ points_earned)`.
    pub total_score: u64,
    /// Number of events, unbounded even after the score caps.
    pub event_count: u64,
}

/// Compute `min(max_score, Σ points_earned)` over the user's events.
pub fn score_events(events: &[CreditEvent], max_score: u64) -> u64 {
    let mut total: u64 = 0;
    for event in events {
        total = total.saturating_add(event.points_earned);
        if total >= max_score {
            return max_score;
        }
    }
    total
}

/// Score plus event count in one pass.
pub fn summarize(events: &[CreditEvent], max_score: u64) -> ScoreSummary {
    ScoreSummary {
        total_score: score_events(events, max_score),
        event_count: events.len() as u64,
    }
}
