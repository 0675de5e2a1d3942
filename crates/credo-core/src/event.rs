// crates/credo-core/src/event.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::EventKind;
use crate::identity::UserId;

/// A single scoring event, immutable once appended to the ledger.
///
/// `points_earned` is snapshotted from the weight table at append time, so
/// later weight changes never retroactively alter past events. For bridged
/// entries the points come from the dilution arithmetic instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditEvent {
    /// Unique event id (UUIDv7, so ids sort by creation time).
    pub id: Uuid,
    /// The user who earned the points.
    pub user: UserId,
    /// What the event was: a native action or a bridged import.
    pub kind: EventKind,
    /// Raw on-chain amount involved in the action. Classification input
    /// only — it does not feed the score.
    pub amount: u128,
    /// When the event was appended.
    pub timestamp: DateTime<Utc>,
    /// Points credited toward the user's score, fixed at append time.
    pub points_earned: u64,
}

impl CreditEvent {
    /// Construct a new event stamped with the current time.
    pub fn new(user: UserId, kind: EventKind, amount: u128, points_earned: u64) -> Self {
        Self {
            id: Uuid::now_v7(),
            user,
            kind,
            amount,
            timestamp: Utc::now(),
            points_earned,
        }
    }
}
