// crates/credo-ledger/src/ledger.rs
//
// Append-only per-user event log; the source of truth for score
// recomputation and history. A completed append that is not followed by a
// score refresh is inconsistent-but-not-corrupt: callers must recompute
// before trusting the score (credo-domain wires that chain).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use credo_core::error::CredoError;
use credo_core::{ActionType, CreditEvent, DomainId, EventKind, UserId};

use crate::weights::WeightTable;

/// Append-only store of credit events for one domain.
///
/// Self-only accessors follow the ledger's privacy contract: a caller
/// asking about someone else's data gets an empty/zero value back, never
/// an error and never the data. Domain-wide counters are public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLedger {
    domain_id: DomainId,
    admin: UserId,
    weights: WeightTable,
    events: Vec<CreditEvent>,
    by_user: HashMap<UserId, Vec<usize>>,
}

impl EventLedger {
    /// Create an empty ledger for a domain with the default weight table.
    pub fn new(domain_id: DomainId, admin: UserId) -> Self {
        Self {
            domain_id,
            admin,
            weights: WeightTable::new(),
            events: Vec::new(),
            by_user: HashMap::new(),
        }
    }

    /// The domain this ledger belongs to.
    pub fn domain_id(&self) -> DomainId {
        self.domain_id
    }

    /// Current weight for an action (public: weights are not secret).
    pub fn action_weight(&self, action: ActionType) -> u64 {
        self.weights.get(action)
    }

    /// Append a native scoring event for the caller.
    ///
    /// `points_earned` is priced from the current weight table and frozen
    /// into the event; later weight changes never touch it.
    pub fn append(
        &mut self,
        caller: UserId,
        action: ActionType,
        amount: u128,
    ) -> Result<CreditEvent, CredoError> {
        let points = self.weights.get(action);
        self.push_event(CreditEvent::new(
            caller,
            EventKind::Action(action),
            amount,
            points,
        ))
    }

    /// Append a bridged entry synthesized by a cross-domain import.
    ///
    /// Points are pre-priced by the bridge's dilution arithmetic, not the
    /// weight table. Only the bridge path calls this.
    pub fn append_bridged(
        &mut self,
        user: UserId,
        from_domain: DomainId,
        points: u64,
        amount: u128,
    ) -> Result<CreditEvent, CredoError> {
        if from_domain == self.domain_id {
            return Err(CredoError::Validation(format!(
                "Cannot import {} into itself",
                from_domain
            )));
        }
        self.push_event(CreditEvent::new(
            user,
            EventKind::BridgedScore { from_domain },
            amount,
            points,
        ))
    }

    fn push_event(&mut self, event: CreditEvent) -> Result<CreditEvent, CredoError> {
        let idx = self.events.len();
        self.by_user.entry(event.user).or_default().push(idx);
        self.events.push(event.clone());
        Ok(event)
    }

    /// The subject's events in insertion order.
    ///
    /// Returns an empty history when `caller != subject` (privacy rule:
    /// neutral value, not an error).
    pub fn history(&self, caller: &UserId, subject: &UserId) -> Vec<CreditEvent> {
        if caller != subject {
            return Vec::new();
        }
        self.events_for(subject)
    }

    /// The subject's event count; 0 when `caller != subject`.
    pub fn event_count(&self, caller: &UserId, subject: &UserId) -> u64 {
        if caller != subject {
            return 0;
        }
        self.by_user.get(subject).map_or(0, |ix| ix.len() as u64)
    }

    /// Domain-wide event count. Public.
    pub fn total_event_count(&self) -> u64 {
        self.events.len() as u64
    }

    /// Internal accessor for the recompute pipeline — not privacy-gated.
    /// Callers outside the pipeline go through `history`.
    pub fn events_for(&self, user: &UserId) -> Vec<CreditEvent> {
        self.by_user
            .get(user)
            .map(|ix| ix.iter().map(|&i| self.events[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Change an action weight. Admin-only, future events only.
    ///
    /// # Errors
    /// Returns `CredoError::Unauthorized` for non-admin callers (hard
    /// rejection — admin actions are not masked like read accessors) and
    /// `CredoError::Validation` for out-of-range weights.
    pub fn set_action_weight(
        &mut self,
        caller: &UserId,
        action: ActionType,
        weight: u64,
    ) -> Result<(), CredoError> {
        if caller != &self.admin {
            return Err(CredoError::Unauthorized(format!(
                "{} is not the ledger administrator",
                caller
            )));
        }
        self.weights.set(action, weight)
    }
}
