// crates/credo-core/src/action.rs
//
// The closed set of scoring actions and the origin tag telling native
// on-chain activity apart from bridged imports.

use serde::{Deserialize, Serialize};

use crate::identity::DomainId;

/// A classified on-chain action that earns reputation points.
///
/// The set is closed: the action classifier collaborator maps raw external
/// activity onto exactly these six variants, and the weight table matches
/// over them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Swap,
    Lend,
    Repay,
    Stake,
    Transfer,
    ProvideLiquidity,
}

impl ActionType {
    /// All action variants, in declaration order.
    pub const ALL: [ActionType; 6] = [
        ActionType::Swap,
        ActionType::Lend,
        ActionType::Repay,
        ActionType::Stake,
        ActionType::Transfer,
        ActionType::ProvideLiquidity,
    ];
}

/// Origin of a ledger entry.
///
/// First-party activity carries its `ActionType` and is priced from the
/// weight table at append time. Bridged entries are synthesized by a
/// successful cross-domain import with pre-priced (diluted) points, so all
/// they carry is the source domain for the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Native activity classified into one of the six scoring actions.
    Action(ActionType),
    /// Reputation imported from another domain via the bridge.
    BridgedScore {
        /// The domain the exported attestation originated from.
        from_domain: DomainId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(ActionType::ALL.len(), 6);
        // Exhaustive match keeps ALL honest when variants change.
        for action in ActionType::ALL {
            match action {
                ActionType::Swap
                | ActionType::Lend
                | ActionType::Repay
                | ActionType::Stake
                | ActionType::Transfer
                | ActionType::ProvideLiquidity => {}
            }
        }
    }

    #[test]
    fn event_kind_serializes_source_domain() {
        let kind = EventKind::BridgedScore {
            from_domain: DomainId(7),
        };
        let json = serde_json::to_string(&kind).unwrap();
        let back: EventKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
