// crates/credo-ledger/src/weights.rs
//
// Action weight table. Owned by a ledger instance (never process-wide),
// mutable only through the ledger's admin path, applied to future events
// only: `points_earned` is snapshotted from this table at append time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use credo_core::error::CredoError;
use credo_core::params::MAX_ACTION_WEIGHT;
use credo_core::ActionType;

/// Default weight for a Swap action.
pub const DEFAULT_SWAP_WEIGHT: u64 = 10;
/// Default weight for a Lend action.
pub const DEFAULT_LEND_WEIGHT: u64 = 25;
/// Default weight for a Repay action.
pub const DEFAULT_REPAY_WEIGHT: u64 = 50;
/// Default weight for a Stake action.
pub const DEFAULT_STAKE_WEIGHT: u64 = 20;
/// Default weight for a Transfer action.
pub const DEFAULT_TRANSFER_WEIGHT: u64 = 5;
/// Default weight for a ProvideLiquidity action.
pub const DEFAULT_PROVIDE_LIQUIDITY_WEIGHT: u64 = 30;

/// Per-action point weights for one ledger domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: HashMap<ActionType, u64>,
}

impl WeightTable {
    /// The protocol default weight for a single action.
    pub fn default_weight(action: ActionType) -> u64 {
        match action {
            ActionType::Swap => DEFAULT_SWAP_WEIGHT,
            ActionType::Lend => DEFAULT_LEND_WEIGHT,
            ActionType::Repay => DEFAULT_REPAY_WEIGHT,
            ActionType::Stake => DEFAULT_STAKE_WEIGHT,
            ActionType::Transfer => DEFAULT_TRANSFER_WEIGHT,
            ActionType::ProvideLiquidity => DEFAULT_PROVIDE_LIQUIDITY_WEIGHT,
        }
    }

    /// Create a table populated with the protocol defaults.
    pub fn new() -> Self {
        let weights = ActionType::ALL
            .iter()
            .map(|&action| (action, Self::default_weight(action)))
            .collect();
        Self { weights }
    }

    /// Current weight for an action.
    pub fn get(&self, action: ActionType) -> u64 {
        self.weights
            .get(&action)
            .copied()
            .unwrap_or_else(|| Self::default_weight(action))
    }

    /// Set the weight for an action. Future events only.
    ///
    /// Weights are `u64`, so negative weights are unrepresentable; the
    /// upper bound keeps running point sums far from overflow.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` if `weight` exceeds
    /// `MAX_ACTION_WEIGHT`.
    pub fn set(&mut self, action: ActionType, weight: u64) -> Result<(), CredoError> {
        if weight > MAX_ACTION_WEIGHT {
            return Err(CredoError::Validation(format!(
                "Weight {} for {:?} exceeds the maximum of {}",
                weight, action, MAX_ACTION_WEIGHT
            )));
        }
        self.weights.insert(action, weight);
        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_protocol_values() {
        let table = WeightTable::new();
        assert_eq!(table.get(ActionType::Swap), 10);
        assert_eq!(table.get(ActionType::Lend), 25);
        assert_eq!(table.get(ActionType::Repay), 50);
        assert_eq!(table.get(ActionType::Stake), 20);
        assert_eq!(table.get(ActionType::Transfer), 5);
        assert_eq!(table.get(ActionType::ProvideLiquidity), 30);
    }

    #[test]
    fn set_updates_weight() {
        let mut table = WeightTable::new();
        table.set(ActionType::Swap, 42).unwrap();
        assert_eq!(table.get(ActionType::Swap), 42);
        // Other actions untouched
        assert_eq!(table.get(ActionType::Repay), 50);
    }

    #[test]
    fn zero_weight_is_allowed() {
        let mut table = WeightTable::new();
        table.set(ActionType::Transfer, 0).unwrap();
        assert_eq!(table.get(ActionType::Transfer), 0);
    }

    #[test]
    fn overlarge_weight_rejected() {
        let mut table = WeightTable::new();
        let err = table.set(ActionType::Swap, MAX_ACTION_WEIGHT + 1).unwrap_err();
        assert!(matches!(err, CredoError::Validation(_)));
        // Rejected set leaves the table unchanged
        assert_eq!(table.get(ActionType::Swap), 10);
    }
}
