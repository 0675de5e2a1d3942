// crates/credo-core/src/params.rs
//
// Protocol parameters for a Credo domain.
//
// The reference values (max score 1000, bridge weight 70%) are demo
// constants with no derivation beyond the deployed contracts; both are
// configurable per domain instance rather than hard-coded.

use serde::{Deserialize, Serialize};

use crate::error::CredoError;

/// Default score ceiling. The stored score clamps here; the event log
/// keeps growing past it.
pub const DEFAULT_MAX_SCORE: u64 = 1_000;

/// Default bridge dilution weight in basis points: imported reputation
/// counts at 70% of native reputation.
pub const DEFAULT_BRIDGE_WEIGHT_BPS: u32 = 7_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Upper bound for a single action weight. Keeps any realistic running
/// point sum far below u64::MAX; scoring saturates regardless.
pub const MAX_ACTION_WEIGHT: u64 = 1_000_000;

/// Per-domain protocol parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Score ceiling for this domain.
    pub max_score: u64,
    /// Dilution applied to imported score contributions, in basis points.
    pub bridge_weight_bps: u32,
}

impl ProtocolParams {
    /// Create parameters, rejecting values outside protocol bounds.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` if `bridge_weight_bps` exceeds
    /// `BPS_DENOMINATOR` (imports must never amplify) or `max_score` is 0.
    pub fn new(max_score: u64, bridge_weight_bps: u32) -> Result<Self, CredoError> {
        if max_score == 0 {
            return Err(CredoError::Validation(
                "max_score must be positive".to_string(),
            ));
        }
        if bridge_weight_bps > BPS_DENOMINATOR {
            return Err(CredoError::Validation(format!(
                "bridge_weight_bps {} exceeds the {} denominator",
                bridge_weight_bps, BPS_DENOMINATOR
            )));
        }
        Ok(Self {
            max_score,
            bridge_weight_bps,
        })
    }

    /// Diluted points for an imported threshold contribution:
    /// `floor(contribution * bridge_weight_bps / 10_000)`.
    pub fn diluted_points(&self, contribution: u64) -> u64 {
        (contribution as u128 * self.bridge_weight_bps as u128 / BPS_DENOMINATOR as u128) as u64
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            bridge_weight_bps: DEFAULT_BRIDGE_WEIGHT_BPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let params = ProtocolParams::default();
        assert_eq!(params.max_score, 1_000);
        assert_eq!(params.bridge_weight_bps, 7_000);
    }

    #[test]
    fn rejects_amplifying_bridge_weight() {
        assert!(ProtocolParams::new(1_000, 10_001).is_err());
        assert!(ProtocolParams::new(1_000, 10_000).is_ok());
    }

    #[test]
    fn rejects_zero_max_score() {
        assert!(ProtocolParams::new(0, 7_000).is_err());
    }

    #[test]
    fn dilution_floors() {
        let params = ProtocolParams::default();
        // floor(500 * 7000 / 10000) = 350
        assert_eq!(params.diluted_points(500), 350);
        // floor(1 * 7000 / 10000) = 0
        assert_eq!(params.diluted_points(1), 0);
        // floor(999 * 7000 / 10000) = floor(699.3) = 699
        assert_eq!(params.diluted_points(999), 699);
    }

    #[test]
    fn dilution_does_not_overflow_on_large_contributions() {
        let params = ProtocolParams::default();
        assert_eq!(
            params.diluted_points(u64::MAX),
            (u64::MAX as u128 * 7_000 / 10_000) as u64
        );
    }
}
