// crates/credo-domain/src/config.rs
//
// Runtime configuration for one Credo domain instance.
// Loaded from a TOML file or populated with the protocol defaults.

use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

use credo_core::error::CredoError;
use credo_core::{ActionType, UserId, DEFAULT_BRIDGE_WEIGHT_BPS, DEFAULT_MAX_SCORE};

/// Configuration for a domain instance.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainConfig {
    /// Numeric identifier of this domain, unique across bridged deployments.
    #[serde(default = "default_domain_id")]
    pub domain_id: u64,

    /// Hex-encoded 32-byte address of the ledger administrator
    /// (with or without a "0x" prefix).
    #[serde(default = "default_admin")]
    pub admin: String,

    /// Score ceiling for this domain.
    #[serde(default = "default_max_score")]
    pub max_score: u64,

    /// Dilution applied to imported score contributions, in basis points.
    #[serde(default = "default_bridge_weight_bps")]
    pub bridge_weight_bps: u32,

    /// Overrides for the default action weights, keyed by action name
    /// (e.g. `[action_weights] swap = 12`). Unlisted actions keep their
    /// protocol defaults.
    #[serde(default)]
    pub action_weights: HashMap<ActionType, u64>,
}

fn default_domain_id() -> u64 {
    1
}

fn default_admin() -> String {
    // The all-zero address; deployments are expected to override it.
    format!("0x{}", hex::encode([0u8; 32]))
}

fn default_max_score() -> u64 {
    DEFAULT_MAX_SCORE
}

fn default_bridge_weight_bps() -> u32 {
    DEFAULT_BRIDGE_WEIGHT_BPS
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            domain_id: default_domain_id(),
            admin: default_admin(),
            max_score: default_max_score(),
            bridge_weight_bps: default_bridge_weight_bps(),
            action_weights: HashMap::new(),
        }
    }
}

impl DomainConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, CredoError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CredoError::Validation(format!("Cannot read config {}: {}", path, e)))?;
        toml::from_str(&contents)
            .map_err(|e| CredoError::Validation(format!("Cannot parse config {}: {}", path, e)))
    }

    /// Decode the configured admin address.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` if the value is not 32 hex bytes.
    pub fn admin_id(&self) -> Result<UserId, CredoError> {
        let raw = self.admin.strip_prefix("0x").unwrap_or(&self.admin);
        let bytes = hex::decode(raw)
            .map_err(|e| CredoError::Validation(format!("Invalid admin address: {}", e)))?;
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            CredoError::Validation("Admin address must be exactly 32 bytes".to_string())
        })?;
        Ok(UserId::from_bytes(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_protocol_values() {
        let config = DomainConfig::default();
        assert_eq!(config.domain_id, 1);
        assert_eq!(config.max_score, 1_000);
        assert_eq!(config.bridge_weight_bps, 7_000);
        assert!(config.action_weights.is_empty());
        assert_eq!(config.admin_id().unwrap(), UserId([0u8; 32]));
    }

    #[test]
    fn parses_full_toml() {
        let toml = r#"
            domain_id = 42
            admin = "0x0101010101010101010101010101010101010101010101010101010101010101"
            max_score = 2000
            bridge_weight_bps = 5000

            [action_weights]
            swap = 12
            provide_liquidity = 40
        "#;
        let config: DomainConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.domain_id, 42);
        assert_eq!(config.max_score, 2_000);
        assert_eq!(config.bridge_weight_bps, 5_000);
        assert_eq!(config.action_weights[&ActionType::Swap], 12);
        assert_eq!(config.action_weights[&ActionType::ProvideLiquidity], 40);
        assert_eq!(config.admin_id().unwrap(), UserId([1u8; 32]));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DomainConfig = toml::from_str("domain_id = 7").unwrap();
        assert_eq!(config.domain_id, 7);
        assert_eq!(config.max_score, 1_000);
        assert_eq!(config.bridge_weight_bps, 7_000);
    }

    #[test]
    fn bad_admin_address_is_a_validation_error() {
        let config: DomainConfig = toml::from_str(r#"admin = "0xnothex""#).unwrap();
        assert!(matches!(
            config.admin_id(),
            Err(CredoError::Validation(_))
        ));
    }
}
