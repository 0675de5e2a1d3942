// crates/credo-core/src/identity.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authenticated identity of a ledger participant.
///
/// Identity resolution (wallet signatures, session auth, `msg.sender`
/// recovery) is handled by an external collaborator; by the time a `UserId`
/// reaches this crate it is already authenticated. Every self-only accessor
/// compares the caller's `UserId` against the subject's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub [u8; 32]);

impl UserId {
    /// Build a UserId from raw address bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Identifier of a ledger domain (one deployed Credo instance).
///
/// Used by the bridge to tag exports with their origin and to keep the
/// replay guard global across destination domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainId(pub u64);

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "domain-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_is_hex() {
        let user = UserId::from_bytes([0xab; 32]);
        let s = user.to_string();
        assert!(s.starts_with("0xabab"));
        assert_eq!(s.len(), 2 + 64);
    }

    #[test]
    fn user_ids_compare_by_bytes() {
        assert_eq!(UserId([1u8; 32]), UserId([1u8; 32]));
        assert_ne!(UserId([1u8; 32]), UserId([2u8; 32]));
    }
}
