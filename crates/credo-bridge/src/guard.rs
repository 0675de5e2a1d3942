// crates/credo-bridge/src/guard.rs
//
// Bridge-side bookkeeping: per-user export history and the global
// consumed-export set. The set spans all destination domains — importing
// the same export into two different domains is the same replay as
// importing it twice into one.
//
// Callers serialize the check-then-mark sequence externally (the domain
// layer holds one lock across `check_unconsumed` + the proof re-check +
// `mark_consumed`); this type only enforces the state invariants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use credo_core::error::CredoError;
use credo_core::UserId;

use crate::export::ExportRecord;

/// Export history plus the replay guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeLedger {
    exports: Vec<ExportRecord>,
    consumed: HashSet<[u8; 32]>,
}

impl BridgeLedger {
    /// Create an empty bridge ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an export to its creator's history.
    pub fn record_export(&mut self, record: ExportRecord) {
        self.exports.push(record);
    }

    /// All exports created by `user`, in creation order.
    pub fn exports_for(&self, user: &UserId) -> Vec<&ExportRecord> {
        self.exports.iter().filter(|e| &e.user == user).collect()
    }

    /// Authorize a presented record for import.
    ///
    /// The record is caller-supplied and untrusted: it must match an
    /// export this bridge itself recorded, field for field (hash included),
    /// and that export must not have been consumed yet. Trusting the
    /// presented `export_hash` alone would let a forged hash sidestep the
    /// replay guard entirely.
    ///
    /// # Errors
    /// Returns `CredoError::Validation` for a record this bridge never
    /// issued or one that disagrees with the recorded export, and
    /// `CredoError::StaleReference` for an already-consumed export.
    pub fn authorize_import(&self, record: &ExportRecord) -> Result<(), CredoError> {
        if self.exports.iter().any(|e| e == record) {
            return self.check_unconsumed(&record.export_hash);
        }
        if self
            .exports
            .iter()
            .any(|e| e.export_hash == record.export_hash)
        {
            return Err(CredoError::Validation(format!(
                "Presented record disagrees with the recorded export {}",
                hex::encode(record.export_hash)
            )));
        }
        Err(CredoError::Validation(format!(
            "Export {} was never recorded by this bridge",
            hex::encode(record.export_hash)
        )))
    }

    /// Reject an already-consumed export hash.
    ///
    /// # Errors
    /// Returns `CredoError::StaleReference` if the hash was consumed by an
    /// earlier import (into any domain).
    pub fn check_unconsumed(&self, export_hash: &[u8; 32]) -> Result<(), CredoError> {
        if self.consumed.contains(export_hash) {
            return Err(CredoError::StaleReference(format!(
                "Export {} already consumed",
                hex::encode(export_hash)
            )));
        }
        Ok(())
    }

    /// Mark an export consumed. Called only after the import fully
    /// succeeded; rejected imports leave the guard untouched.
    pub fn mark_consumed(&mut self, export_hash: [u8; 32]) {
        self.consumed.insert(export_hash);
    }

    /// Whether an export hash has been consumed.
    pub fn is_consumed(&self, export_hash: &[u8; 32]) -> bool {
        self.consumed.contains(export_hash)
    }
}
