// src/store.rs

//! Cookbook store
//!
//! Holds the authoritative name → entry map and enforces the write-time
//! invariants. Mutations serialize on the write lock, making the uniqueness
//! check atomic with the insert; reads hand out owned snapshots so
//! resolutions never contend with writers.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::persist::{CookbookFile, PersistError};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::error;

/// An immutable point-in-time view of the cookbook, the sole input to
/// resolution
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: BTreeMap<String, Entry>,
}

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The authoritative in-memory cookbook
///
/// Entries are only ever inserted, never updated or removed.
pub struct CookbookStore {
    entries: RwLock<BTreeMap<String, Entry>>,
    file: Option<CookbookFile>,
}

impl CookbookStore {
    /// Memory-only store, used by tests and one-shot commands
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            file: None,
        }
    }

    /// Store backed by a cookbook file; loads existing entries up front.
    ///
    /// Field validation is re-applied to loaded entries, so a corrupt
    /// document fails the load instead of poisoning later resolutions.
    pub fn with_persistence(file: CookbookFile) -> std::result::Result<Self, PersistError> {
        let mut entries = BTreeMap::new();
        for entry in file.load()? {
            entry.validate()?;
            entries.insert(entry.name().to_string(), entry);
        }

        Ok(Self {
            entries: RwLock::new(entries),
            file: Some(file),
        })
    }

    /// Validate an entry and commit it to the cookbook.
    ///
    /// Check order: field-level validation, then name uniqueness, then the
    /// duplicate-required-item check. Validate-then-commit: no partial
    /// state is left on any failure path. On success the entry list is
    /// copied out under the lock and the durable save runs after the lock
    /// drops, so save latency never blocks other callers. A failed save is
    /// logged; the in-memory commit stands.
    pub fn add_entry(&self, entry: Entry) -> Result<()> {
        entry.validate_fields()?;

        let saved = {
            let mut entries = self.entries.write();
            if entries.contains_key(entry.name()) {
                return Err(Error::DuplicateName(entry.name().to_string()));
            }
            entry.validate_required_items()?;
            entries.insert(entry.name().to_string(), entry);

            self.file
                .as_ref()
                .map(|_| entries.values().cloned().collect::<Vec<_>>())
        };

        if let (Some(file), Some(entries)) = (&self.file, saved) {
            if let Err(e) = file.save(&entries) {
                error!(
                    path = %file.path().display(),
                    "failed to save cookbook: {}", e
                );
            }
        }

        Ok(())
    }

    /// Look up a single entry by name
    pub fn get(&self, name: &str) -> Option<Entry> {
        self.entries.read().get(name).cloned()
    }

    /// Owned read-only copy of all current entries
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.read().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for CookbookStore {
    fn default() -> Self {
        Self::new()
    }
}
