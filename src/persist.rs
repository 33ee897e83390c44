// src/persist.rs

//! Durable cookbook storage
//!
//! The cookbook persists as a single JSON document at a configured path.
//! The store treats this as a collaborator: load once at startup, save the
//! full entry list after each successful ingest. Errors here are their own
//! type so a durable-write failure is distinguishable from a validation
//! failure.

use crate::entry::Entry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the persistence collaborator
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read cookbook file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse cookbook file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cookbook file contains an invalid entry: {0}")]
    InvalidEntry(#[from] crate::error::Error),
}

/// On-disk document shape
#[derive(Debug, Serialize, Deserialize)]
struct CookbookDocument {
    #[serde(rename = "savedAt")]
    saved_at: DateTime<Utc>,
    entries: Vec<Entry>,
}

/// Handle to the cookbook's JSON file
#[derive(Debug, Clone)]
pub struct CookbookFile {
    path: PathBuf,
}

impl CookbookFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing or empty file is an empty cookbook.
    pub fn load(&self) -> Result<Vec<Entry>, PersistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let doc: CookbookDocument = serde_json::from_str(&content)?;
        Ok(doc.entries)
    }

    /// Write the full entry list.
    ///
    /// Writes go through a temp file and rename so a crashed save never
    /// truncates the previous good document.
    pub fn save(&self, entries: &[Entry]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = CookbookDocument {
            saved_at: Utc::now(),
            entries: entries.to_vec(),
        };
        let json = serde_json::to_string_pretty(&doc)?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
