// src/entry.rs

//! Cookbook entry model
//!
//! An entry is either a standalone ingredient with a fixed cook time or a
//! recipe composed of named quantities of other entries. The `type` tag on
//! the wire ("ingredient" / "recipe") maps onto a closed sum type, so every
//! consumer matches both kinds exhaustively and neither kind's fields can be
//! read as the other's.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A (name, quantity) reference from a recipe to another entry
///
/// The referenced name is only checked against the cookbook at resolution
/// time, not at ingest time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A named cookbook entry
///
/// Cook times and quantities deserialize as signed integers so out-of-range
/// values reach `validate` and fail with a typed error instead of dying
/// inside the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient {
        name: String,
        #[serde(rename = "cookTime")]
        cook_time: i64,
    },
    Recipe {
        name: String,
        #[serde(rename = "requiredItems")]
        required_items: Vec<RequiredItem>,
    },
}

impl Entry {
    /// Build an ingredient entry
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Entry::Ingredient {
            name: name.into(),
            cook_time,
        }
    }

    /// Build a recipe entry
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Entry::Recipe {
            name: name.into(),
            required_items,
        }
    }

    /// The unique name of this entry, regardless of kind
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient { name, .. } => name,
            Entry::Recipe { name, .. } => name,
        }
    }

    /// Field-level checks that need neither the cookbook nor the item list
    /// as a whole: non-empty name, non-negative cook time, positive
    /// quantities.
    pub fn validate_fields(&self) -> Result<()> {
        if self.name().is_empty() {
            return Err(Error::InvalidField(
                "entry name must not be empty".to_string(),
            ));
        }

        match self {
            Entry::Ingredient { cook_time, .. } => {
                if *cook_time < 0 {
                    return Err(Error::InvalidField(
                        "cookTime can only be >= 0".to_string(),
                    ));
                }
            }
            Entry::Recipe { required_items, .. } => {
                for item in required_items {
                    if item.quantity < 1 {
                        return Err(Error::InvalidField(format!(
                            "quantity for '{}' must be a positive integer",
                            item.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Reject a recipe that lists the same component twice, even at
    /// different quantities. Repeats are rejected, never merged.
    pub fn validate_required_items(&self) -> Result<()> {
        if let Entry::Recipe { required_items, .. } = self {
            let mut seen = HashSet::new();
            for item in required_items {
                if !seen.insert(item.name.as_str()) {
                    return Err(Error::DuplicateRequiredItem(item.name.clone()));
                }
            }
        }

        Ok(())
    }

    /// All structural checks that do not need the cookbook, in ingest
    /// order. Uniqueness against the cookbook is the store's job and runs
    /// between the two halves.
    pub fn validate(&self) -> Result<()> {
        self.validate_fields()?;
        self.validate_required_items()
    }
}
