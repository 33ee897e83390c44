// src/error.rs

//! Central error type for cookbook operations
//!
//! Every ingest and resolution failure is one of these variants; callers
//! always get a typed result, nothing is logged-and-swallowed. Persistence
//! failures have their own type (`persist::PersistError`) so a durable-write
//! problem is never mistaken for a validation problem.

use thiserror::Error;

/// Errors surfaced by the cookbook store and the recipe resolver
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Ingest rejected: an entry with this name already exists
    #[error("entry name must be unique: '{0}' is already in the cookbook")]
    DuplicateName(String),

    /// Ingest rejected: a field failed validation
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Ingest rejected: a recipe lists the same required item twice
    #[error("recipe requiredItems must have unique names: '{0}' is repeated")]
    DuplicateRequiredItem(String),

    /// Query target does not exist in the cookbook
    #[error("no entry named '{0}' in the cookbook")]
    NotFound(String),

    /// Query target exists but is an ingredient
    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    /// A recipe's transitive closure names an entry absent from the cookbook
    #[error("recipe references unknown entry '{0}'")]
    BrokenReference(String),

    /// The recipe graph re-enters a recipe already being expanded
    #[error("cyclic recipe dependency involving '{0}'")]
    CyclicDependency(String),
}

impl Error {
    /// Stable machine-readable kind, used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DuplicateName(_) => "duplicate_name",
            Error::InvalidField(_) => "invalid_field",
            Error::DuplicateRequiredItem(_) => "duplicate_required_item",
            Error::NotFound(_) => "not_found",
            Error::NotARecipe(_) => "not_a_recipe",
            Error::BrokenReference(_) => "broken_reference",
            Error::CyclicDependency(_) => "cyclic_dependency",
        }
    }
}

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;
