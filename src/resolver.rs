// src/resolver.rs

//! Recipe resolution
//!
//! Flattens a recipe's required-item graph into total quantities of base
//! ingredients plus aggregate cook time. Resolution is a pure function of a
//! store snapshot and a recipe name: it touches no shared state and
//! terminates on success or on the first typed error.
//!
//! Quantities scale multiplicatively through nested recipes: 2 units of a
//! sub-recipe that itself needs 3 units of flour contribute 6 units of flour
//! to the root. Contributions for the same base ingredient are summed across
//! all branches, so traversal order never changes the result.
//!
//! The walk keeps the set of recipe names on the current recursion path and
//! fails with `CyclicDependency` on re-entry, so a cyclic cookbook can never
//! drive unbounded recursion.

use crate::entry::{Entry, RequiredItem};
use crate::error::{Error, Result};
use crate::store::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One base ingredient's share of a resolved recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: i64,
}

/// Flattened summary of one unit of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSummary {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: i64,
    /// One entry per distinct base ingredient, name-sorted
    pub ingredients: Vec<IngredientTotal>,
}

/// Running totals for one resolution
#[derive(Default)]
struct Accumulator {
    /// Base ingredient name → total units consumed
    totals: BTreeMap<String, i64>,
    /// Cook time accounted per unit of each base ingredient consumed
    cook_time: i64,
}

/// Resolve one unit of the named recipe against a snapshot
pub fn resolve(snapshot: &Snapshot, name: &str) -> Result<ResolvedSummary> {
    let required_items = match snapshot.get(name) {
        None => return Err(Error::NotFound(name.to_string())),
        Some(Entry::Ingredient { .. }) => return Err(Error::NotARecipe(name.to_string())),
        Some(Entry::Recipe { required_items, .. }) => required_items,
    };

    let mut acc = Accumulator::default();
    let mut path = HashSet::new();
    path.insert(name.to_string());
    expand(snapshot, required_items, 1, &mut path, &mut acc)?;

    let ingredients = acc
        .totals
        .into_iter()
        .map(|(name, quantity)| IngredientTotal { name, quantity })
        .collect();

    Ok(ResolvedSummary {
        name: name.to_string(),
        cook_time: acc.cook_time,
        ingredients,
    })
}

/// Walk one recipe's required items at the given cumulative multiplier
fn expand(
    snapshot: &Snapshot,
    items: &[RequiredItem],
    scale: i64,
    path: &mut HashSet<String>,
    acc: &mut Accumulator,
) -> Result<()> {
    for item in items {
        match snapshot.get(&item.name) {
            None => return Err(Error::BrokenReference(item.name.clone())),
            Some(Entry::Ingredient { name, cook_time }) => {
                let units = scale * item.quantity;
                *acc.totals.entry(name.clone()).or_insert(0) += units;
                acc.cook_time += units * cook_time;
            }
            Some(Entry::Recipe {
                name,
                required_items,
            }) => {
                if !path.insert(name.clone()) {
                    return Err(Error::CyclicDependency(name.clone()));
                }
                expand(snapshot, required_items, scale * item.quantity, path, acc)?;
                path.remove(name);
            }
        }
    }

    Ok(())
}
