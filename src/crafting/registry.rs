//! Recipe Catalog
//!
//! Holds the barter and craft snapshots for one pricing run and indexes them
//! by the id of the item they produce.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::definition::{Barter, Craft, Recipe};

/// Recipe positions keyed by the id of their canonical reward item
type RewardIndex = HashMap<String, Vec<usize>>;

/// Registry for all barters and crafts
#[derive(Debug)]
pub struct RecipeCatalog {
    barters: Vec<Barter>,
    crafts: Vec<Craft>,
    barters_by_reward: RewardIndex,
    crafts_by_reward: RewardIndex,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self {
            barters: Vec::new(),
            crafts: Vec::new(),
            barters_by_reward: HashMap::new(),
            crafts_by_reward: HashMap::new(),
        }
    }

    /// Build a catalog from fetched snapshots, keeping their order
    pub fn from_parts(barters: Vec<Barter>, crafts: Vec<Craft>) -> Self {
        let mut catalog = Self::new();
        for barter in barters {
            catalog.add_barter(barter);
        }
        for craft in crafts {
            catalog.add_craft(craft);
        }

        debug!(
            "Indexed {} barters and {} crafts",
            catalog.barters.len(),
            catalog.crafts.len()
        );

        catalog
    }

    pub fn add_barter(&mut self, barter: Barter) {
        index_recipe(&mut self.barters_by_reward, &barter, self.barters.len());
        self.barters.push(barter);
    }

    pub fn add_craft(&mut self, craft: Craft) {
        index_recipe(&mut self.crafts_by_reward, &craft, self.crafts.len());
        self.crafts.push(craft);
    }

    /// Barters whose first reward is the item, in insertion order
    pub fn barters_for<'a>(&'a self, item_id: &str) -> impl Iterator<Item = &'a Barter> + use<'a> {
        lookup(&self.barters_by_reward, &self.barters, item_id)
    }

    /// Crafts whose first reward is the item, in insertion order
    pub fn crafts_for<'a>(&'a self, item_id: &str) -> impl Iterator<Item = &'a Craft> + use<'a> {
        lookup(&self.crafts_by_reward, &self.crafts, item_id)
    }

    pub fn barters(&self) -> &[Barter] {
        &self.barters
    }

    pub fn crafts(&self) -> &[Craft] {
        &self.crafts
    }

    /// Get the total number of recipes
    pub fn len(&self) -> usize {
        self.barters.len() + self.crafts.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.barters.is_empty() && self.crafts.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn index_recipe<R: Recipe>(index: &mut RewardIndex, recipe: &R, position: usize) {
    match recipe.primary_reward() {
        Some(reward) => index
            .entry(reward.item.id.clone())
            .or_default()
            .push(position),
        None => warn!(
            "{} '{}' has no reward items and can never be selected",
            R::KIND.as_str(),
            recipe.id()
        ),
    }
}

fn lookup<'a, R>(
    index: &'a RewardIndex,
    recipes: &'a [R],
    item_id: &str,
) -> impl Iterator<Item = &'a R> + use<'a, R> {
    index
        .get(item_id)
        .map(|positions| positions.as_slice())
        .unwrap_or(&[])
        .iter()
        .map(move |&i| &recipes[i])
}
