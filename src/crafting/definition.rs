//! Barter and Craft Recipe Definitions
//!
//! Barters and crafts are the same recipe shape: required items in, reward
//! items out. They differ only in what gates them (a trader level or a hideout
//! station level) and in whether tool ingredients are charged.

use serde::{Deserialize, Serialize};

use crate::data::{ContainedItem, RequiredItem, TaskRef};

/// Recipe kinds, used for logging and result tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    Barter,
    Craft,
}

impl RecipeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeKind::Barter => "barter",
            RecipeKind::Craft => "craft",
        }
    }
}

/// Trader or hideout station a recipe is offered at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub name: String,
    pub normalized_name: String,
}

/// A trade offered by a trader at a given loyalty level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barter {
    pub id: String,
    pub trader: SourceRef,
    pub level: i32,
    #[serde(default)]
    pub task_unlock: Option<TaskRef>,
    pub reward_items: Vec<ContainedItem>,
    pub required_items: Vec<RequiredItem>,
}

/// A production at a hideout station of a given level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Craft {
    pub id: String,
    pub station: SourceRef,
    pub level: i32,
    #[serde(default)]
    pub task_unlock: Option<TaskRef>,
    pub reward_items: Vec<ContainedItem>,
    pub required_items: Vec<RequiredItem>,
}

/// Common view over barters and crafts used by the recipe cost resolver
pub trait Recipe {
    const KIND: RecipeKind;

    fn id(&self) -> &str;

    /// Trader or station whose level gates this recipe
    fn source(&self) -> &SourceRef;

    fn level(&self) -> i32;

    fn task_unlock(&self) -> Option<&TaskRef>;

    fn reward_items(&self) -> &[ContainedItem];

    fn required_items(&self) -> &[RequiredItem];

    /// Whether ingredients tagged as tools are left out of the cost
    fn excludes_tools(&self) -> bool {
        false
    }

    /// The canonical output: the first reward entry
    fn primary_reward(&self) -> Option<&ContainedItem> {
        self.reward_items().first()
    }

    fn rewards_item(&self, item_id: &str) -> bool {
        self.primary_reward().is_some_and(|r| r.item.id == item_id)
    }
}

impl Recipe for Barter {
    const KIND: RecipeKind = RecipeKind::Barter;

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &SourceRef {
        &self.trader
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn task_unlock(&self) -> Option<&TaskRef> {
        self.task_unlock.as_ref()
    }

    fn reward_items(&self) -> &[ContainedItem] {
        &self.reward_items
    }

    fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }
}

impl Recipe for Craft {
    const KIND: RecipeKind = RecipeKind::Craft;

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &SourceRef {
        &self.station
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn task_unlock(&self) -> Option<&TaskRef> {
        self.task_unlock.as_ref()
    }

    fn reward_items(&self) -> &[ContainedItem] {
        &self.reward_items
    }

    fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }

    fn excludes_tools(&self) -> bool {
        true
    }
}
