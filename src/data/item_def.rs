//! Item Definition Structures
//!
//! Catalog records as the item API delivers them: items with their trader
//! offers, and the ingredient entries recipes refer to.

use serde::{Deserialize, Serialize};

/// Normalized name of the open player marketplace
pub const FLEA_MARKET: &str = "flea-market";

/// Normalized name of the trader whose offers need a separate unlock
pub const JAEGER: &str = "jaeger";

// ============================================================================
// Vendors and Offers
// ============================================================================

/// Quest reference used to gate offers and recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Who an offer is made by: a trader or the flea market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub name: String,
    pub normalized_name: String,
    #[serde(default)]
    pub min_trader_level: i32,
    #[serde(default)]
    pub task_unlock: Option<TaskRef>,
}

impl Vendor {
    pub fn is_flea_market(&self) -> bool {
        self.normalized_name == FLEA_MARKET
    }
}

/// A buy or sell offer for an item, priced in roubles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderOffer {
    pub vendor: Vendor,
    #[serde(rename = "priceRUB")]
    pub price_rub: i64,
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub normalized_name: String,
    /// Category tags such as "gun" or "keys"
    #[serde(default)]
    pub types: Vec<String>,
    /// Price set by the user that overrides every resolved price
    #[serde(default)]
    pub price_custom: Option<i64>,
    /// Prices on this record are a stale fallback
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub sell_for: Vec<TraderOffer>,
    #[serde(default)]
    pub buy_for: Vec<TraderOffer>,
    #[serde(default)]
    pub icon_link: Option<String>,
    #[serde(default)]
    pub wiki_link: Option<String>,
}

impl Item {
    pub fn has_type(&self, item_type: &str) -> bool {
        self.types.iter().any(|t| t == item_type)
    }

    /// Highest rouble price a trader (not the flea market) pays for this item, 0 when none do
    pub fn best_trader_sell_price(&self) -> i64 {
        self.sell_for
            .iter()
            .filter(|offer| !offer.vendor.is_flea_market())
            .map(|offer| offer.price_rub)
            .max()
            .unwrap_or(0)
    }

    /// Route of the item page
    pub fn item_link(&self) -> String {
        format!("/item/{}", self.normalized_name)
    }
}

// ============================================================================
// Recipe Entries
// ============================================================================

/// Free-form attribute attached to a recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl ItemAttribute {
    fn matches(&self, key: &str) -> bool {
        self.kind == key || self.name == key
    }
}

/// An ingredient of a barter or craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub item: Item,
    pub count: f64,
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
}

impl RequiredItem {
    pub fn attribute(&self, key: &str) -> Option<&ItemAttribute> {
        self.attributes.iter().find(|a| a.matches(key))
    }

    /// Tools are returned after crafting and are not consumed
    pub fn is_tool(&self) -> bool {
        self.attribute("tool").is_some()
    }

    /// Guns count as non-functional unless explicitly marked functional
    pub fn is_non_functional(&self) -> bool {
        if !self.item.has_type("gun") {
            return false;
        }
        !self
            .attribute("functional")
            .and_then(|a| a.value.as_deref())
            .is_some_and(|v| v == "true")
    }
}

/// An output entry of a barter or craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainedItem {
    pub item: Item,
    pub count: f64,
}
