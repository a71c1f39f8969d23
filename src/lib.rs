//! Cheapest acquisition cost for in-game items.
//!
//! Given an item, the barter and craft catalog, and what a player has
//! unlocked, finds the cheapest way to get one unit of the item. Recipe
//! ingredients are priced recursively; an item already being priced higher
//! up the same path falls back to its cash price so cyclic recipes terminate.
//!
//! ```no_run
//! use cheapest_price::{PriceContext, PricingOptions, RecipeCatalog, Settings, cheapest_price};
//! # fn run(item: &cheapest_price::Item, catalog: &RecipeCatalog, settings: &Settings)
//! # -> Result<(), cheapest_price::PricingError> {
//! let ctx = PriceContext::new(catalog, Some(settings), PricingOptions::default());
//! match cheapest_price(item, &ctx)? {
//!     Some(price) => println!("{} per unit via {}", price.price_per_unit, price.kind().as_str()),
//!     None => println!("no price found"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod crafting;
pub mod data;
pub mod error;
pub mod pricing;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use crafting::{Barter, Craft, Recipe, RecipeCatalog, RecipeKind};
pub use data::{Item, RequiredItem, TraderOffer, Vendor};
pub use error::{PricingError, SettingsError};
pub use pricing::{
    CostItem, ItemsSummary, PriceContext, PriceKind, PriceResult, PriceSource, cheapest_price,
    format_cost_items, summarize_items,
};
pub use settings::{PricingOptions, Settings};
