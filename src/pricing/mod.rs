//! Cheapest Acquisition Pricing
//!
//! Resolves the cheapest way to get an item: buying it, bartering for it or
//! crafting it, with every recipe ingredient priced by the same rule.

pub mod cash;
pub mod cheapest;
pub mod cost_items;
pub mod eligibility;
pub mod recipe;
pub mod result;
pub mod special;
pub mod summary;

pub use cash::cash_price;
pub use cheapest::{PriceContext, cheapest_price};
pub use cost_items::{CostItem, format_cost_items};
pub use recipe::{cheapest_barter, cheapest_craft};
pub use result::{PriceKind, PriceResult, PriceSource};
pub use summary::{ItemsSummary, SummaryRow, summarize_items};
