//! Price a list of required items for display
//!
//! Each entry gets its cheapest price plus the overrides that only make
//! sense when showing a cost breakdown: custom prices, partly-recovered fuel,
//! dogtag levels and the hideout-skill count discount.

use serde::Serialize;

use crate::data::RequiredItem;
use crate::error::PricingError;

use super::cheapest::{PriceContext, cheapest_price};
use super::result::{PriceKind, PriceResult};
use super::special::{
    dogtag_display_name, dogtag_level, effective_count, fuel_unit_price, is_dogtag, is_fuel,
};

/// Shown when an item has no icon of its own
pub const UNKNOWN_ITEM_ICON: &str = "/images/unknown-item-icon.jpg";

/// One priced line of a cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem<'a> {
    pub id: &'a str,
    pub name: String,
    pub count: f64,
    /// Unit price, `None` when no price was found
    pub price: Option<i64>,
    /// How `price` was obtained. This and the next two fields are `None` when
    /// the price comes from the fuel or dogtag formula.
    pub price_type: Option<PriceKind>,
    pub vendor: Option<&'a str>,
    pub price_details: Option<PriceResult<'a>>,
    pub icon_link: &'a str,
    pub wiki_link: Option<&'a str>,
    pub item_link: String,
    pub is_tool: bool,
    pub non_functional: bool,
    pub cached: bool,
}

impl CostItem<'_> {
    /// Price of the whole line
    pub fn total_price(&self) -> Option<i64> {
        self.price.map(|p| (p as f64 * self.count).round() as i64)
    }
}

pub fn format_cost_items<'a>(
    items: &'a [RequiredItem],
    ctx: &PriceContext<'a>,
) -> Result<Vec<CostItem<'a>>, PricingError> {
    items.iter().map(|required| format_cost_item(required, ctx)).collect()
}

fn format_cost_item<'a>(
    required: &'a RequiredItem,
    ctx: &PriceContext<'a>,
) -> Result<CostItem<'a>, PricingError> {
    let item = &required.item;
    let settings = ctx.settings();

    let mut details = cheapest_price(item, ctx)?;
    if let Some(custom) = item.price_custom {
        details = Some(PriceResult::custom(custom));
    }

    let mut name = item.name.clone();
    let mut price = details.as_ref().map(|d| d.price_per_unit);

    if ctx.options().free_fuel && is_fuel(item) {
        price = Some(fuel_unit_price(item));
        details = None;
    }

    if is_dogtag(item) {
        let level = dogtag_level(required, settings)?;
        name = dogtag_display_name(item, level);
        price = Some(item.best_trader_sell_price() * i64::from(level));
        details = None;
    }

    Ok(CostItem {
        id: &item.id,
        name,
        count: effective_count(required.count, settings.hideout_management),
        price,
        price_type: details.as_ref().map(|d| d.kind()),
        vendor: details.as_ref().and_then(|d| d.vendor_name()),
        price_details: details,
        icon_link: item.icon_link.as_deref().unwrap_or(UNKNOWN_ITEM_ICON),
        wiki_link: item.wiki_link.as_deref(),
        item_link: item.item_link(),
        is_tool: required.is_tool(),
        non_functional: required.is_non_functional(),
        cached: item.cached,
    })
}
