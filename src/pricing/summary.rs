//! Shopping-list totals
//!
//! Prices a list of wanted items without exploring ingredient recipes, the
//! way a requirements table shows "what it costs to get all of this".

use serde::Serialize;

use crate::crafting::RecipeCatalog;
use crate::data::Item;
use crate::error::PricingError;
use crate::settings::{PricingOptions, Settings};

use super::cheapest::{PriceContext, cheapest_price};
use super::result::PriceResult;
use super::special::is_currency;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub quantity: f64,
    pub cheapest: Option<PriceResult<'a>>,
    pub unit_price: Option<i64>,
    pub total_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsSummary<'a> {
    pub rows: Vec<SummaryRow<'a>>,
    /// Sum over the rows that have a price
    pub total_price: i64,
}

impl<'a> ItemsSummary<'a> {
    /// Rows nothing could be found for
    pub fn unpriced(&self) -> impl Iterator<Item = &SummaryRow<'a>> {
        self.rows.iter().filter(|row| row.unit_price.is_none())
    }
}

/// Price `quantity` of each item, top-level recipes only
pub fn summarize_items<'a>(
    wanted: &[(&'a Item, f64)],
    catalog: &'a RecipeCatalog,
    settings: Option<&'a Settings>,
) -> Result<ItemsSummary<'a>, PricingError> {
    let options = PricingOptions {
        use_barter_ingredients: false,
        use_craft_ingredients: false,
        ..PricingOptions::default()
    };
    let ctx = PriceContext::new(catalog, settings, options);

    let mut rows = Vec::with_capacity(wanted.len());
    for &(item, quantity) in wanted {
        let mut cheapest = cheapest_price(item, &ctx)?;

        let unit_price = if is_currency(item) {
            // Roubles cost exactly one rouble each
            if let Some(result) = cheapest.as_mut() {
                result.price = 1;
                result.price_rub = 1;
                result.price_per_unit = 1;
            }
            Some(1)
        } else {
            cheapest.as_ref().map(|c| c.price_per_unit)
        };

        rows.push(SummaryRow {
            id: &item.id,
            name: &item.name,
            quantity,
            cheapest,
            unit_price,
            total_price: unit_price.map(|p| (p as f64 * quantity).round() as i64),
        });
    }

    let total_price = rows.iter().filter_map(|row| row.total_price).sum();

    Ok(ItemsSummary { rows, total_price })
}
