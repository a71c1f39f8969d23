//! Cheapest way to obtain an item
//!
//! Combines the cash price with the best barter and craft. Recipe ingredients
//! are priced by recursing back into this module, carrying the chain of item
//! ids already being resolved so cycles fall back to cash prices.

use std::borrow::Cow;
use tracing::trace;

use crate::crafting::RecipeCatalog;
use crate::data::Item;
use crate::error::PricingError;
use crate::settings::{PricingOptions, Settings};

use super::cash::cash_price;
use super::recipe::{cheapest_barter, cheapest_craft};
use super::result::PriceResult;

/// Everything one pricing run reads
#[derive(Debug, Clone)]
pub struct PriceContext<'a> {
    catalog: &'a RecipeCatalog,
    settings: Cow<'a, Settings>,
    options: PricingOptions,
}

impl<'a> PriceContext<'a> {
    /// Without settings every source is allowed, as for anonymous pricing
    pub fn new(
        catalog: &'a RecipeCatalog,
        settings: Option<&'a Settings>,
        options: PricingOptions,
    ) -> Self {
        match settings {
            Some(settings) => Self {
                catalog,
                settings: Cow::Borrowed(settings),
                options,
            },
            None => Self {
                catalog,
                settings: Cow::Owned(Settings::default()),
                options: PricingOptions {
                    allow_all_sources: true,
                    ..options
                },
            },
        }
    }

    pub fn catalog(&self) -> &'a RecipeCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn options(&self) -> PricingOptions {
        self.options
    }

    pub fn allow_all_sources(&self) -> bool {
        self.options.allow_all_sources
    }
}

/// Cheapest price for one unit of `item`, `None` when it cannot be obtained
pub fn cheapest_price<'a>(
    item: &'a Item,
    ctx: &PriceContext<'a>,
) -> Result<Option<PriceResult<'a>>, PricingError> {
    cheapest_price_in_chain(item, ctx, &[])
}

/// Recursive step. An empty `item_chain` marks the top-level request, which
/// always looks at barters and crafts; nested ingredient lookups only do so
/// when the matching ingredient option is on.
pub(crate) fn cheapest_price_in_chain<'a>(
    item: &'a Item,
    ctx: &PriceContext<'a>,
    item_chain: &[&'a str],
) -> Result<Option<PriceResult<'a>>, PricingError> {
    trace!("Pricing {} at depth {}", item.id, item_chain.len());

    let top_level = item_chain.is_empty();
    let options = ctx.options();

    let mut best = cash_price(item, ctx.settings(), ctx.allow_all_sources());

    if top_level || options.use_barter_ingredients {
        best = prefer(best, cheapest_barter(item, ctx, item_chain)?);
    }
    if top_level || options.use_craft_ingredients {
        best = prefer(best, cheapest_craft(item, ctx, item_chain)?);
    }

    Ok(best)
}

/// A recipe result wins over no price, over a sell-back estimate, or when strictly cheaper
fn prefer<'a>(
    best: Option<PriceResult<'a>>,
    candidate: Option<PriceResult<'a>>,
) -> Option<PriceResult<'a>> {
    match (best, candidate) {
        (best, None) => best,
        (None, candidate) => candidate,
        (Some(best), Some(candidate)) => {
            if best.is_estimate() || candidate.price_per_unit < best.price_per_unit {
                Some(candidate)
            } else {
                Some(best)
            }
        }
    }
}
