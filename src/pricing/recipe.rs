//! Barter and craft cost resolution
//!
//! Both recipe kinds are priced the same way: sum the unit price of every
//! ingredient times its count, divide by the output count, keep the cheapest
//! eligible recipe in catalog order.

use tracing::{debug, warn};

use crate::crafting::Recipe;
use crate::data::{Item, RequiredItem};
use crate::error::PricingError;

use super::cash::cash_price;
use super::cheapest::{PriceContext, cheapest_price_in_chain};
use super::eligibility::is_recipe_eligible;
use super::result::PriceResult;
use super::special::{dogtag_unit_price, effective_count, is_dogtag};

/// Cheapest eligible barter producing `item`
pub fn cheapest_barter<'a>(
    item: &'a Item,
    ctx: &PriceContext<'a>,
    item_chain: &[&'a str],
) -> Result<Option<PriceResult<'a>>, PricingError> {
    cheapest_recipe(
        item,
        ctx.catalog().barters_for(&item.id),
        ctx,
        item_chain,
        PriceResult::barter,
    )
}

/// Cheapest eligible craft producing `item`; tool ingredients are free
pub fn cheapest_craft<'a>(
    item: &'a Item,
    ctx: &PriceContext<'a>,
    item_chain: &[&'a str],
) -> Result<Option<PriceResult<'a>>, PricingError> {
    cheapest_recipe(
        item,
        ctx.catalog().crafts_for(&item.id),
        ctx,
        item_chain,
        PriceResult::craft,
    )
}

fn cheapest_recipe<'a, R: Recipe + 'a>(
    item: &'a Item,
    recipes: impl Iterator<Item = &'a R>,
    ctx: &PriceContext<'a>,
    item_chain: &[&'a str],
    to_result: fn(&'a R, f64, f64) -> PriceResult<'a>,
) -> Result<Option<PriceResult<'a>>, PricingError> {
    let mut chain = item_chain.to_vec();
    chain.push(item.id.as_str());

    let settings = ctx.settings();
    let allow_all_sources = ctx.allow_all_sources();

    let mut best: Option<PriceResult<'a>> = None;

    for recipe in recipes.filter(|r| is_recipe_eligible(*r, settings, allow_all_sources)) {
        let Some(reward) = recipe.primary_reward() else {
            continue;
        };
        if reward.count <= 0.0 {
            warn!(
                "{} '{}' yields {} of {}, skipping",
                R::KIND.as_str(),
                recipe.id(),
                reward.count,
                item.id
            );
            continue;
        }

        let Some(total_cost) = recipe_cost(recipe, ctx, &chain)? else {
            debug!(
                "{} '{}' has an ingredient without a price, skipping",
                R::KIND.as_str(),
                recipe.id()
            );
            continue;
        };

        let candidate = to_result(recipe, total_cost, reward.count);

        // A zero best is replaced by whatever comes next
        let replace = best.as_ref().is_none_or(|current| {
            current.price_per_unit == 0 || candidate.price_per_unit < current.price_per_unit
        });
        if replace {
            best = Some(candidate);
        }
    }

    Ok(best)
}

/// Total ingredient cost of one run of the recipe, `None` if an ingredient cannot be priced
fn recipe_cost<'a, R: Recipe>(
    recipe: &'a R,
    ctx: &PriceContext<'a>,
    chain: &[&'a str],
) -> Result<Option<f64>, PricingError> {
    let settings = ctx.settings();
    let mut total = 0.0;

    for required in recipe.required_items() {
        if recipe.excludes_tools() && required.is_tool() {
            continue;
        }

        let Some(unit_price) = ingredient_unit_price(required, ctx, chain)? else {
            return Ok(None);
        };

        total += unit_price as f64 * effective_count(required.count, settings.hideout_management);
    }

    Ok(Some(total))
}

fn ingredient_unit_price<'a>(
    required: &'a RequiredItem,
    ctx: &PriceContext<'a>,
    chain: &[&'a str],
) -> Result<Option<i64>, PricingError> {
    let settings = ctx.settings();
    let ingredient = &required.item;

    if is_dogtag(ingredient) {
        // TODO: drop recipes with hidden dogtags instead of zeroing them once
        // the intended behavior is settled
        if settings.hide_dogtag_barters {
            return Ok(Some(0));
        }
        return dogtag_unit_price(required, settings).map(Some);
    }

    if chain.contains(&ingredient.id.as_str()) {
        debug!(
            "{} is already being priced on this path, using its cash price",
            ingredient.id
        );
        let price = cash_price(ingredient, settings, ctx.allow_all_sources());
        return Ok(price.map(|p| p.price_rub));
    }

    let price = cheapest_price_in_chain(ingredient, ctx, chain)?;
    Ok(price.map(|p| p.price_per_unit))
}
