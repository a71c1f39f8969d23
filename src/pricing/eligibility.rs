//! Whether an offer or recipe is usable under the player's settings

use crate::crafting::Recipe;
use crate::data::{JAEGER, TaskRef, TraderOffer};
use crate::settings::Settings;

/// Gate check shared by trader offers, barters and crafts.
///
/// Passes when all sources are allowed, or when the trader/station is
/// unlocked to `required_level` and any quest gate is met.
pub fn is_source_eligible(
    settings: &Settings,
    allow_all_sources: bool,
    gate: &str,
    required_level: i32,
    task_unlock: Option<&TaskRef>,
) -> bool {
    if allow_all_sources {
        return true;
    }
    settings.level(gate).is_some_and(|level| level >= required_level)
        && settings.task_unlocked(task_unlock)
}

/// Purchase offers: free offers never count, the flea market needs unlocking
pub fn is_buy_offer_eligible(
    offer: &TraderOffer,
    settings: &Settings,
    allow_all_sources: bool,
) -> bool {
    if offer.price_rub <= 0 {
        return false;
    }
    if offer.vendor.is_flea_market() {
        return allow_all_sources || settings.has_flea;
    }
    is_source_eligible(
        settings,
        allow_all_sources,
        &offer.vendor.normalized_name,
        offer.vendor.min_trader_level,
        offer.vendor.task_unlock.as_ref(),
    )
}

/// Sell-back offers usable for an estimate: traders only, Jaeger once met
pub fn is_sell_offer_eligible(
    offer: &TraderOffer,
    settings: &Settings,
    allow_all_sources: bool,
) -> bool {
    if offer.vendor.is_flea_market() {
        return false;
    }
    offer.vendor.normalized_name != JAEGER || allow_all_sources || settings.jaeger
}

pub fn is_recipe_eligible<R: Recipe>(
    recipe: &R,
    settings: &Settings,
    allow_all_sources: bool,
) -> bool {
    is_source_eligible(
        settings,
        allow_all_sources,
        &recipe.source().normalized_name,
        recipe.level(),
        recipe.task_unlock(),
    )
}
