//! Item-specific price and count overrides
//!
//! Dogtags are priced by level, hideout fuel is partly recovered, and one
//! stack-upgrade marker count shrinks with the hideout management skill.

use crate::data::{Item, RequiredItem};
use crate::error::PricingError;
use crate::settings::Settings;

/// BEAR and USEC dogtags
pub const DOGTAG_IDS: [&str; 2] = ["59f32bb586f774757e1e8442", "59f32c3b86f77472a31742f0"];

/// Expeditionary and metal fuel tanks
pub const FUEL_IDS: [&str; 2] = ["5d1b371186f774253763a656", "5d1b36a186f7742523398433"];

/// Roubles, the currency everything is priced in
pub const CURRENCY_ID: &str = "5449016a4bdc2d6f028b456f";

/// Share of a fuel tank's value charged when fuel is mostly recovered
const FUEL_COST_SHARE: f64 = 0.1;

/// Ingredient count that marks the skill-discounted stack upgrade
const SKILL_DISCOUNT_MARKER: f64 = 0.66;

/// Percent discount per hideout management level
const SKILL_DISCOUNT_PER_LEVEL: f64 = 0.5;

pub trait Roundable {
    fn round_2(self) -> f64;
}

impl Roundable for f64 {
    #[inline(always)]
    fn round_2(self) -> f64 {
        (self * 100.0).round() / 100.0
    }
}

pub fn is_dogtag(item: &Item) -> bool {
    DOGTAG_IDS.contains(&item.id.as_str())
}

pub fn is_fuel(item: &Item) -> bool {
    FUEL_IDS.contains(&item.id.as_str())
}

pub fn is_currency(item: &Item) -> bool {
    item.id == CURRENCY_ID
}

/// Minimum dogtag level a recipe asks for, raised to the player's floor.
///
/// A dogtag ingredient without a numeric `minLevel` attribute is broken
/// catalog data and is reported as an error.
pub fn dogtag_level(required: &RequiredItem, settings: &Settings) -> Result<i32, PricingError> {
    let value = required
        .attribute("minLevel")
        .and_then(|a| a.value.as_deref())
        .ok_or_else(|| PricingError::MissingDogtagLevel {
            item_id: required.item.id.clone(),
        })?;

    let level: i32 = value
        .trim()
        .parse()
        .map_err(|_| PricingError::InvalidDogtagLevel {
            item_id: required.item.id.clone(),
            value: value.to_string(),
        })?;

    Ok(level.max(settings.min_dogtag_level).max(0))
}

/// Dogtags are worth their trader sell value times their level
pub fn dogtag_unit_price(
    required: &RequiredItem,
    settings: &Settings,
) -> Result<i64, PricingError> {
    let level = dogtag_level(required, settings)?;
    Ok(required.item.best_trader_sell_price() * i64::from(level))
}

pub fn dogtag_display_name(item: &Item, level: i32) -> String {
    format!("{} ≥ {}", item.name, level)
}

pub fn fuel_unit_price(item: &Item) -> i64 {
    (item.best_trader_sell_price() as f64 * FUEL_COST_SHARE).round() as i64
}

/// Ingredient count after the hideout management discount.
///
/// Only the 0.66 marker count is discounted; every other count is unchanged.
/// The discount never exceeds the count, so the result stays non-negative.
pub fn effective_count(count: f64, hideout_management: i32) -> f64 {
    if (count - SKILL_DISCOUNT_MARKER).abs() > f64::EPSILON {
        return count;
    }
    let percent = f64::from(hideout_management) * SKILL_DISCOUNT_PER_LEVEL;
    let discount = (count * percent / 100.0).clamp(0.0, count);
    (count - discount).round_2()
}
