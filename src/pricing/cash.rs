//! Direct purchase pricing, with a sell-back estimate when nothing is for sale

use crate::data::{Item, TraderOffer};
use crate::settings::Settings;

use super::eligibility::{is_buy_offer_eligible, is_sell_offer_eligible};
use super::result::PriceResult;

/// Cheapest usable purchase offer for the item.
///
/// When no purchase is possible, falls back to the highest price a usable
/// trader pays for the item (`cash-sell`). That is a heuristic for
/// replacement cost, not a market price. `None` when neither exists.
pub fn cash_price<'a>(
    item: &'a Item,
    settings: &Settings,
    allow_all_sources: bool,
) -> Option<PriceResult<'a>> {
    let cheapest_buy = item
        .buy_for
        .iter()
        .filter(|offer| is_buy_offer_eligible(offer, settings, allow_all_sources))
        .reduce(|best, offer| if offer.price_rub < best.price_rub { offer } else { best });

    if let Some(offer) = cheapest_buy {
        return Some(PriceResult::cash(offer));
    }

    best_sell_offer(item, settings, allow_all_sources).map(PriceResult::cash_sell)
}

fn best_sell_offer<'a>(
    item: &'a Item,
    settings: &Settings,
    allow_all_sources: bool,
) -> Option<&'a TraderOffer> {
    item.sell_for
        .iter()
        .filter(|offer| is_sell_offer_eligible(offer, settings, allow_all_sources))
        .reduce(|best, offer| if offer.price_rub > best.price_rub { offer } else { best })
}
