//! Resolved prices
//!
//! A `PriceResult` borrows the offer or recipe it was derived from, so the
//! variant of `PriceSource` decides which extra fields exist.

use serde::Serialize;

use crate::crafting::{Barter, Craft, SourceRef};
use crate::data::{TraderOffer, Vendor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceKind {
    Cash,
    CashSell,
    Barter,
    Craft,
    Custom,
}

impl PriceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceKind::Cash => "cash",
            PriceKind::CashSell => "cash-sell",
            PriceKind::Barter => "barter",
            PriceKind::Craft => "craft",
            PriceKind::Custom => "custom",
        }
    }
}

/// Where a price comes from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PriceSource<'a> {
    /// Bought outright
    Cash { vendor: &'a Vendor },
    /// Nobody sells it; estimated from what a trader pays for it
    CashSell { vendor: &'a Vendor },
    Barter {
        vendor: &'a SourceRef,
        barter: &'a Barter,
    },
    Craft { craft: &'a Craft },
    /// User-entered price
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult<'a> {
    #[serde(flatten)]
    pub source: PriceSource<'a>,
    /// Cost of the whole output `count`
    pub price: i64,
    #[serde(rename = "priceRUB")]
    pub price_rub: i64,
    pub price_per_unit: i64,
    /// Units the price buys
    pub count: f64,
}

impl<'a> PriceResult<'a> {
    pub fn cash(offer: &'a TraderOffer) -> Self {
        Self::single_unit(
            PriceSource::Cash {
                vendor: &offer.vendor,
            },
            offer.price_rub,
        )
    }

    pub fn cash_sell(offer: &'a TraderOffer) -> Self {
        Self::single_unit(
            PriceSource::CashSell {
                vendor: &offer.vendor,
            },
            offer.price_rub,
        )
    }

    pub fn barter(barter: &'a Barter, total_cost: f64, count: f64) -> Self {
        Self::batch(
            PriceSource::Barter {
                vendor: &barter.trader,
                barter,
            },
            total_cost,
            count,
        )
    }

    pub fn craft(craft: &'a Craft, total_cost: f64, count: f64) -> Self {
        Self::batch(PriceSource::Craft { craft }, total_cost, count)
    }

    pub fn custom(price: i64) -> Self {
        Self::single_unit(PriceSource::Custom, price)
    }

    fn single_unit(source: PriceSource<'a>, price: i64) -> Self {
        Self {
            source,
            price,
            price_rub: price,
            price_per_unit: price,
            count: 1.0,
        }
    }

    fn batch(source: PriceSource<'a>, total_cost: f64, count: f64) -> Self {
        let price = total_cost.round() as i64;
        Self {
            source,
            price,
            price_rub: price,
            price_per_unit: (total_cost / count).round() as i64,
            count,
        }
    }

    pub fn kind(&self) -> PriceKind {
        match self.source {
            PriceSource::Cash { .. } => PriceKind::Cash,
            PriceSource::CashSell { .. } => PriceKind::CashSell,
            PriceSource::Barter { .. } => PriceKind::Barter,
            PriceSource::Craft { .. } => PriceKind::Craft,
            PriceSource::Custom => PriceKind::Custom,
        }
    }

    /// Sell-back estimates lose to any real way of getting the item
    pub fn is_estimate(&self) -> bool {
        self.kind() == PriceKind::CashSell
    }

    /// Name of the trader or market for cash and barter prices
    pub fn vendor_name(&self) -> Option<&'a str> {
        match self.source {
            PriceSource::Cash { vendor } | PriceSource::CashSell { vendor } => {
                Some(vendor.name.as_str())
            }
            PriceSource::Barter { vendor, .. } => Some(vendor.name.as_str()),
            PriceSource::Craft { .. } | PriceSource::Custom => None,
        }
    }
}
