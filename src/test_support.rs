//! Fixture builders shared by the unit tests

use tracing_subscriber::EnvFilter;

use crate::crafting::{Barter, Craft, SourceRef};
use crate::data::{ContainedItem, Item, ItemAttribute, RequiredItem, TraderOffer, Vendor};
use crate::pricing::special::DOGTAG_IDS;
use crate::settings::Settings;

/// Show resolver traces with `RUST_LOG=cheapest_price=trace`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn item(id: &str, name: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        normalized_name: name.to_lowercase().replace(' ', "-"),
        types: Vec::new(),
        price_custom: None,
        cached: false,
        sell_for: Vec::new(),
        buy_for: Vec::new(),
        icon_link: None,
        wiki_link: None,
    }
}

/// Item sold by `vendor` from loyalty level 1
pub fn buyable(id: &str, name: &str, vendor: &str, price: i64) -> Item {
    let mut item = item(id, name);
    item.buy_for.push(offer(vendor, 1, price));
    item
}

pub fn offer(vendor: &str, min_trader_level: i32, price_rub: i64) -> TraderOffer {
    TraderOffer {
        vendor: Vendor {
            name: vendor.to_string(),
            normalized_name: vendor.to_string(),
            min_trader_level,
            task_unlock: None,
        },
        price_rub,
    }
}

pub fn required(item: Item, count: f64) -> RequiredItem {
    RequiredItem {
        item,
        count,
        attributes: Vec::new(),
    }
}

pub fn tool(item: Item, count: f64) -> RequiredItem {
    let mut entry = required(item, count);
    entry.attributes.push(attribute("tool", None));
    entry
}

/// BEAR dogtag ingredient that a trader buys for `sell_price` per level
pub fn dogtag(min_level: i32, sell_price: i64) -> RequiredItem {
    let mut tag = item(DOGTAG_IDS[0], "Dogtag BEAR");
    tag.sell_for.push(offer("therapist", 1, sell_price));

    let mut entry = required(tag, 1.0);
    let level = min_level.to_string();
    entry.attributes.push(attribute("minLevel", Some(level.as_str())));
    entry
}

fn attribute(key: &str, value: Option<&str>) -> ItemAttribute {
    ItemAttribute {
        name: key.to_string(),
        kind: key.to_string(),
        value: value.map(str::to_string),
    }
}

fn source(normalized_name: &str) -> SourceRef {
    SourceRef {
        name: normalized_name.to_string(),
        normalized_name: normalized_name.to_string(),
    }
}

fn reward(item: &Item, count: f64) -> Vec<ContainedItem> {
    vec![ContainedItem {
        item: item.clone(),
        count,
    }]
}

pub fn barter(
    id: &str,
    trader: &str,
    level: i32,
    reward_item: &Item,
    reward_count: f64,
    required_items: Vec<RequiredItem>,
) -> Barter {
    Barter {
        id: id.to_string(),
        trader: source(trader),
        level,
        task_unlock: None,
        reward_items: reward(reward_item, reward_count),
        required_items,
    }
}

pub fn craft(
    id: &str,
    station: &str,
    level: i32,
    reward_item: &Item,
    reward_count: f64,
    required_items: Vec<RequiredItem>,
) -> Craft {
    Craft {
        id: id.to_string(),
        station: source(station),
        level,
        task_unlock: None,
        reward_items: reward(reward_item, reward_count),
        required_items,
    }
}

pub fn settings_with(levels: &[(&str, i32)]) -> Settings {
    let mut settings = Settings::default();
    for &(name, level) in levels {
        settings.set_level(name, level);
    }
    settings
}
