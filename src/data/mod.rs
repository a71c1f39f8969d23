pub mod item_def;

pub use item_def::{
    ContainedItem, FLEA_MARKET, Item, ItemAttribute, JAEGER, RequiredItem, TaskRef, TraderOffer,
    Vendor,
};
