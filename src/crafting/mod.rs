//! Recipe System
//!
//! Barter and craft definitions and the catalog they are looked up in.

pub mod definition;
pub mod registry;

pub use definition::{Barter, Craft, Recipe, RecipeKind, SourceRef};
pub use registry::RecipeCatalog;
