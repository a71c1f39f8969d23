use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed catalog data found while pricing.
///
/// "No price" is not an error: resolvers return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("dogtag ingredient '{item_id}' has no minLevel attribute")]
    MissingDogtagLevel { item_id: String },

    #[error("dogtag ingredient '{item_id}' has non-numeric minLevel '{value}'")]
    InvalidDogtagLevel { item_id: String, value: String },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}
