//! Player progression settings and pricing options.
//!
//! Both load from TOML so a saved profile can be priced without code:
//!
//! ```toml
//! has-flea = true
//! min-dogtag-level = 10
//! hideout-management = 51
//!
//! [levels]
//! prapor = 4
//! workbench = 2
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::data::TaskRef;
use crate::error::SettingsError;

/// What the player has unlocked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Trader and station levels keyed by normalized name
    pub levels: HashMap<String, i32>,
    pub has_flea: bool,
    /// Gate offers and recipes on the quests in `completed_quests`
    pub use_tarkov_tracker: bool,
    pub completed_quests: HashSet<String>,
    /// Jaeger is met through a quest rather than by level
    pub jaeger: bool,
    pub hide_dogtag_barters: bool,
    pub min_dogtag_level: i32,
    pub hideout_management: i32,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;

        info!(
            "Loaded settings from {:?} ({} levels, {} completed quests)",
            path,
            settings.levels.len(),
            settings.completed_quests.len()
        );

        Ok(settings)
    }

    /// Unlocked level of a trader or station, `None` when not unlocked at all
    pub fn level(&self, normalized_name: &str) -> Option<i32> {
        self.levels.get(normalized_name).copied()
    }

    pub fn set_level(&mut self, normalized_name: &str, level: i32) {
        self.levels.insert(normalized_name.to_string(), level);
    }

    /// Whether a quest gate is satisfied under the tracker setting
    pub fn task_unlocked(&self, task: Option<&TaskRef>) -> bool {
        match task {
            Some(task) if self.use_tarkov_tracker => self.completed_quests.contains(&task.id),
            _ => true,
        }
    }
}

/// Caller toggles for one pricing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PricingOptions {
    /// Ignore every level, quest and flea gate
    pub allow_all_sources: bool,
    /// Let nested ingredients be priced through barters
    pub use_barter_ingredients: bool,
    /// Let nested ingredients be priced through crafts
    pub use_craft_ingredients: bool,
    /// Hideout fuel is mostly recovered, charge only part of it
    pub free_fuel: bool,
}

impl PricingOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            allow_all_sources: false,
            use_barter_ingredients: true,
            use_craft_ingredients: true,
            free_fuel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            has-flea = true
            use-tarkov-tracker = true
            completed-quests = ["q1", "q2"]
            min-dogtag-level = 15
            hideout-management = 51

            [levels]
            prapor = 4
            workbench = 2
        "#;

        let settings = Settings::from_toml_str(toml_str).unwrap();
        assert!(settings.has_flea);
        assert!(!settings.jaeger);
        assert_eq!(settings.level("prapor"), Some(4));
        assert_eq!(settings.level("skier"), None);
        assert_eq!(settings.min_dogtag_level, 15);
        assert_eq!(settings.hideout_management, 51);
        assert!(settings.completed_quests.contains("q2"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.has_flea);
        assert!(settings.levels.is_empty());
    }

    #[test]
    fn test_task_unlocked() {
        let quest = TaskRef {
            id: "q1".to_string(),
            name: None,
        };

        let mut settings = Settings::default();
        assert!(settings.task_unlocked(None));
        // Quest gates only apply with the tracker on
        assert!(settings.task_unlocked(Some(&quest)));

        settings.use_tarkov_tracker = true;
        assert!(!settings.task_unlocked(Some(&quest)));

        settings.completed_quests.insert("q1".to_string());
        assert!(settings.task_unlocked(Some(&quest)));
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");

        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"jaeger = true\n[levels]\nmechanic = 3\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.jaeger);
        assert_eq!(settings.level("mechanic"), Some(3));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Settings::load(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let err = Settings::from_toml_str("has-flea = \"maybe\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_pricing_options() {
        let defaults = PricingOptions::default();
        assert!(defaults.use_barter_ingredients);
        assert!(defaults.use_craft_ingredients);
        assert!(!defaults.allow_all_sources);

        let options =
            PricingOptions::from_toml_str("use-craft-ingredients = false\nfree-fuel = true")
                .unwrap();
        assert!(options.use_barter_ingredients);
        assert!(!options.use_craft_ingredients);
        assert!(options.free_fuel);
    }
}
