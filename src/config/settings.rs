//! User settings for the household budget tracker
//!
//! Manages display preferences: currency symbol, how many recent expenses to
//! list, the placeholder for empty descriptions, and chart width.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of entries shown in the recent expenses list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Shown in place of an empty description
    #[serde(default = "default_description_placeholder")]
    pub description_placeholder: String,

    /// Width of the longest bar in terminal charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_description_placeholder() -> String {
    "(no description)".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
            description_placeholder: default_description_placeholder(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk
    ///
    /// On first run the defaults are written out so they can be edited.
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::debug!(path = %settings_path.display(), "wrote default settings");
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
