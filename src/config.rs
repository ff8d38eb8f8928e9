//! Session Settings
//!
//! The per-user settings record: where the garden is and which simulation
//! day the session is on. Stored as JSON; missing fields take defaults so
//! an old or hand-written file still loads.

use crate::model::{SimDay, FIRST_DAY};
use crate::reasoning::{Hemisphere, Location};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenSettings {
    #[serde(default)]
    pub first_load_complete: bool,
    #[serde(default)]
    pub hemisphere: Hemisphere,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_day")]
    pub current_day: SimDay,
    #[serde(default)]
    pub xp: u32,
}

fn default_city() -> String {
    "Unknown".to_string()
}

fn default_day() -> SimDay {
    FIRST_DAY
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            first_load_complete: false,
            hemisphere: Hemisphere::North,
            city: default_city(),
            current_day: FIRST_DAY,
            xp: 0,
        }
    }
}

impl GardenSettings {
    /// Load settings from a JSON file
    ///
    /// A stored day of 0 is lifted to day 1.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        let mut settings: GardenSettings = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse settings JSON")?;
        settings.current_day = settings.current_day.max(FIRST_DAY);

        tracing::info!(
            "Loaded settings: day {}, {:?} hemisphere, city {}",
            settings.current_day,
            settings.hemisphere,
            settings.city
        );
        Ok(settings)
    }

    /// Load settings, or fall back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!("Settings file {:?} not found - using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;
        Ok(())
    }

    pub fn location(&self) -> Location {
        Location::new(self.hemisphere)
    }
}
