//! Preference storage: two JSON documents under `~/.stationview`.
//!
//! Display settings are written only when the user saves the settings
//! dialog; axis overrides are written on every edit. Loads never fail:
//! a missing or unreadable file yields defaults, and a partial document
//! merges field by field (see [`crate::data::settings`]).

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::data::settings::{AxisSettingsMap, DisplaySettings};

/// Directory under `$HOME` that holds the preference files.
pub const PREFS_DIR_NAME: &str = ".stationview";
/// Display settings document.
pub const SETTINGS_FILE: &str = "settings.json";
/// Axis overrides document.
pub const AXIS_SETTINGS_FILE: &str = "axis_settings.json";

/// Handle to the on-disk preference directory.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    /// Store rooted at `$HOME/.stationview`.
    pub fn from_home() -> Result<Self, String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        Ok(Self {
            dir: PathBuf::from(home).join(PREFS_DIR_NAME),
        })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load display settings, falling back to defaults.
    pub fn load_display_settings(&self) -> DisplaySettings {
        self.load_or_default(SETTINGS_FILE)
    }

    /// Persist display settings.
    pub fn save_display_settings(&self, settings: &DisplaySettings) -> Result<(), String> {
        self.save(SETTINGS_FILE, settings)
    }

    /// Load axis overrides, falling back to defaults.
    pub fn load_axis_settings(&self) -> AxisSettingsMap {
        self.load_or_default(AXIS_SETTINGS_FILE)
    }

    /// Persist axis overrides.
    pub fn save_axis_settings(&self, axes: &AxisSettingsMap) -> Result<(), String> {
        self.save(AXIS_SETTINGS_FILE, axes)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        if !path.exists() {
            return T::default();
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", path, e);
                return T::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed {:?}: {}", path, e);
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create dir {:?}: {}", self.dir, e))?;
        let path = self.dir.join(file);
        let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
        fs::write(&path, text).map_err(|e| format!("Failed to write {:?}: {}", path, e))
    }
}
