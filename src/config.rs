//! Configuration file support for themer
//!
//! Handles `.themer.toml` configuration file loading and generation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::JsonSettingsFile;
use crate::store::ThemeStore;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = ".themer.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host settings file holding the selected theme
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,

    /// Directory scanned for `*.json` theme files
    #[serde(default = "default_themes_dir")]
    pub themes_dir: PathBuf,

    /// Color table snapshot used by `themer apply`
    #[serde(default = "default_tables_file")]
    pub tables_file: PathBuf,

    /// Debug log written in debug builds
    #[serde(default = "default_debug_log")]
    pub debug_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            themes_dir: default_themes_dir(),
            tables_file: default_tables_file(),
            debug_log: default_debug_log(),
        }
    }
}

// Default value functions
fn default_settings_file() -> PathBuf {
    PathBuf::from("settings/Themer.json")
}

fn default_themes_dir() -> PathBuf {
    PathBuf::from("themes")
}

fn default_tables_file() -> PathBuf {
    PathBuf::from("color_tables.json")
}

fn default_debug_log() -> PathBuf {
    PathBuf::from("debug.log")
}

impl Config {
    /// Load configuration file (returns default if not found)
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default(path: &Path) -> Result<()> {
        let config = Config::default();
        config.save_to(path)
    }

    /// Path of the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Theme store over the configured paths
    pub fn store(&self) -> ThemeStore {
        ThemeStore::new(&self.settings_file, &self.themes_dir)
    }

    /// Settings accessor for the configured settings file
    pub fn settings(&self) -> JsonSettingsFile {
        JsonSettingsFile::new(&self.settings_file)
    }
}
