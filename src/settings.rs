//! Persistent key-value settings
//!
//! The host owns a JSON settings file; the engine only ever touches the
//! `theme` key. Writes go through [`SettingsStore`] so unrelated keys are
//! preserved and tests can swap in a mock.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

#[cfg(test)]
use mockall::automock;

/// Settings key holding the selected theme name
pub const THEME_KEY: &str = "theme";

/// Trait for the host's settings accessor (allows mocking)
#[cfg_attr(test, automock)]
pub trait SettingsStore {
    /// Read a string setting
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a string setting
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Settings stored as a flat JSON object on disk
#[derive(Clone, Debug)]
pub struct JsonSettingsFile {
    path: PathBuf,
}

impl JsonSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole settings object; a missing file is an empty object
    fn read_all(&self) -> Result<Map<String, Value>, ThemeError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ThemeError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| ThemeError::json(&self.path, e))
    }

    fn write_all(&self, settings: &Map<String, Value>) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ThemeError::io(parent, e))?;
            }
        }

        let content =
            serde_json::to_string_pretty(settings).map_err(|e| ThemeError::json(&self.path, e))?;
        fs::write(&self.path, content).map_err(|e| ThemeError::io(&self.path, e))
    }
}

impl SettingsStore for JsonSettingsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all()
            .ok()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut settings = self.read_all()?;
        settings.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&settings)
    }
}
