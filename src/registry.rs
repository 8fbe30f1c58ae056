//! In-process theme registry
//!
//! Maps theme names to loaded themes and tracks which one is current. It is
//! filled once at startup by the store; there is no removal API.

use std::collections::BTreeMap;

use crate::error::ThemeError;
use crate::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
    current: Option<String>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme, rejecting a name that is already taken
    pub fn insert(&mut self, theme: Theme) -> Result<(), ThemeError> {
        if self.themes.contains_key(&theme.name) {
            return Err(ThemeError::DuplicateTheme { name: theme.name });
        }
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Get the currently selected theme
    pub fn current(&self) -> Option<&Theme> {
        self.current.as_deref().and_then(|name| self.themes.get(name))
    }

    /// Point the current reference at a registered theme
    ///
    /// An unknown name leaves the current reference untouched.
    pub fn set_current(&mut self, name: &str) -> Result<&Theme, ThemeError> {
        match self.themes.get(name) {
            Some(theme) => {
                self.current = Some(theme.name.clone());
                Ok(theme)
            }
            None => Err(ThemeError::UnknownTheme {
                name: name.to_string(),
            }),
        }
    }

    /// Theme names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
