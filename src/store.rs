//! Theme store
//!
//! Reads the settings file and the themes directory. Parsing and validation
//! only; nothing here touches the host's color tables.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::error::ThemeError;
use crate::filesystem::{StdFs, ThemeFs};
use crate::registry::ThemeRegistry;
use crate::settings::THEME_KEY;
use crate::theme::Theme;

/// Extension of the files loaded from the themes directory
const THEME_FILE_EXTENSION: &str = ".json";

pub struct ThemeStore<F: ThemeFs = StdFs> {
    fs: F,
    settings_file: PathBuf,
    themes_dir: PathBuf,
}

impl ThemeStore<StdFs> {
    /// Create a store over the real filesystem
    pub fn new(settings_file: impl Into<PathBuf>, themes_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(StdFs, settings_file, themes_dir)
    }
}

impl<F: ThemeFs> ThemeStore<F> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(fs: F, settings_file: impl Into<PathBuf>, themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            settings_file: settings_file.into(),
            themes_dir: themes_dir.into(),
        }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// Theming is opt-in: without a settings file nothing is loaded
    pub fn settings_exist(&self) -> bool {
        self.fs.exists(&self.settings_file)
    }

    /// Read the persisted theme name from the settings file
    ///
    /// A missing or non-string `theme` field yields `None`.
    pub fn read_selection(&self) -> Result<Option<String>, ThemeError> {
        let contents = self
            .fs
            .read_to_string(&self.settings_file)
            .map_err(|e| ThemeError::io(&self.settings_file, e))?;
        let settings: Value =
            serde_json::from_str(&contents).map_err(|e| ThemeError::json(&self.settings_file, e))?;

        Ok(settings
            .get(THEME_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Parse every `*.json` file in the themes directory into the registry
    ///
    /// Stops at the first invalid file. Themes registered before the failure
    /// stay in the registry.
    pub fn load_themes(&self, registry: &mut ThemeRegistry) -> Result<(), ThemeError> {
        let files = self
            .fs
            .read_dir(&self.themes_dir)
            .map_err(|e| ThemeError::io(&self.themes_dir, e))?;

        for file_name in files {
            if !file_name.ends_with(THEME_FILE_EXTENSION) {
                continue;
            }

            let path = self.themes_dir.join(&file_name);
            let contents = self
                .fs
                .read_to_string(&path)
                .map_err(|e| ThemeError::io(&path, e))?;

            let theme = Theme::parse(&file_name, &contents)?;
            debug::log_theme(&theme.name, &format!("loaded from {file_name}"));
            registry.insert(theme)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MockThemeFs;
    use std::fs;
    use std::io;

    const NORD: &str = r##"{
        "name": "Nord",
        "theme_color_map": { "BACKGROUND_PRIMARY": ["#2e3440", "#eceff4"] },
        "colors": {}
    }"##;

    const DRACULA: &str = r##"{
        "name": "Dracula",
        "theme_color_map": { "BACKGROUND_PRIMARY": { "dark": "#282a36", "light": "#f8f8f2" } },
        "colours": { "BRAND_500": "#bd93f9" }
    }"##;

    fn store_in(dir: &Path) -> ThemeStore {
        ThemeStore::new(dir.join("settings/Themer.json"), dir.join("themes"))
    }

    fn write_theme(dir: &Path, file: &str, contents: &str) {
        fs::create_dir_all(dir.join("themes")).unwrap();
        fs::write(dir.join("themes").join(file), contents).unwrap();
    }

    fn write_settings(dir: &Path, contents: &str) {
        fs::create_dir_all(dir.join("settings")).unwrap();
        fs::write(dir.join("settings/Themer.json"), contents).unwrap();
    }

    #[test]
    fn test_settings_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!store_in(dir.path()).settings_exist());
    }

    #[test]
    fn test_read_selection() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), r#"{"theme": "Nord", "developerMode": true}"#);

        let store = store_in(dir.path());
        assert!(store.settings_exist());
        assert_eq!(store.read_selection().unwrap(), Some("Nord".to_string()));
    }

    #[test]
    fn test_read_selection_without_theme_key() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), r#"{"theme": 3}"#);
        assert_eq!(store_in(dir.path()).read_selection().unwrap(), None);

        write_settings(dir.path(), "{}");
        assert_eq!(store_in(dir.path()).read_selection().unwrap(), None);
    }

    #[test]
    fn test_read_selection_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "{ theme: ");

        let err = store_in(dir.path()).read_selection().unwrap_err();
        assert!(matches!(err, ThemeError::Json { .. }));
    }

    #[test]
    fn test_load_themes_ignores_non_json() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "nord.json", NORD);
        write_theme(dir.path(), "dracula.json", DRACULA);
        write_theme(dir.path(), "README.md", "# not a theme");
        write_theme(dir.path(), "nord.json.bak", "garbage");

        let mut registry = ThemeRegistry::new();
        store_in(dir.path()).load_themes(&mut registry).unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Dracula", "Nord"]);
        assert!(registry.get("Dracula").unwrap().uses_legacy_colours());
    }

    #[test]
    fn test_duplicate_theme_keeps_earlier_themes() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "a.json", NORD);
        write_theme(dir.path(), "b.json", NORD);

        let mut registry = ThemeRegistry::new();
        let err = store_in(dir.path()).load_themes(&mut registry).unwrap_err();

        assert!(matches!(err, ThemeError::DuplicateTheme { ref name } if name == "Nord"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_malformed_theme_names_file() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "broken.json", r#"{"name": "Broken"}"#);

        let mut registry = ThemeRegistry::new();
        let err = store_in(dir.path()).load_themes(&mut registry).unwrap_err();

        assert!(matches!(err, ThemeError::MalformedTheme { ref file } if file == "broken.json"));
    }

    #[test]
    fn test_missing_themes_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ThemeRegistry::new();

        let err = store_in(dir.path()).load_themes(&mut registry).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn test_load_through_mock_fs() {
        let mut fs = MockThemeFs::new();
        fs.expect_read_dir()
            .returning(|_| Ok(vec!["nord.json".to_string(), "notes.txt".to_string()]));
        fs.expect_read_to_string()
            .withf(|path: &Path| path.ends_with("nord.json"))
            .times(1)
            .returning(|_| Ok(NORD.to_string()));

        let store = ThemeStore::with_fs(fs, "/settings.json", "/themes");
        let mut registry = ThemeRegistry::new();
        store.load_themes(&mut registry).unwrap();

        assert!(registry.contains("Nord"));
    }

    #[test]
    fn test_unreadable_theme_file() {
        let mut fs = MockThemeFs::new();
        fs.expect_read_dir()
            .returning(|_| Ok(vec!["locked.json".to_string()]));
        fs.expect_read_to_string()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let store = ThemeStore::with_fs(fs, "/settings.json", "/themes");
        let mut registry = ThemeRegistry::new();
        let err = store.load_themes(&mut registry).unwrap_err();

        assert!(matches!(err, ThemeError::Io { ref path, .. } if path.ends_with("locked.json")));
    }
}
