//! List command implementation

use anyhow::{Context, Result};
use themer::{Config, SettingsStore, ThemeRegistry, settings::THEME_KEY};

/// Run the list command
pub fn run_list(config: &Config) -> Result<()> {
    let mut registry = ThemeRegistry::new();
    config
        .store()
        .load_themes(&mut registry)
        .with_context(|| format!("Failed to load themes from {}", config.themes_dir.display()))?;

    if registry.is_empty() {
        println!("No themes in {}", config.themes_dir.display());
        return Ok(());
    }

    let selected = config.settings().get(THEME_KEY).unwrap_or_default();
    for theme in registry.themes() {
        let marker = if theme.name == selected { "*" } else { " " };
        let legacy = if theme.uses_legacy_colours() { " (colours)" } else { "" };
        println!(
            "{marker} {} - {} tokens{legacy}",
            theme.name,
            theme.theme_color_map.len()
        );
    }

    Ok(())
}
