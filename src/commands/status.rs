//! Status command implementation

use anyhow::Result;
use themer::{Config, SettingsStore, ThemeRegistry, settings::THEME_KEY};

/// Run the status command
pub fn run_status(config: &Config) -> Result<()> {
    println!("themer Status\n");

    let store = config.store();

    print!("⚙️  Settings file: {} ", config.settings_file.display());
    if store.settings_exist() {
        println!("✅ Found");
    } else {
        println!("⚠️  Missing (theming disabled)");
    }

    print!("📁 Themes directory: {} ", config.themes_dir.display());
    if config.themes_dir.exists() {
        println!("✅ Exists");
    } else {
        println!("❌ Missing");
    }

    match config.settings().get(THEME_KEY).filter(|name| !name.is_empty()) {
        Some(name) => println!("🎨 Selected theme: {name}"),
        None => println!("🎨 Selected theme: (built-in colors)"),
    }

    let mut registry = ThemeRegistry::new();
    match store.load_themes(&mut registry) {
        Ok(()) => println!("📄 Themes loaded: {}", registry.len()),
        Err(e) => {
            println!("❌ Themes failed to load after {}: {e}", registry.len());
            if let Some(source) = std::error::Error::source(&e) {
                println!("   caused by: {source}");
            }
        }
    }

    Ok(())
}
