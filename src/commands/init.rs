//! Init command implementation

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use themer::Config;

/// Run the init command
pub fn run_init(config_path: &Path, force: bool) -> Result<()> {
    println!("Initializing themer...\n");

    // 1. Create configuration file if not exists
    if !config_path.exists() || force {
        Config::generate_default(config_path)?;
        println!("✅ Created configuration: {}", config_path.display());
    } else {
        println!(
            "📄 Configuration file already exists (use --force to overwrite): {}",
            config_path.display()
        );
    }

    let config = Config::load_from(config_path)?;

    // 2. Create themes directory
    if !config.themes_dir.exists() {
        fs::create_dir_all(&config.themes_dir).with_context(|| {
            format!("Failed to create themes directory: {}", config.themes_dir.display())
        })?;
        println!("✅ Created {}/ directory", config.themes_dir.display());
    } else {
        println!("📁 {}/ directory already exists", config.themes_dir.display());
    }

    // 3. Create settings directory; the settings file itself opts in to theming
    if let Some(parent) = config.settings_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
            println!("✅ Created {}/ directory", parent.display());
        }
    }

    println!();
    println!("Drop theme files into {} and run 'themer select <name>'.", config.themes_dir.display());

    Ok(())
}
