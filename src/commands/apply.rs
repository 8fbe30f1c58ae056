//! Apply command implementation
//!
//! Runs the startup entry point against a color table snapshot, the way a
//! host would run it against its live tables.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;
use themer::{ColorTables, Config, theme_status};

/// Run the apply command
pub fn run_apply(config: &Config, tables: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let tables_path = tables.unwrap_or_else(|| config.tables_file.clone());

    let content = fs::read_to_string(&tables_path)
        .with_context(|| format!("Failed to read color tables: {}", tables_path.display()))?;
    let mut tables: ColorTables = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse color tables: {}", tables_path.display()))?;

    let status = themer::themer_init(config.store(), &mut tables);
    let current = themer::current_theme();

    eprintln!(
        "Theme: {}",
        current.as_ref().map(|t| t.name.as_str()).unwrap_or("(built-in colors)")
    );
    eprintln!("Status: {status}");

    let themed = serde_json::to_string_pretty(&tables).context("Failed to serialize color tables")?;
    match output {
        Some(path) => {
            fs::write(&path, themed)
                .with_context(|| format!("Failed to write color tables: {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{themed}"),
    }

    if theme_status().applied() == Some(false) {
        bail!("Theme was not applied");
    }
    Ok(())
}
