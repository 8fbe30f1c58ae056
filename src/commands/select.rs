//! Select and clear command implementations

use anyhow::{Context, Result};
use themer::{Config, DialogResult, TerminalHost, Themer};

/// Run the select command
pub fn run_select(config: &Config, name: &str) -> Result<()> {
    let mut themer = Themer::new(config.store());
    themer
        .load_themes()
        .with_context(|| format!("Failed to load themes from {}", config.themes_dir.display()))?;

    let mut settings = config.settings();
    let result = themer
        .select_theme(name, &mut settings, &TerminalHost)
        .with_context(|| format!("Failed to select theme: {name}"))?;

    println!("Selected theme: {name}");
    report(result);
    Ok(())
}

/// Run the clear command
pub fn run_clear(config: &Config) -> Result<()> {
    let mut settings = config.settings();
    let result = themer::clear_selection(&mut settings, &TerminalHost)
        .context("Failed to clear theme selection")?;

    println!("Using built-in colors");
    report(result);
    Ok(())
}

fn report(result: DialogResult) {
    if result != DialogResult::Confirm {
        println!("Restart pending; the change applies on the next start.");
    }
}
