mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use themer::{Config, debug};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    if let Commands::Init { force } = cli.command {
        return commands::run_init(&config_path, force);
    }

    let config = Config::load(&config_path)?;
    debug::init(&config.debug_log);

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Status => commands::run_status(&config),
        Commands::List => commands::run_list(&config),
        Commands::Select { name } => commands::run_select(&config, &name),
        Commands::Clear => commands::run_clear(&config),
        Commands::Apply { tables, output } => commands::run_apply(&config, tables, output),
    }
}
