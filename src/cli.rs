//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "themer")]
#[command(author, version, about = "Load JSON themes and apply them to a host's color tables")]
pub struct Cli {
    /// Configuration file (default: .themer.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default configuration and the themes directory
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Show configured paths, the selected theme and load errors
    Status,
    /// List loaded themes
    List,
    /// Select a theme; takes effect after restart
    Select {
        /// Theme name as declared in its file
        name: String,
    },
    /// Clear the selection and use the built-in colors
    Clear,
    /// Load and apply the selected theme to a color table file
    Apply {
        /// Color table JSON (default: tables_file from the configuration)
        #[arg(short, long)]
        tables: Option<PathBuf>,
        /// Where to write the themed tables (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
