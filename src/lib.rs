//! themer - startup theme engine
//!
//! Loads JSON theme files, picks the one named in the host's settings and
//! rewrites the host's color tables before the host finishes starting up.
//!
//! # Modules
//!
//! - [`theme`] - Theme file format and validation
//! - [`store`] - Reading settings and theme files
//! - [`registry`] - Loaded themes and the current selection
//! - [`tables`] - Host color tables and the access trait
//! - [`applier`] - Merging a theme into the color tables
//! - [`engine`] - Startup entry point, selection and status
//! - [`dialog`] - Restart prompt and host runtime hooks

pub mod applier;
pub mod config;
pub mod debug;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod registry;
pub mod settings;
pub mod status;
pub mod store;
pub mod tables;
pub mod theme;

// Re-export commonly used types
pub use applier::apply_theme;
pub use config::Config;
pub use dialog::{DialogResult, HostRuntime, RestartPrompt, TerminalHost};
pub use engine::{Themer, clear_selection, current_theme, select_theme, theme_status, themer_init};
pub use error::ThemeError;
pub use filesystem::{StdFs, ThemeFs};
pub use registry::ThemeRegistry;
pub use settings::{JsonSettingsFile, SettingsStore};
pub use status::ThemeStatus;
pub use store::ThemeStore;
pub use tables::{ColorTableAccess, ColorTables, TableId, Variant, VariantSlots};
pub use theme::{ColorVariants, Theme};
