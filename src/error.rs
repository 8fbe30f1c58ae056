//! Error taxonomy for theme loading and application

use std::path::PathBuf;
use thiserror::Error;

use crate::tables::TableId;

/// Everything that can go wrong while loading, applying or selecting a theme
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme file is missing one of its required keys
    #[error("Theme file {file} does not contain a name, theme_color_map or colors key.")]
    MalformedTheme { file: String },

    /// Two theme files declare the same name
    #[error("A theme called {name} already exists.")]
    DuplicateTheme { name: String },

    /// A derived token has no source entry in the theme
    #[error("Theme {theme} has no {token} entry to derive {derived} from.")]
    MissingDependentToken {
        theme: String,
        token: String,
        derived: String,
    },

    /// Selection named a theme that was never loaded
    #[error("No theme called {name} is loaded.")]
    UnknownTheme { name: String },

    /// A write reached a table that was never unfrozen
    #[error("Color table {table} is frozen")]
    TableFrozen { table: TableId },

    /// A single-value write was aimed at the variant table
    #[error("Color table {table} does not hold single color values")]
    NotSingleValueTable { table: TableId },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
