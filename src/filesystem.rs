//! Filesystem access used by the theme store
//!
//! The store only needs three operations, so it reads through [`ThemeFs`]
//! instead of `std::fs` directly. [`StdFs`] is the real implementation.

use std::fs;
use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait for the filesystem operations the store performs (allows mocking)
#[cfg_attr(test, automock)]
pub trait ThemeFs {
    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the file names (not paths) of the regular files in a directory,
    /// including symlinks that resolve to one
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Real filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFs;

impl ThemeFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Follows symlinks; dangling links are skipped
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
