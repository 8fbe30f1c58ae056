//! Debug logging utilities
//!
//! Provides debug logging that only activates in debug builds.
//! In release builds, every logging call is a no-op. Nothing is written
//! until [`init`] opens a log file, and a failed write never reaches the
//! caller.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::tables::TableId;

static DEBUG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize debug logging (only in debug builds)
#[cfg(debug_assertions)]
pub fn init(path: &Path) {
    let Ok(mut file_guard) = DEBUG_FILE.lock() else {
        return;
    };
    if file_guard.is_none() {
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *file_guard = Some(file);
            drop(file_guard);
            log("=== Debug session started ===");
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn init(_path: &Path) {}

/// Log a message to the debug log (only in debug builds)
#[cfg(debug_assertions)]
pub fn log(message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, message);

    if let Ok(mut file_guard) = DEBUG_FILE.lock() {
        if let Some(ref mut file) = *file_guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn log(_message: &str) {}

/// Log a message with a category prefix
#[cfg(debug_assertions)]
pub fn log_category(category: &str, message: &str) {
    log(&format!("[{}] {}", category, message));
}

#[cfg(not(debug_assertions))]
pub fn log_category(_category: &str, _message: &str) {}

/// Log theme lifecycle events (load, apply, select)
#[cfg(debug_assertions)]
pub fn log_theme(name: &str, event: &str) {
    log(&format!("[THEME:{}] {}", name, event));
}

#[cfg(not(debug_assertions))]
pub fn log_theme(_name: &str, _event: &str) {}

/// Log a table entry the applier did or did not write
#[cfg(debug_assertions)]
pub fn log_table(table: TableId, token: &str, event: &str) {
    log(&format!("[TABLE:{}] {} {}", table, token, event));
}

#[cfg(not(debug_assertions))]
pub fn log_table(_table: TableId, _token: &str, _event: &str) {}
