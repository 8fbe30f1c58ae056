//! Theme engine: startup load-and-apply plus selection
//!
//! [`Themer::init`] is the startup entry point. It runs once, before the host
//! finishes its own initialization, and never lets a failure escape: every
//! error ends up in the returned [`ThemeStatus`].
//!
//! Selection changes after startup only persist the choice and request a
//! restart. They never touch the color tables.

use std::sync::RwLock;

use crate::applier::apply_theme;
use crate::debug;
use crate::dialog::{DialogResult, HostRuntime, RestartPrompt, request_restart};
use crate::error::ThemeError;
use crate::filesystem::{StdFs, ThemeFs};
use crate::registry::ThemeRegistry;
use crate::settings::{SettingsStore, THEME_KEY};
use crate::status::ThemeStatus;
use crate::store::ThemeStore;
use crate::tables::{ColorTableAccess, TableId};
use crate::theme::Theme;

pub struct Themer<F: ThemeFs = StdFs> {
    store: ThemeStore<F>,
    registry: ThemeRegistry,
    status: ThemeStatus,
    initialized: bool,
    loaded: bool,
}

impl<F: ThemeFs> Themer<F> {
    pub fn new(store: ThemeStore<F>) -> Self {
        Self {
            store,
            registry: ThemeRegistry::new(),
            status: ThemeStatus::default(),
            initialized: false,
            loaded: false,
        }
    }

    /// Load themes and apply the persisted selection
    ///
    /// Does nothing when the settings file is absent. Otherwise the three
    /// tables are unfrozen, every theme file is loaded, and the selected
    /// theme (if registered) is applied. Only the first call has any effect.
    pub fn init(&mut self, tables: &mut dyn ColorTableAccess) -> ThemeStatus {
        if self.initialized {
            debug::log_category("INIT", "already initialized, skipping");
            return self.status.clone();
        }
        self.initialized = true;

        if !self.store.settings_exist() {
            debug::log_category(
                "INIT",
                &format!("no settings at {}", self.store.settings_file().display()),
            );
            return self.status.clone();
        }

        for table in TableId::all() {
            tables.unfreeze(*table);
        }

        if let Err(e) = self.load_and_apply(tables) {
            debug::log_category("INIT", &format!("failed: {e}"));
            self.status.record_failure(e);
        }
        self.status.clone()
    }

    fn load_and_apply(&mut self, tables: &mut dyn ColorTableAccess) -> Result<(), ThemeError> {
        let selection = self.store.read_selection()?;
        self.load_themes()?;

        match selection {
            Some(name) if self.registry.contains(&name) => {
                self.registry.set_current(&name)?;
                self.apply(tables);
            }
            Some(name) if !name.is_empty() => {
                debug::log_theme(&name, "selected but not loaded, using built-in colors");
            }
            _ => {}
        }
        Ok(())
    }

    /// Populate the registry from the themes directory
    ///
    /// Only the first call reads the directory, even if it failed part way;
    /// themes registered before the failure stay available.
    pub fn load_themes(&mut self) -> Result<(), ThemeError> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;
        self.store.load_themes(&mut self.registry)
    }

    /// Apply the current theme, recording the outcome
    fn apply(&mut self, tables: &mut dyn ColorTableAccess) {
        let Some(theme) = self.registry.current() else {
            return;
        };

        match apply_theme(theme, tables) {
            Ok(()) => self.status.record_success(),
            Err(e) => {
                debug::log_theme(&theme.name, &format!("apply failed: {e}"));
                self.status.record_failure(e);
            }
        }
    }

    /// Make a loaded theme current and restart to apply it
    pub fn select_theme(
        &mut self,
        name: &str,
        settings: &mut dyn SettingsStore,
        host: &dyn HostRuntime,
    ) -> Result<DialogResult, ThemeError> {
        self.registry.set_current(name)?;
        settings.set(THEME_KEY, name)?;
        debug::log_theme(name, "selected");

        Ok(request_restart(host, &RestartPrompt::theme_selected()))
    }

    /// Fall back to the host's own themes on the next start
    pub fn clear_selection(
        &mut self,
        settings: &mut dyn SettingsStore,
        host: &dyn HostRuntime,
    ) -> Result<DialogResult, ThemeError> {
        clear_selection(settings, host)
    }

    pub fn current_theme(&self) -> Option<&Theme> {
        self.registry.current()
    }

    pub fn status(&self) -> &ThemeStatus {
        &self.status
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ThemeStore<F> {
        &self.store
    }
}

// ==================== Process-wide Engine ====================

/// Engine shared by the whole process, set by [`themer_init`]
static ENGINE: RwLock<Option<Themer>> = RwLock::new(None);

/// Startup entry point for hosts that keep a single engine per process
///
/// The first call loads and applies; later calls return the recorded status
/// without touching the tables.
pub fn themer_init(store: ThemeStore, tables: &mut dyn ColorTableAccess) -> ThemeStatus {
    let mut guard = ENGINE.write().unwrap_or_else(|e| e.into_inner());
    guard
        .get_or_insert_with(|| Themer::new(store))
        .init(tables)
}

/// Get a snapshot of the process-wide status
pub fn theme_status() -> ThemeStatus {
    let guard = ENGINE.read().unwrap_or_else(|e| e.into_inner());
    guard
        .as_ref()
        .map(|engine| engine.status().clone())
        .unwrap_or_default()
}

/// Get a copy of the process-wide current theme
pub fn current_theme() -> Option<Theme> {
    let guard = ENGINE.read().unwrap_or_else(|e| e.into_inner());
    guard.as_ref().and_then(|engine| engine.current_theme().cloned())
}

/// Select a theme on the process-wide engine
pub fn select_theme(
    name: &str,
    settings: &mut dyn SettingsStore,
    host: &dyn HostRuntime,
) -> Result<DialogResult, ThemeError> {
    let mut guard = ENGINE.write().unwrap_or_else(|e| e.into_inner());
    match guard.as_mut() {
        Some(engine) => engine.select_theme(name, settings, host),
        None => Err(ThemeError::UnknownTheme {
            name: name.to_string(),
        }),
    }
}

/// Clear the selection on the process-wide engine
///
/// Works before [`themer_init`] too; it only writes settings.
pub fn clear_selection(
    settings: &mut dyn SettingsStore,
    host: &dyn HostRuntime,
) -> Result<DialogResult, ThemeError> {
    settings.set(THEME_KEY, "")?;
    debug::log_category("SELECT", "using built-in themes");
    Ok(request_restart(host, &RestartPrompt::builtin_themes()))
}

#[cfg(test)]
fn reset_engine() {
    let mut guard = ENGINE.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}
