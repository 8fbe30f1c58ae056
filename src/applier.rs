//! Theme applier
//!
//! Copies a theme into the host's color tables. Only tokens the destination
//! already has are written. The first failure aborts the apply and leaves any
//! writes that already landed in place; there is no rollback.

use crate::debug;
use crate::error::ThemeError;
use crate::tables::{ColorTableAccess, TableId, Variant};
use crate::theme::{BACKGROUND_PRIMARY, CHAT_BACKGROUND, ColorMap, Theme};

/// Apply a theme to the color tables
///
/// Steps, in order:
/// 1. variant merge, with extra-dark always taking the dark value
/// 2. general colors (`colors`, or legacy `colours`)
/// 3. unsafe colors
/// 4. `CHAT_BACKGROUND` derived from `BACKGROUND_PRIMARY` when not set
pub fn apply_theme(theme: &Theme, tables: &mut dyn ColorTableAccess) -> Result<(), ThemeError> {
    merge_theme_color_map(theme, tables)?;

    if let Some(colors) = theme.general_colors() {
        merge_colors(TableId::Colors, colors, tables)?;
    }

    if let Some(unsafe_colors) = &theme.unsafe_colors {
        merge_colors(TableId::UnsafeColors, unsafe_colors, tables)?;
    }

    derive_chat_background(theme, tables)?;

    debug::log_theme(&theme.name, "applied");
    Ok(())
}

fn merge_theme_color_map(
    theme: &Theme,
    tables: &mut dyn ColorTableAccess,
) -> Result<(), ThemeError> {
    for (token, variants) in &theme.theme_color_map {
        if !tables.has_token(TableId::ThemeColorMap, token) {
            debug::log_table(TableId::ThemeColorMap, token, "skipped, not in host table");
            continue;
        }

        // Baseline so extra-dark is never left unset for a null override
        let own_dark = tables.variant(token, Variant::Dark);
        tables.set_variant(token, Variant::ExtraDark, own_dark)?;

        // A slot the theme leaves out is written as unset
        if let Some(variants) = variants {
            tables.set_variant(token, Variant::ExtraDark, variants.dark.clone())?;
            tables.set_variant(token, Variant::Light, variants.light.clone())?;
            tables.set_variant(token, Variant::Dark, variants.dark.clone())?;
        }
    }
    Ok(())
}

fn merge_colors(
    table: TableId,
    colors: &ColorMap,
    tables: &mut dyn ColorTableAccess,
) -> Result<(), ThemeError> {
    for (token, value) in colors {
        if !tables.has_token(table, token) {
            debug::log_table(table, token, "skipped, not in host table");
            continue;
        }
        tables.set_color(table, token, value.clone())?;
    }
    Ok(())
}

fn derive_chat_background(
    theme: &Theme,
    tables: &mut dyn ColorTableAccess,
) -> Result<(), ThemeError> {
    if theme.variants(CHAT_BACKGROUND).is_some() {
        return Ok(());
    }

    let source = theme
        .variants(BACKGROUND_PRIMARY)
        .ok_or_else(|| ThemeError::MissingDependentToken {
            theme: theme.name.clone(),
            token: BACKGROUND_PRIMARY.to_string(),
            derived: CHAT_BACKGROUND.to_string(),
        })?;

    if !tables.has_token(TableId::ThemeColorMap, CHAT_BACKGROUND) {
        debug::log_table(TableId::ThemeColorMap, CHAT_BACKGROUND, "skipped, not in host table");
        return Ok(());
    }

    tables.set_variant(CHAT_BACKGROUND, Variant::ExtraDark, source.dark.clone())?;
    tables.set_variant(CHAT_BACKGROUND, Variant::Light, source.light.clone())?;
    tables.set_variant(CHAT_BACKGROUND, Variant::Dark, source.dark.clone())?;
    Ok(())
}
