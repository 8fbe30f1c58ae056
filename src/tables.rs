//! Runtime color tables owned by the host
//!
//! The host keeps three token-indexed tables that are frozen against mutation
//! until the engine unfreezes them. [`ColorTableAccess`] is the seam the
//! applier writes through; [`ColorTables`] is the in-memory implementation
//! used by the CLI and in tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::error::ThemeError;

#[cfg(test)]
use mockall::automock;

// ==================== Identifiers ====================

/// One of the three host tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Per-token dark/light/extra-dark variants
    ThemeColorMap,
    /// General single-value colors
    Colors,
    /// Single-value colors the host considers unsafe to theme
    UnsafeColors,
}

impl TableId {
    /// Get all tables, in unfreeze order
    pub fn all() -> &'static [TableId] {
        &[TableId::ThemeColorMap, TableId::Colors, TableId::UnsafeColors]
    }

    /// Get the host's name for this table
    pub fn name(&self) -> &'static str {
        match self {
            TableId::ThemeColorMap => "ThemeColorMap",
            TableId::Colors => "Colors",
            TableId::UnsafeColors => "UNSAFE_Colors",
        }
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rendering mode of a themed token
///
/// Slot order matches the host: dark = 0, light = 1, extra-dark = 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Dark,
    Light,
    ExtraDark,
}

// ==================== VariantSlots ====================

/// Destination entry of the variant table
///
/// Serialized as the host's positional array `[dark, light, extra_dark]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<String>>", into = "Vec<Option<String>>")]
pub struct VariantSlots {
    pub dark: Option<String>,
    pub light: Option<String>,
    pub extra_dark: Option<String>,
}

impl VariantSlots {
    /// Create slots with a dark and light value and no extra-dark value
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            dark: Some(dark.into()),
            light: Some(light.into()),
            extra_dark: None,
        }
    }

    pub fn get(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Dark => self.dark.as_deref(),
            Variant::Light => self.light.as_deref(),
            Variant::ExtraDark => self.extra_dark.as_deref(),
        }
    }

    pub fn set(&mut self, variant: Variant, value: Option<String>) {
        match variant {
            Variant::Dark => self.dark = value,
            Variant::Light => self.light = value,
            Variant::ExtraDark => self.extra_dark = value,
        }
    }
}

impl From<Vec<Option<String>>> for VariantSlots {
    fn from(slots: Vec<Option<String>>) -> Self {
        let mut slots = slots.into_iter();
        Self {
            dark: slots.next().flatten(),
            light: slots.next().flatten(),
            extra_dark: slots.next().flatten(),
        }
    }
}

impl From<VariantSlots> for Vec<Option<String>> {
    fn from(slots: VariantSlots) -> Self {
        vec![slots.dark, slots.light, slots.extra_dark]
    }
}

// ==================== Table access ====================

/// Capability to read and mutate the host's color tables
///
/// Writes are only valid after [`ColorTableAccess::unfreeze`] has been called
/// for the table in question.
#[cfg_attr(test, automock)]
pub trait ColorTableAccess {
    /// Lift the immutability guard on a table
    fn unfreeze(&mut self, table: TableId);

    /// Check whether a table already has an entry for a token
    fn has_token(&self, table: TableId, token: &str) -> bool;

    /// Read one variant of a variant-table entry
    fn variant(&self, token: &str, variant: Variant) -> Option<String>;

    /// Overwrite one variant of a variant-table entry
    fn set_variant(
        &mut self,
        token: &str,
        variant: Variant,
        value: Option<String>,
    ) -> Result<(), ThemeError>;

    /// Overwrite a single-value entry of [`TableId::Colors`] or [`TableId::UnsafeColors`]
    fn set_color(&mut self, table: TableId, token: &str, value: String) -> Result<(), ThemeError>;
}

/// In-memory color tables, laid out like the host's
///
/// All three tables start frozen. Writes to tokens the table does not already
/// hold are dropped, so the token set never grows.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ColorTables {
    #[serde(rename = "ThemeColorMap", default)]
    pub theme_color_map: BTreeMap<String, VariantSlots>,

    #[serde(rename = "Colors", default)]
    pub colors: BTreeMap<String, String>,

    #[serde(rename = "UNSAFE_Colors", default)]
    pub unsafe_colors: BTreeMap<String, String>,

    #[serde(skip)]
    unfrozen: Vec<TableId>,
}

impl ColorTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a table has been unfrozen
    pub fn is_frozen(&self, table: TableId) -> bool {
        !self.unfrozen.contains(&table)
    }

    fn ensure_unfrozen(&self, table: TableId) -> Result<(), ThemeError> {
        if self.is_frozen(table) {
            return Err(ThemeError::TableFrozen { table });
        }
        Ok(())
    }

    fn single_value_table(
        &mut self,
        table: TableId,
    ) -> Result<&mut BTreeMap<String, String>, ThemeError> {
        match table {
            TableId::Colors => Ok(&mut self.colors),
            TableId::UnsafeColors => Ok(&mut self.unsafe_colors),
            TableId::ThemeColorMap => Err(ThemeError::NotSingleValueTable { table }),
        }
    }
}

impl PartialEq for ColorTables {
    fn eq(&self, other: &Self) -> bool {
        self.theme_color_map == other.theme_color_map
            && self.colors == other.colors
            && self.unsafe_colors == other.unsafe_colors
    }
}

impl ColorTableAccess for ColorTables {
    fn unfreeze(&mut self, table: TableId) {
        if self.is_frozen(table) {
            self.unfrozen.push(table);
        }
    }

    fn has_token(&self, table: TableId, token: &str) -> bool {
        match table {
            TableId::ThemeColorMap => self.theme_color_map.contains_key(token),
            TableId::Colors => self.colors.contains_key(token),
            TableId::UnsafeColors => self.unsafe_colors.contains_key(token),
        }
    }

    fn variant(&self, token: &str, variant: Variant) -> Option<String> {
        self.theme_color_map
            .get(token)
            .and_then(|slots| slots.get(variant))
            .map(str::to_string)
    }

    fn set_variant(
        &mut self,
        token: &str,
        variant: Variant,
        value: Option<String>,
    ) -> Result<(), ThemeError> {
        self.ensure_unfrozen(TableId::ThemeColorMap)?;
        if let Some(slots) = self.theme_color_map.get_mut(token) {
            slots.set(variant, value);
        }
        Ok(())
    }

    fn set_color(&mut self, table: TableId, token: &str, value: String) -> Result<(), ThemeError> {
        self.ensure_unfrozen(table)?;
        if let Some(slot) = self.single_value_table(table)?.get_mut(token) {
            *slot = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> ColorTables {
        let mut tables = ColorTables::new();
        tables
            .theme_color_map
            .insert("BACKGROUND_PRIMARY".to_string(), VariantSlots::new("#36393f", "#ffffff"));
        tables
            .colors
            .insert("BRAND_500".to_string(), "#5865f2".to_string());
        tables
            .unsafe_colors
            .insert("PRIMARY_DARK_600".to_string(), "#36393f".to_string());
        tables
    }

    #[test]
    fn test_tables_start_frozen() {
        let mut tables = sample_tables();
        for table in TableId::all() {
            assert!(tables.is_frozen(*table));
        }

        let result = tables.set_color(TableId::Colors, "BRAND_500", "#000000".to_string());
        assert!(matches!(
            result,
            Err(ThemeError::TableFrozen {
                table: TableId::Colors
            })
        ));
        assert_eq!(tables.colors["BRAND_500"], "#5865f2");
    }

    #[test]
    fn test_unfreeze_is_per_table() {
        let mut tables = sample_tables();
        tables.unfreeze(TableId::Colors);

        assert!(tables
            .set_color(TableId::Colors, "BRAND_500", "#000000".to_string())
            .is_ok());
        assert!(tables
            .set_color(TableId::UnsafeColors, "PRIMARY_DARK_600", "#000000".to_string())
            .is_err());
        assert_eq!(tables.colors["BRAND_500"], "#000000");
        assert_eq!(tables.unsafe_colors["PRIMARY_DARK_600"], "#36393f");
    }

    #[test]
    fn test_unknown_tokens_are_not_inserted() {
        let mut tables = sample_tables();
        for table in TableId::all() {
            tables.unfreeze(*table);
        }

        tables
            .set_variant("NOT_A_TOKEN", Variant::Dark, Some("#123456".to_string()))
            .unwrap();
        tables
            .set_color(TableId::Colors, "NOT_A_TOKEN", "#123456".to_string())
            .unwrap();

        assert!(!tables.has_token(TableId::ThemeColorMap, "NOT_A_TOKEN"));
        assert!(!tables.has_token(TableId::Colors, "NOT_A_TOKEN"));
        assert_eq!(tables, sample_tables());
    }

    #[test]
    fn test_variant_read_write() {
        let mut tables = sample_tables();
        tables.unfreeze(TableId::ThemeColorMap);

        assert_eq!(
            tables.variant("BACKGROUND_PRIMARY", Variant::Dark),
            Some("#36393f".to_string())
        );
        assert_eq!(tables.variant("BACKGROUND_PRIMARY", Variant::ExtraDark), None);

        tables
            .set_variant("BACKGROUND_PRIMARY", Variant::ExtraDark, Some("#000000".to_string()))
            .unwrap();
        assert_eq!(
            tables.variant("BACKGROUND_PRIMARY", Variant::ExtraDark),
            Some("#000000".to_string())
        );
    }

    #[test]
    fn test_tables_json_layout() {
        let json = r##"{
            "ThemeColorMap": { "HEADER_PRIMARY": ["#fff", "#060607", "#fff"], "TEXT_MUTED": ["#72767d", "#747f8d"] },
            "Colors": { "WHITE": "#ffffff" },
            "UNSAFE_Colors": {}
        }"##;

        let tables: ColorTables = serde_json::from_str(json).unwrap();
        let header = &tables.theme_color_map["HEADER_PRIMARY"];
        assert_eq!(header.get(Variant::Light), Some("#060607"));
        assert_eq!(header.get(Variant::ExtraDark), Some("#fff"));
        assert_eq!(tables.theme_color_map["TEXT_MUTED"].extra_dark, None);
        assert_eq!(tables.colors["WHITE"], "#ffffff");

        let written = serde_json::to_value(&tables).unwrap();
        assert_eq!(
            written["ThemeColorMap"]["TEXT_MUTED"],
            serde_json::json!(["#72767d", "#747f8d", null])
        );
    }

    #[test]
    fn test_set_color_rejects_variant_table() {
        let mut tables = sample_tables();
        for table in TableId::all() {
            tables.unfreeze(*table);
        }

        let result = tables.set_color(TableId::ThemeColorMap, "BRAND_500", "#000000".to_string());

        assert!(matches!(
            result,
            Err(ThemeError::NotSingleValueTable {
                table: TableId::ThemeColorMap
            })
        ));
        assert_eq!(tables, sample_tables());
    }

    #[test]
    fn test_set_color_checks_freeze_of_target_table() {
        let mut tables = sample_tables();
        tables.unfreeze(TableId::Colors);

        let result =
            tables.set_color(TableId::UnsafeColors, "PRIMARY_DARK_600", "#000000".to_string());

        assert!(matches!(
            result,
            Err(ThemeError::TableFrozen {
                table: TableId::UnsafeColors
            })
        ));
    }
}
