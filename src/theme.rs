//! Theme definitions for themer
//!
//! A theme file is a JSON document with a `name`, a `theme_color_map` of
//! per-token dark/light overrides, a `colors` map (or the legacy `colours`
//! spelling) and an optional `unsafe_colors` map. [`Theme::parse`] turns one
//! file into a validated [`Theme`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ThemeError;

/// Token whose variants are derived when a theme does not set it
pub const CHAT_BACKGROUND: &str = "CHAT_BACKGROUND";

/// Token `CHAT_BACKGROUND` is derived from
pub const BACKGROUND_PRIMARY: &str = "BACKGROUND_PRIMARY";

/// Token to single color value
pub type ColorMap = BTreeMap<String, String>;

// ==================== ColorVariants ====================

/// Authored dark/light pair for one token
///
/// Accepts `{"dark": .., "light": ..}` or the host's positional
/// `[dark, light]` form. Either slot may be left out for a partial override;
/// a missing slot is written as unset. A third positional slot is ignored:
/// the extra-dark variant is always derived from `dark`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AuthoredVariants")]
pub struct ColorVariants {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

impl ColorVariants {
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            dark: Some(dark.into()),
            light: Some(light.into()),
        }
    }

    /// Override only the dark variant
    pub fn dark_only(dark: impl Into<String>) -> Self {
        Self {
            dark: Some(dark.into()),
            light: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthoredVariants {
    Slots(Vec<Option<String>>),
    Named {
        #[serde(default)]
        dark: Option<String>,
        #[serde(default)]
        light: Option<String>,
    },
}

impl From<AuthoredVariants> for ColorVariants {
    fn from(authored: AuthoredVariants) -> Self {
        match authored {
            AuthoredVariants::Named { dark, light } => Self { dark, light },
            AuthoredVariants::Slots(slots) => {
                let mut slots = slots.into_iter();
                Self {
                    dark: slots.next().flatten(),
                    light: slots.next().flatten(),
                }
            }
        }
    }
}

// ==================== Theme ====================

/// A validated theme
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    /// `null` entries are kept; they still reset the extra-dark slot on apply
    pub theme_color_map: BTreeMap<String, Option<ColorVariants>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colours: Option<ColorMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_colors: Option<ColorMap>,
}

/// On-disk shape before validation; every key is optional
#[derive(Deserialize)]
struct ThemeFile {
    name: Option<String>,
    theme_color_map: Option<BTreeMap<String, Option<ColorVariants>>>,
    colors: Option<ColorMap>,
    colours: Option<ColorMap>,
    unsafe_colors: Option<ColorMap>,
}

impl Theme {
    /// Parse and validate the contents of one theme file
    ///
    /// `file_name` is only used for error reporting.
    pub fn parse(file_name: &str, contents: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile =
            serde_json::from_str(contents).map_err(|e| ThemeError::json(file_name, e))?;

        let malformed = || ThemeError::MalformedTheme {
            file: file_name.to_string(),
        };

        let name = file.name.filter(|name| !name.is_empty()).ok_or_else(malformed)?;
        let theme_color_map = file.theme_color_map.ok_or_else(malformed)?;
        if file.colors.is_none() && file.colours.is_none() {
            return Err(malformed());
        }

        Ok(Self {
            name,
            theme_color_map,
            colors: file.colors,
            colours: file.colours,
            unsafe_colors: file.unsafe_colors,
        })
    }

    /// Get the non-null override for a token
    pub fn variants(&self, token: &str) -> Option<&ColorVariants> {
        self.theme_color_map.get(token).and_then(Option::as_ref)
    }

    /// Get the general color map that apply merges
    ///
    /// `colors` wins only when `colours` is absent; otherwise the legacy
    /// `colours` map is used. The two are never combined.
    pub fn general_colors(&self) -> Option<&ColorMap> {
        match (&self.colors, &self.colours) {
            (Some(colors), None) => Some(colors),
            (_, colours) => colours.as_ref(),
        }
    }

    /// Whether apply will read the legacy `colours` spelling
    pub fn uses_legacy_colours(&self) -> bool {
        self.colours.is_some()
    }
}
