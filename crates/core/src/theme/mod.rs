//! Named color themes.
//!
//! Every theme assigns a hex color to the same nine semantic roles so scenes
//! can switch palettes without touching their drawing code. The registry is
//! static data; [`get_theme`] hands out owned copies.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::PresetKind, Result, StudioError};

/// Semantic color roles shared by all themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    #[serde(rename = "bg")]
    Background,
    Primary,
    Secondary,
    Accent,
    Highlight,
    Text,
    Muted,
    Success,
    Error,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Background,
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Highlight,
        ColorRole::Text,
        ColorRole::Muted,
        ColorRole::Success,
        ColorRole::Error,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Background => "bg",
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Highlight => "highlight",
            ColorRole::Text => "text",
            ColorRole::Muted => "muted",
            ColorRole::Success => "success",
            ColorRole::Error => "error",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| StudioError::InvalidArgument(format!("unknown color role `{s}`")))
    }
}

/// A full palette. Owned, so callers may tweak their copy freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub bg: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub highlight: String,
    pub text: String,
    pub muted: String,
    pub success: String,
    pub error: String,
}

impl Theme {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Background => &self.bg,
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Highlight => &self.highlight,
            ColorRole::Text => &self.text,
            ColorRole::Muted => &self.muted,
            ColorRole::Success => &self.success,
            ColorRole::Error => &self.error,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: impl Into<String>) {
        let slot = match role {
            ColorRole::Background => &mut self.bg,
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Highlight => &mut self.highlight,
            ColorRole::Text => &mut self.text,
            ColorRole::Muted => &mut self.muted,
            ColorRole::Success => &mut self.success,
            ColorRole::Error => &mut self.error,
        };
        *slot = color.into();
    }

    /// Role key (`bg`, `primary`, ...) to color.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        ColorRole::ALL
            .into_iter()
            .map(|role| (role.key().to_string(), self.get(role).to_string()))
            .collect()
    }
}

struct ThemeEntry {
    name: &'static str,
    colors: [&'static str; 9],
}

impl ThemeEntry {
    fn to_theme(&self) -> Theme {
        let [bg, primary, secondary, accent, highlight, text, muted, success, error] =
            self.colors.map(str::to_string);
        Theme {
            bg,
            primary,
            secondary,
            accent,
            highlight,
            text,
            muted,
            success,
            error,
        }
    }
}

// Column order follows `ColorRole::ALL`.
static THEMES: &[ThemeEntry] = &[
    ThemeEntry {
        name: "dark_swiss",
        colors: [
            "#1a1a2e", "#e63946", "#457b9d", "#f4a261", "#f4a261", "#edf2f4", "#8d99ae",
            "#2a9d8f", "#e63946",
        ],
    },
    ThemeEntry {
        name: "3b1b_classic",
        colors: [
            "#1c1c1c", "#58C4DD", "#83C167", "#FFFF00", "#FF8C00", "#FFFFFF", "#888888",
            "#83C167", "#FC6255",
        ],
    },
    ThemeEntry {
        name: "light",
        colors: [
            "#fafafa", "#2d3436", "#0984e3", "#fdcb6e", "#e17055", "#2d3436", "#b2bec3",
            "#00b894", "#d63031",
        ],
    },
    ThemeEntry {
        name: "nord",
        colors: [
            "#2e3440", "#88c0d0", "#81a1c1", "#ebcb8b", "#d08770", "#eceff4", "#4c566a",
            "#a3be8c", "#bf616a",
        ],
    },
];

/// Registered theme names in sorted order.
pub fn theme_names() -> Vec<&'static str> {
    let mut names: Vec<_> = THEMES.iter().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}

/// Looks up a theme by exact name.
pub fn get_theme(name: &str) -> Result<Theme> {
    match THEMES.iter().find(|entry| entry.name == name) {
        Some(entry) => {
            tracing::debug!(name, "loaded theme");
            Ok(entry.to_theme())
        }
        None => Err(StudioError::unknown_preset(
            PresetKind::Theme,
            name,
            theme_names(),
        )),
    }
}
