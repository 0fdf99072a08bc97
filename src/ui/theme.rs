//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are embedded TOML files; custom themes are loaded from disk
//! in the same format. Entry accent colors come from the catalog, not the
//! theme.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! # header_bg = "#1e1e2e"    (optional)
//! subtitle_fg = "#a6adc8"
//! text_normal = "#bac2de"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! nav_fg = "#7f849c"
//! nav_selected_fg = "#cdd6f4"
//! nav_selected_bg = "#313244"
//! focus_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{FolioError, Result};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings for every themed element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Section heading.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Line under the heading.
    pub subtitle_fg: String,

    /// Body text of detail bullets.
    pub text_normal: String,
    /// Footer, separators, secondary info.
    pub text_dim: String,
    pub border: String,

    /// Unselected navigation items.
    pub nav_fg: String,
    pub nav_selected_fg: String,
    pub nav_selected_bg: String,
    /// Keyboard focus marker.
    pub focus_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read and
    /// [`FolioError::Theme`] if it does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| FolioError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb` (or `rrggbb`). Malformed input yields white.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("Built-in catppuccin-mocha theme should always parse")
    }
}
