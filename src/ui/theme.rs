//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes and
//! custom themes loaded from TOML files. It provides utilities for converting
//! hex colors to 24-bit ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `classic`: black on white input bar, cyan on black results, black on cyan
//!   selection (default)
//! - `catppuccin-mocha`: dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! input_bar_fg = "#000000"
//! input_bar_bg = "#ffffff"
//! result_fg = "#00ffff"
//! result_bg = "#000000"
//! selection_fg = "#000000"
//! selection_bg = "#00ffff"
//! match_highlight_fg = "#000000"
//! match_highlight_bg = "#ffff00"
//! status_fg = "#ffffff"
//! message_fg = "#ffff00"
//! title_fg = "#ffffff"
//! ```
//!
//! # Example
//!
//! ```rust
//! use glocate::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}Title{}", Theme::fg(&theme.colors.title_fg), Theme::reset());
//! ```

use crate::domain::{GlocateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). Optional backgrounds default
/// to the terminal's own background.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Input bar and prompt text.
    pub input_bar_fg: String,
    /// Input bar background, filled across the full width.
    pub input_bar_bg: String,

    /// Unselected result rows.
    pub result_fg: String,
    #[serde(default)]
    pub result_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Mode hint on the status line.
    pub status_fg: String,
    #[serde(default)]
    pub status_bg: Option<String>,
    /// Transient status messages.
    pub message_fg: String,

    /// Blacklist Manager title.
    pub title_fg: String,
}

impl Theme {
    /// Returns the built-in `classic` theme.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            colors: ThemeColors {
                input_bar_fg: "#000000".to_string(),
                input_bar_bg: "#ffffff".to_string(),
                result_fg: "#00ffff".to_string(),
                result_bg: Some("#000000".to_string()),
                selection_fg: "#000000".to_string(),
                selection_bg: "#00ffff".to_string(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: "#ffff00".to_string(),
                status_fg: "#ffffff".to_string(),
                status_bg: None,
                message_fg: "#ffff00".to_string(),
                title_fg: "#ffffff".to_string(),
            },
        }
    }

    /// Names accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 2] = ["classic", "catppuccin-mocha"];

    /// Loads a built-in theme by name.
    ///
    /// Supported names: `classic`, `catppuccin-mocha`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glocate::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("nope").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => return Some(Self::classic()),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GlocateError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GlocateError::Theme(format!("failed to read theme file {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| GlocateError::Theme(format!("failed to parse theme file {}: {e}", path.display())))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glocate::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#00ffff"), "\u{1b}[38;2;0;255;255m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Background sequence for an optional color; empty when unset.
    #[must_use]
    pub fn bg_opt(hex: Option<&String>) -> String {
        hex.map_or_else(String::new, |hex| Self::bg(hex))
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `classic` theme.
    fn default() -> Self {
        Self::classic()
    }
}
