//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes come either from the built-in Catppuccin variants or from a
//! custom TOML file, and are turned into 24-bit ANSI escape sequences at
//! render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent_fg = "#cba6f7"
//! price_fg = "#f38ba8"
//! old_price_fg = "#6c7086"
//! badge_fg = "#a6e3a1"
//! modal_border = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookstore::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}Price{}", Theme::fg(&theme.colors.price_fg), Theme::reset());
//! ```

use crate::domain::{BookstoreError, Result};
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
/// All colors are hex strings (e.g., "#cdd6f4"). `header_bg` is optional so
/// themes can leave the header transparent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, authors, hints).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty shelf message color.
    pub empty_state_fg: String,

    /// Hero banner and shelf heading color.
    pub accent_fg: String,
    /// Current price color.
    pub price_fg: String,
    /// Struck-through pre-sale price color.
    pub old_price_fg: String,
    /// Discount and cart badge color.
    pub badge_fg: String,
    /// Overlay frame color.
    pub modal_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
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
    /// Returns [`BookstoreError::Io`] if the file cannot be read and
    /// [`BookstoreError::Theme`] if its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| BookstoreError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI strikethrough (`\x1b[9m`), used for pre-sale prices.
    #[must_use]
    pub const fn strike() -> &'static str {
        "\u{001b}[9m"
    }

    /// ANSI reset (`\x1b[0m`). Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
