//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents mapping UI roles to hex colors. Four Catppuccin
//! variants are compiled in; a custom file can be loaded with
//! [`Theme::from_file`].
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//! - `catppuccin-frappe`: muted dark
//! - `catppuccin-macchiato`: medium dark
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#181825"          # optional
//! brand_fg = "#fab387"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#45475a"
//! search_focus_border = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! focus_border = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! time_pill_fg = "#1e1e2e"
//! time_pill_bg = "#a6e3a1"
//! active_category_fg = "#fab387"
//! empty_state_fg = "#89b4fa"
//! detail_border = "#b4befe"
//! ```

use crate::domain::error::{RecipeExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Theme identifier, e.g. `"catppuccin-mocha"`. Informational only.
    pub name: String,

    /// Colors for each UI role.
    pub colors: ThemeColors,
}

/// Colors for every UI role, as hex strings (`"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Top navigation text.
    pub header_fg: String,
    /// Top navigation band. Omit for the terminal background.
    #[serde(default)]
    pub header_bg: Option<String>,
    pub brand_fg: String,

    pub text_normal: String,
    /// Secondary text: card meta, footer, placeholders.
    pub text_dim: String,

    /// Separators and unfocused frames.
    pub border: String,

    pub search_bar_border: String,
    /// Search box frame while the search region has focus.
    pub search_focus_border: String,

    /// Focused sidebar entry.
    pub selection_fg: String,
    pub selection_bg: String,
    /// Frame of the focused recipe card.
    pub focus_border: String,

    /// Query match inside card titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// The `{time}m` pill on cards.
    pub time_pill_fg: String,
    pub time_pill_bg: String,

    /// Marker and label of the active category.
    pub active_category_fg: String,

    /// Loading and empty-result messages.
    pub empty_state_fg: String,

    /// Frame of the detail overlay.
    pub detail_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// Every color key is required except `header_bg`; see the module docs
    /// for the format.
    ///
    /// # Parameters
    ///
    /// * `path` - Sandbox path of the TOML file
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::ui::Theme;
    ///
    /// match Theme::from_file("/host/.config/zellij/recipes-theme.toml") {
    ///     Ok(theme) => println!("using {}", theme.name),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Theme`] if the file cannot be read or
    /// does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| RecipeExplorerError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| RecipeExplorerError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Plain palette used only if the bundled default cannot be parsed.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                header_fg: c("#ffffff"),
                header_bg: None,
                brand_fg: c("#ffaf5f"),
                text_normal: c("#d0d0d0"),
                text_dim: c("#808080"),
                border: c("#585858"),
                search_bar_border: c("#585858"),
                search_focus_border: c("#5fafff"),
                selection_fg: c("#000000"),
                selection_bg: c("#d7afff"),
                focus_border: c("#d7afff"),
                match_highlight_fg: c("#000000"),
                match_highlight_bg: c("#ffd75f"),
                time_pill_fg: c("#000000"),
                time_pill_bg: c("#87d787"),
                active_category_fg: c("#ffaf5f"),
                empty_state_fg: c("#5fafff"),
                detail_border: c("#afafff"),
            },
        }
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape (`ESC[38;2;r;g;bm`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape (`ESC[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// SGR bold. Cleared only by [`reset`](Self::reset).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// SGR reset of all attributes and colors.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| {
            tracing::warn!(theme = DEFAULT_THEME, "bundled theme failed to parse, using fallback palette");
            Self::fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte", "catppuccin-frappe", "catppuccin-macchiato"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn escapes() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn incomplete_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, RecipeExplorerError::Theme(_)));
    }
}
