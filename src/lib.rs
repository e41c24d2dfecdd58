//! Recipe Explorer: a Zellij plugin for browsing a recipe collection.
//!
//! The plugin renders a static recipe dataset as a category sidebar, a search
//! box, a grid of recipe cards and a detail overlay, navigated with six
//! remote-style inputs (arrows, Enter, Back) or the mouse.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← key/mouse mapping,
//! └─────────────────────────────────────────────────────┘    action execution
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Focus state machine + filter engine              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Sources     │   │ - One-shot    │
//! │ - Layout/hits │   │ - Validation  │   │   catalog load│
//! │ - Theming     │   │ - Categories  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Recipe, Category, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/recipe-explorer.wasm" {
//!         catalog "~/recipes.json"      // or "builtin"
//!         theme "catppuccin-latte"
//!         card_width "32"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. `load` parses [`Config`], initializes tracing and builds the
//!    [`AppState`] with [`initialize`]. The state starts in the loading phase.
//! 2. The plugin requests filesystem access. Once answered it posts
//!    `LoadCatalog` to the worker.
//! 3. The worker reads and validates the dataset and replies with
//!    `CatalogLoaded` or `Error`. Either reply ends the loading phase; an
//!    error shows the empty state.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{RecipeExplorerError, Result};
pub use ui::Theme;

use catalog::SourceSpec;
use std::collections::BTreeMap;
use ui::LayoutConfig;

/// Plugin configuration parsed from the Zellij plugin block.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the recipe dataset comes from. Default: the embedded sample.
    pub catalog: SourceSpec,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme, already resolved into the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Card and sidebar geometry.
    pub layout: LayoutConfig,
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unknown keys are ignored. Numbers that fail to parse keep their
    /// default; widths below their minimum are raised to it.
    ///
    /// # Parameters
    ///
    /// * `config` - Key/value pairs from the plugin's KDL block
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("card_width".to_string(), "32".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.layout.card_width, 32);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = LayoutConfig::default();
        let number = |key: &str, default: usize| -> usize {
            config.get(key).map_or(default, |raw| {
                parse_number(key, raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "invalid number in configuration, using default");
                    default
                })
            })
        };

        let layout = LayoutConfig {
            card_width: number("card_width", defaults.card_width).max(LayoutConfig::MIN_CARD_WIDTH),
            card_gap: number("card_gap", defaults.card_gap),
            sidebar_width: number("sidebar_width", defaults.sidebar_width).max(LayoutConfig::MIN_SIDEBAR_WIDTH),
        };

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            catalog: config
                .get("catalog")
                .map_or_else(SourceSpec::default, |value| SourceSpec::from_config_value(value)),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file").map(|path| infrastructure::resolve_sandbox_path(&path)),
            trace_level: non_empty("trace_level"),
            layout,
        }
    }
}

/// Parses a non-negative cell count from a configuration value.
///
/// # Errors
///
/// Returns [`RecipeExplorerError::Config`] naming the key when `raw` is not a
/// number.
fn parse_number(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|e| RecipeExplorerError::Config(format!("{key} = {raw:?}: {e}")))
}

/// Builds the initial application state from `config`.
///
/// Theme selection: `theme_file` if it loads, else `theme` if it names a
/// built-in theme, else the default. A theme that fails to load is logged and
/// skipped, never fatal.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog = ?config.catalog, "initializing recipe explorer");

    let from_file = config.theme_file.as_ref().and_then(|path| {
        Theme::from_file(path)
            .map_err(|e| tracing::warn!(theme_file = %path, error = %e, "failed to load theme file"))
            .ok()
    });

    let theme = from_file
        .or_else(|| {
            let name = config.theme_name.as_ref()?;
            let theme = Theme::from_name(name);
            if theme.is_none() {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
            }
            theme
        })
        .unwrap_or_default();

    AppState::new(theme, config.layout, config.catalog.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.catalog, SourceSpec::Embedded);
        assert_eq!(config.layout, LayoutConfig::default());
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("catalog", "~/recipes.json"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "themes/mine.toml"),
            ("trace_level", "debug"),
            ("card_width", "32"),
            ("card_gap", "1"),
            ("sidebar_width", "18"),
        ]));

        assert_eq!(config.catalog, SourceSpec::File("/host/recipes.json".to_string()));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.layout,
            LayoutConfig {
                card_width: 32,
                card_gap: 1,
                sidebar_width: 18
            }
        );
    }

    #[test]
    fn bad_numbers_fall_back_and_minimums_hold() {
        let config = Config::from_zellij(&map(&[("card_width", "wide"), ("card_gap", "-1"), ("sidebar_width", "3")]));
        assert_eq!(config.layout.card_width, 28);
        assert_eq!(config.layout.card_gap, 2);
        assert_eq!(config.layout.sidebar_width, LayoutConfig::MIN_SIDEBAR_WIDTH);

        let config = Config::from_zellij(&map(&[("card_width", "2")]));
        assert_eq!(config.layout.card_width, LayoutConfig::MIN_CARD_WIDTH);
    }

    #[test]
    fn invalid_number_names_its_key() {
        assert_eq!(parse_number("card_gap", " 3 ").unwrap(), 3);

        let err = parse_number("card_width", "wide").unwrap_err();
        assert!(matches!(err, RecipeExplorerError::Config(ref m) if m.starts_with("card_width")));
    }

    #[test]
    fn theme_selection_order() {
        let state = initialize(&Config::default());
        assert_eq!(state.theme.name, ui::theme::DEFAULT_THEME);
        assert!(state.loading);

        let named = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&named).theme.name, "catppuccin-frappe");

        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&unknown).theme.name, ui::theme::DEFAULT_THEME);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();
        let from_file = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&from_file).theme.name, "custom");

        let missing = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/definitely/not/here.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&missing).theme.name, "catppuccin-latte");
    }
}
