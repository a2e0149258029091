//! Bookstore: a static online bookstore storefront as a Zellij plugin.
//!
//! The plugin renders a storefront in a terminal pane:
//! - Header with store name, search box, login/register controls and a cart badge
//! - Promotional hero banner
//! - Two curated shelves ("Best Sellers" and "Trending") filtered live by the
//!   search query
//! - Book-detail, login and registration overlays
//!
//! The catalog is a fixed list of six books. Logging in or registering only
//! flips an in-memory flag; nothing is persisted and no order is placed.

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │  key presses → Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State owner
//! │  - Key bindings and event handling                  │
//! │  - Search filter, session, overlays                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)    │
//! │ - Rendering           │   │ - Book, Catalog           │
//! │ - Theming             │   │ - Error types             │
//! │ - Components          │   │                           │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (sandbox paths) & Observability     │
//! │  (OpenTelemetry tracing to an OTLP JSON file)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State owner with event/action model
//! - [`domain`]: Books, catalog and errors
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookstore.wasm" {
//!         store_name "BookStore"
//!         theme "catppuccin-latte"
//!         catalog_file "~/books.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookstore::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::FocusSearch, Event::Char('d'), Event::Char('a'), Event::FocusResults] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//!
//! let lists = state.derived_lists();
//! assert_eq!(lists.best_sellers.len(), 1);
//! # Ok::<(), bookstore::BookstoreError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, map_key, Action, AppState, Event, InputMode, ModalState, SessionCommand,
    SessionState,
};
pub use domain::{Book, BookstoreError, Catalog, Category, Result};
pub use ui::Theme;

use app::state::DEFAULT_STORE_NAME;
use infrastructure::paths::{display_path, expand_tilde};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookstore.wasm" {
///     store_name "Nhà Sách"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/bookstore/theme.toml"
///     catalog_file "~/.config/bookstore/books.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name shown in the header and hero banner. Default: `"BookStore"`
    pub store_name: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Path to a TOML catalog replacing the built-in six books.
    pub catalog_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            theme_name: None,
            theme_file: None,
            catalog_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookstore::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("store_name".to_string(), "Nhà Sách".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.store_name, "Nhà Sách");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            store_name: get("store_name").unwrap_or_else(|| DEFAULT_STORE_NAME.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            catalog_file: get("catalog_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Builds the initial storefront state from configuration.
///
/// - Theme: `theme_file`, else `theme_name`, else Catppuccin Mocha
/// - Catalog: `catalog_file`, else the built-in six books
///
/// A file that cannot be loaded is logged and replaced by the default; the
/// plugin always starts.
///
/// # Example
///
/// ```rust
/// use bookstore::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.catalog.len(), 6);
/// assert!(!state.session.is_logged_in);
/// ```
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();
    tracing::debug!(store_name = %config.store_name, "initializing bookstore plugin");

    let mut state = AppState::new(load_catalog(config), load_theme(config));
    state.store_name.clone_from(&config.store_name);

    tracing::debug!(
        books = state.catalog.len(),
        theme = %state.theme.name,
        "storefront ready"
    );
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %display_path(&path), error = %e, "failed to load theme from file, using default");
            }
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_catalog(config: &Config) -> Catalog {
    let Some(catalog_file) = &config.catalog_file else {
        return Catalog::builtin();
    };

    let path = expand_tilde(catalog_file);
    Catalog::from_file(&path).unwrap_or_else(|e| {
        tracing::debug!(catalog_file = %display_path(&path), error = %e, "failed to load catalog, using built-in books");
        Catalog::builtin()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.store_name, "BookStore");
    }

    #[test]
    fn config_ignores_blank_values() {
        let map = BTreeMap::from([
            ("store_name".to_string(), "   ".to_string()),
            ("theme_file".to_string(), String::new()),
            ("trace_level".to_string(), " debug ".to_string()),
        ]);
        let config = Config::from_zellij(&map);

        assert_eq!(config.store_name, "BookStore");
        assert_eq!(config.theme_file, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_falls_back_on_bad_files() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            catalog_file: Some("/nonexistent/books.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.catalog, Catalog::builtin());
        assert_eq!(state.theme, Theme::default());
    }

    #[test]
    fn initialize_loads_custom_catalog_and_theme() {
        let mut catalog = tempfile::NamedTempFile::new().unwrap();
        write!(
            catalog,
            r#"
            [[books]]
            id = 7
            title = "Số Đỏ"
            author = "Vũ Trọng Phụng"
            price = 55000
            old_price = 65000
            discount_price = 10000
            category = "bestseller"
            "#
        )
        .unwrap();

        let config = Config {
            store_name: "Nhà Sách".to_string(),
            theme_name: Some("catppuccin-latte".to_string()),
            catalog_file: Some(catalog.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.store_name, "Nhà Sách");
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.derived_lists().best_sellers[0].id, 7);
    }
}
