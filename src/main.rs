//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the bookstore library and the Zellij
//! plugin system. Everything that calls into the Zellij host lives here so
//! the library stays testable outside the WASM sandbox.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys to library events for the current input mode,
//!    delegate to `handle_event`, execute returned actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! Key presses go through [`bookstore::map_key`], which picks a binding based
//! on the current input mode (browse, search, form or detail).

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookstore::{handle_event, map_key, Action, Config};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: bookstore::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookstore::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// The storefront only needs keyboard input; it neither reads application
    /// state nor changes it, so no permissions are requested.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookstore::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            store_name = %config.store_name,
            theme = ?config.theme_name,
            catalog_file = ?config.catalog_file,
            "parsed configuration"
        );
        self.app = bookstore::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let mode = self.app.input_mode();
        let _guard = tracing::debug_span!(
            "plugin_update_key",
            bare_key = ?key.bare_key,
            mode = ?mode
        )
        .entered();

        let Some(our_event) = map_key(mode, &key) else {
            tracing::trace!("unbound key");
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookstore::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding storefront pane");
                hide_self();
            }
        }
    }
}
