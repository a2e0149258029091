//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the storefront components
//!
//! # Example
//!
//! ```rust,no_run
//! use bookstore::app::AppState;
//! use bookstore::ui::render;
//! use bookstore::{Catalog, Theme};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default());
//! render(&state, 24, 80); // Render to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the storefront to stdout.
///
/// Prints ANSI-styled output with explicit cursor positioning. Does not clear
/// the screen; the Zellij host hands the plugin a fresh frame per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_storefront(&viewmodel, &state.theme, cols, rows);
}
