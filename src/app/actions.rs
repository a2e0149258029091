//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState); anything
//! that has to reach outside the plugin is returned as an [`Action`] and
//! executed by the Zellij shim in `main.rs`. The storefront performs no
//! network or storage I/O, so the only outward effect is hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use bookstore::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), bookstore::BookstoreError>(())
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the shopper leaves the storefront (e.g., pressing 'q').
    CloseFocus,
}
