//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain
//! layer. It owns every piece of mutable storefront state and implements the
//! event-driven flow that powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → Event Handler → State Mutations → Actions → Side Effects
//!                                           │
//!                                           └──► View Model → Renderers
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Search filtering and shelf partitioning
//! - [`handler`]: Event processing and state transition coordinator
//! - [`keymap`]: Mode-dependent key bindings
//! - [`modal`]: Login, register and book-detail overlay state
//! - [`modes`]: Focus and input mode types
//! - [`session`]: Shopper session flags and session commands
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod keymap;
pub mod modal;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use filter::{filter_books, match_ranges, DerivedLists};
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modal::{AuthForm, ModalState};
pub use modes::{Focus, FormField, InputMode};
pub use session::{SessionCommand, SessionState};
pub use state::AppState;
