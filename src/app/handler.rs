//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns shopper input into
//! state changes and action sequences. It is the only place the plugin shim
//! reaches into [`AppState`]; the shim maps key presses to [`Event`]s and
//! executes whatever [`Action`]s come back.
//!
//! # Architecture
//!
//! 1. Key presses arrive from the plugin runtime
//! 2. `main.rs` maps them to an [`Event`] based on the current input mode
//! 3. [`handle_event`] mutates state through `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `MoveDown`, `MoveUp`, `OpenSelectedBook`, `OpenBook`
//! - **Search**: `FocusSearch`, `FocusResults`, `ClearSearch`
//! - **Input**: `Char`, `Backspace`, `NextField`
//! - **Overlays**: `OpenLogin`, `OpenRegister`, `SwitchToRegister`,
//!   `SwitchToLogin`, `CloseLogin`, `CloseRegister`, `CloseBookDetail`,
//!   `CloseOverlay`
//! - **Session**: `SubmitForm`, `Session`, `Logout`
//! - **Runtime**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use bookstore::app::{handle_event, AppState, Event};
//! use bookstore::{Catalog, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenLogin)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert!(state.modal.login_open());
//! # Ok::<(), bookstore::BookstoreError>(())
//! ```

use super::modes::{Focus, InputMode};
use super::session::SessionCommand;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by shopper input.
///
/// Each event is a discrete occurrence; the handler processes them one at a
/// time and every resulting transition is complete before the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card selection down by one (wraps to the first card).
    MoveDown,
    /// Moves the card selection up by one (wraps to the last card).
    MoveUp,
    /// Gives the header search box keyboard focus.
    FocusSearch,
    /// Returns focus to the shelves, keeping the query.
    FocusResults,
    /// Clears the query and returns focus to the shelves.
    ClearSearch,
    /// Types a character into the search box or the focused form field.
    Char(char),
    /// Deletes the last character of the search box or focused form field.
    Backspace,
    /// Moves focus to the other auth form field.
    NextField,
    /// Opens the detail overlay for the selected card.
    OpenSelectedBook,
    /// Opens the detail overlay for a book by id.
    OpenBook(u32),
    /// Closes the detail overlay.
    CloseBookDetail,
    /// Opens the login overlay.
    OpenLogin,
    /// Opens the register overlay.
    OpenRegister,
    /// Closes the login overlay.
    CloseLogin,
    /// Closes the register overlay.
    CloseRegister,
    /// Replaces the login overlay with the register overlay.
    SwitchToRegister,
    /// Replaces the register overlay with the login overlay.
    SwitchToLogin,
    /// Submits the open auth form with its current input.
    SubmitForm,
    /// Applies an explicit session command.
    Session(SessionCommand),
    /// Logs the shopper out.
    Logout,
    /// Closes whichever overlay is open.
    CloseOverlay,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is false when the event left
/// the visible state untouched (e.g., typing while browsing).
///
/// # Errors
///
/// Returns [`BookstoreError::UnknownBook`](crate::BookstoreError::UnknownBook)
/// for [`Event::OpenBook`] with an id that is not in the catalog. State is
/// unchanged in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            tracing::debug!("focusing search bar");
            state.focus = Focus::SearchBar;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Catalog;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            tracing::debug!(query = %state.search_query, "clearing search");
            state.clear_search();
            state.focus = Focus::Catalog;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode() {
            InputMode::Search => {
                state.push_search_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Form => {
                if let Some(form) = state.modal.active_form_mut() {
                    form.push_char(*c);
                }
                Ok((true, vec![]))
            }
            InputMode::Browse | InputMode::Detail => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode() {
            InputMode::Search => {
                state.pop_search_char();
                Ok((true, vec![]))
            }
            InputMode::Form => {
                if let Some(form) = state.modal.active_form_mut() {
                    form.pop_char();
                }
                Ok((true, vec![]))
            }
            InputMode::Browse | InputMode::Detail => Ok((false, vec![])),
        },
        Event::NextField => {
            let Some(form) = state.modal.active_form_mut() else {
                return Ok((false, vec![]));
            };
            form.next_field();
            Ok((true, vec![]))
        }
        Event::OpenSelectedBook => Ok((state.open_selected_book(), vec![])),
        Event::OpenBook(id) => {
            state.open_book_detail(*id)?;
            Ok((true, vec![]))
        }
        Event::CloseBookDetail => {
            state.modal.close_book_detail();
            Ok((true, vec![]))
        }
        Event::OpenLogin => {
            state.modal.open_login();
            Ok((true, vec![]))
        }
        Event::OpenRegister => {
            state.modal.open_register();
            Ok((true, vec![]))
        }
        Event::CloseLogin => {
            state.modal.close_login();
            Ok((true, vec![]))
        }
        Event::CloseRegister => {
            state.modal.close_register();
            Ok((true, vec![]))
        }
        Event::SwitchToRegister => {
            tracing::debug!("switching to register form");
            state.modal.switch_to_register();
            Ok((true, vec![]))
        }
        Event::SwitchToLogin => {
            tracing::debug!("switching to login form");
            state.modal.switch_to_login();
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            let Some(command) = state.pending_submission() else {
                tracing::debug!("submit without an open form");
                return Ok((false, vec![]));
            };
            state.dispatch(command);
            Ok((true, vec![]))
        }
        Event::Session(command) => {
            state.dispatch(command.clone());
            Ok((true, vec![]))
        }
        Event::Logout => {
            if !state.session.is_logged_in {
                return Ok((false, vec![]));
            }
            state.dispatch(SessionCommand::LogoutRequested);
            Ok((true, vec![]))
        }
        Event::CloseOverlay => {
            state.modal.close();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}
