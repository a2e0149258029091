//! Key bindings: translation of Zellij key presses into [`Event`]s.
//!
//! The same key means different things depending on the [`InputMode`]:
//! `j` moves the selection while browsing but is a letter while typing a
//! search or a username.
//!
//! | Mode   | Keys                                                                   |
//! |--------|------------------------------------------------------------------------|
//! | Browse | `j`/`k`/`↓`/`↑` move, `Enter` details, `/` search, `l` log in, `r` register, `o` log out, `Esc` clear search, `q` quit |
//! | Search | letters type, `Backspace`, `Enter` back to results, `Esc` clear, `Ctrl+n`/`Ctrl+p` move |
//! | Form   | letters type, `Tab` next field, `Enter` submit, `Ctrl+r` register, `Ctrl+l` log in, `Esc` close |
//! | Detail | `Esc`/`Enter`/`q` close                                                 |

use super::handler::Event;
use super::modes::InputMode;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event for the given mode.
///
/// Returns `None` for keys that have no binding in that mode.
#[must_use]
pub fn map_key(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

    if ctrl {
        return match (mode, &key.bare_key) {
            (InputMode::Browse | InputMode::Search, BareKey::Char('n')) => Some(Event::MoveDown),
            (InputMode::Browse | InputMode::Search, BareKey::Char('p')) => Some(Event::MoveUp),
            (InputMode::Form, BareKey::Char('r')) => Some(Event::SwitchToRegister),
            (InputMode::Form, BareKey::Char('l')) => Some(Event::SwitchToLogin),
            _ => None,
        };
    }

    let typed = is_plain_text(key);

    match mode {
        InputMode::Browse => match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Some(Event::MoveDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::MoveUp),
            BareKey::Enter => Some(Event::OpenSelectedBook),
            BareKey::Esc => Some(Event::ClearSearch),
            BareKey::Char('/') => Some(Event::FocusSearch),
            BareKey::Char('l') => Some(Event::OpenLogin),
            BareKey::Char('r') => Some(Event::OpenRegister),
            BareKey::Char('o') => Some(Event::Logout),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        },
        InputMode::Search => match key.bare_key {
            BareKey::Down => Some(Event::MoveDown),
            BareKey::Up => Some(Event::MoveUp),
            BareKey::Enter => Some(Event::FocusResults),
            BareKey::Esc => Some(Event::ClearSearch),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) if typed => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Form => match key.bare_key {
            BareKey::Tab => Some(Event::NextField),
            BareKey::Enter => Some(Event::SubmitForm),
            BareKey::Esc => Some(Event::CloseOverlay),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) if typed => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Detail => match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseBookDetail),
            _ => None,
        },
    }
}

/// Whether the key types a character: no modifier other than Shift.
fn is_plain_text(key: &KeyWithModifier) -> bool {
    key.key_modifiers
        .iter()
        .all(|modifier| *modifier == KeyModifier::Shift)
}
