//! Overlay orchestration for the login, register and book-detail modals.
//!
//! Overlay visibility is a single tagged variant rather than three independent
//! flags, so at most one overlay is ever open and "login and register both
//! open" cannot be represented:
//!
//! ```text
//!                 open_login            switch_to_register
//!   Closed ───────────────────► Login ─────────────────────► Register
//!     ▲  ▲                        │  ◄─────────────────────     │
//!     │  │        close_login     │     switch_to_login         │
//!     │  └────────────────────────┘                             │
//!     │                  close_register                         │
//!     └─────────────────────────────────────────────────────────┘
//!
//!   any ── open_book_detail(book) ──► BookDetail(book) ── close_book_detail ──► Closed
//! ```
//!
//! Every transition is one assignment to [`ModalState`], so a render never
//! observes a half-applied switch.

use super::modes::FormField;
use crate::domain::Book;

/// In-progress input of the login or register form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    /// Accepted but never validated.
    pub password: String,
    /// Field receiving typed characters.
    pub focus: FormField,
}

impl AuthForm {
    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field.
    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves focus to the other field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
        }
    }
}

/// Which overlay, if any, is shown on top of the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No overlay.
    #[default]
    Closed,
    /// Login form.
    Login(AuthForm),
    /// Registration form.
    Register(AuthForm),
    /// Detail view of the selected book.
    BookDetail(Book),
}

impl ModalState {
    /// Opens the login overlay, replacing any other overlay.
    ///
    /// Idempotent: if login is already open its form input is kept.
    pub fn open_login(&mut self) {
        if !self.login_open() {
            *self = Self::Login(AuthForm::default());
        }
    }

    /// Opens the register overlay, replacing any other overlay.
    ///
    /// Idempotent: if register is already open its form input is kept.
    pub fn open_register(&mut self) {
        if !self.register_open() {
            *self = Self::Register(AuthForm::default());
        }
    }

    /// Closes the login overlay. No effect if another overlay is shown.
    pub fn close_login(&mut self) {
        if self.login_open() {
            *self = Self::Closed;
        }
    }

    /// Closes the register overlay. No effect if another overlay is shown.
    pub fn close_register(&mut self) {
        if self.register_open() {
            *self = Self::Closed;
        }
    }

    /// Closes login and opens register with an empty form.
    pub fn switch_to_register(&mut self) {
        *self = Self::Register(AuthForm::default());
    }

    /// Closes register and opens login with an empty form.
    pub fn switch_to_login(&mut self) {
        *self = Self::Login(AuthForm::default());
    }

    /// Shows the detail overlay for `book`.
    pub fn open_book_detail(&mut self, book: Book) {
        *self = Self::BookDetail(book);
    }

    /// Closes the detail overlay. No effect if another overlay is shown.
    ///
    /// The selected book is dropped together with the overlay.
    pub fn close_book_detail(&mut self) {
        if self.book_detail_open() {
            *self = Self::Closed;
        }
    }

    /// Closes whichever overlay is open.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn login_open(&self) -> bool {
        matches!(self, Self::Login(_))
    }

    #[must_use]
    pub const fn register_open(&self) -> bool {
        matches!(self, Self::Register(_))
    }

    #[must_use]
    pub const fn book_detail_open(&self) -> bool {
        matches!(self, Self::BookDetail(_))
    }

    /// The book shown in the detail overlay, `None` unless it is open.
    #[must_use]
    pub const fn selected_book(&self) -> Option<&Book> {
        match self {
            Self::BookDetail(book) => Some(book),
            _ => None,
        }
    }

    /// The form of the open login or register overlay.
    #[must_use]
    pub const fn active_form(&self) -> Option<&AuthForm> {
        match self {
            Self::Login(form) | Self::Register(form) => Some(form),
            _ => None,
        }
    }

    /// Mutable access to the form of the open login or register overlay.
    pub fn active_form_mut(&mut self) -> Option<&mut AuthForm> {
        match self {
            Self::Login(form) | Self::Register(form) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn starts_closed() {
        let modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(!modal.login_open());
        assert!(!modal.register_open());
        assert!(!modal.book_detail_open());
        assert!(modal.selected_book().is_none());
    }

    #[test]
    fn open_login_is_idempotent() {
        let mut once = ModalState::default();
        once.open_login();

        let mut twice = ModalState::default();
        twice.open_login();
        twice.open_login();

        assert_eq!(once, twice);
    }

    #[test]
    fn reopening_login_keeps_typed_input() {
        let mut modal = ModalState::default();
        modal.open_login();
        if let Some(form) = modal.active_form_mut() {
            form.push_char('a');
        }
        modal.open_login();
        assert_eq!(modal.active_form().map(|f| f.username.as_str()), Some("a"));
    }

    #[test]
    fn switch_to_register_closes_login() {
        let mut modal = ModalState::default();
        modal.open_login();
        modal.switch_to_register();
        assert!(!modal.login_open());
        assert!(modal.register_open());

        modal.switch_to_login();
        assert!(modal.login_open());
        assert!(!modal.register_open());
    }

    #[test]
    fn opening_register_replaces_login() {
        let mut modal = ModalState::default();
        modal.open_login();
        modal.open_register();
        assert!(!modal.login_open());
        assert!(modal.register_open());
    }

    #[test]
    fn close_only_affects_its_own_overlay() {
        let mut modal = ModalState::default();
        modal.open_register();
        modal.close_login();
        assert!(modal.register_open());
        modal.close_book_detail();
        assert!(modal.register_open());
        modal.close_register();
        assert!(!modal.is_open());
    }

    #[test]
    fn book_detail_round_trip() {
        let catalog = Catalog::builtin();
        let book = catalog.get(2).cloned().unwrap();

        let mut modal = ModalState::default();
        modal.open_book_detail(book);
        assert!(modal.book_detail_open());
        assert_eq!(modal.selected_book().map(|b| b.id), Some(2));

        modal.close_book_detail();
        assert!(!modal.book_detail_open());
        assert!(modal.selected_book().is_none());
    }

    #[test]
    fn form_typing_follows_focus() {
        let mut form = AuthForm::default();
        form.push_char('x');
        form.next_field();
        form.push_char('p');
        form.push_char('w');
        form.pop_char();

        assert_eq!(form.username, "x");
        assert_eq!(form.password, "p");
        assert_eq!(form.focus, FormField::Password);
    }
}
