//! Input focus and mode types.
//!
//! These small enums decide how a key press is interpreted. The storefront is
//! in exactly one [`InputMode`] at a time, derived from the application state:
//!
//! - **Browse**: moving between book cards and triggering header actions
//! - **Search**: typing into the header search box
//! - **Form**: typing into an open login or register overlay
//! - **Detail**: reading an open book-detail overlay
//!
//! Overlays take precedence over the browse focus: while an overlay is open,
//! keys go to it regardless of whether the search box had focus before.

/// Where keyboard input goes while no overlay is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Book cards; navigation keys move the selection.
    #[default]
    Catalog,
    /// Header search box; characters edit the query.
    SearchBar,
}

/// Field of an auth form that receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Username,
    Password,
}

impl FormField {
    /// The other field (two-field forms wrap around).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Effective input handling mode.
///
/// Determines active keybindings and the footer hint line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the shelves.
    Browse,
    /// Editing the search query.
    Search,
    /// Filling in the login or register form.
    Form,
    /// Viewing a book's details.
    Detail,
}
