//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from
//! [`AppState`](crate::app::AppState) by `compute_viewmodel`. Renderers only
//! read them; prices are pre-formatted, highlight ranges pre-computed and
//! every section already knows whether it is empty.

use crate::app::modes::FormField;

/// Complete storefront view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Top bar: store title, search box, account controls, cart badge.
    pub header: HeaderInfo,

    /// Static promotional banner.
    pub hero: HeroInfo,

    /// Curated shelves, best-sellers first.
    pub sections: Vec<SectionInfo>,

    /// Keybinding hints and static store information.
    pub footer: FooterInfo,

    /// Overlay drawn on top of everything else, if any.
    pub overlay: Option<OverlayInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Store name.
    pub title: String,
    /// Search box state.
    pub search: SearchBarInfo,
    /// Login/register controls or greeting.
    pub account: AccountInfo,
    /// Items in the cart badge. Always zero; the cart is decorative.
    pub cart_count: usize,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether typed characters currently go to the search box.
    pub is_focused: bool,
}

/// Account area of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountInfo {
    /// Logged out: login and register controls are shown.
    Guest,
    /// Logged in: greeting and logout control are shown.
    LoggedIn {
        /// Name submitted at login or registration.
        username: String,
    },
}

/// Hero banner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroInfo {
    pub headline: String,
    pub tagline: String,
}

/// One curated shelf.
///
/// The heading and "view all" hint render even when `cards` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    /// Shelf heading, e.g. "Best Sellers".
    pub title: String,
    /// Decorative "view all" link text.
    pub view_all: String,
    /// Books on this shelf after filtering.
    pub cards: Vec<BookCard>,
    /// Message shown in place of cards when the shelf is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single book card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: u32,
    pub title: String,
    pub author: String,
    /// Formatted current price.
    pub price: String,
    /// Formatted pre-sale price.
    pub old_price: String,
    /// Percentage saved, 0 when not discounted.
    pub discount_percent: u64,
    /// Whether this card holds the selection cursor.
    pub is_selected: bool,
    /// Char ranges of the search match within `title`.
    pub title_highlights: Vec<(usize, usize)>,
    /// Char ranges of the search match within `author`.
    pub author_highlights: Vec<(usize, usize)>,
}

/// Empty shelf message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No books match \"xyz\"").
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
    /// Static store contact line.
    pub store_info: String,
}

/// Overlay drawn above the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayInfo {
    Login(FormInfo),
    Register(FormInfo),
    BookDetail(BookDetailInfo),
}

/// Login or register form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInfo {
    /// Overlay title.
    pub title: String,
    /// Username as typed.
    pub username: String,
    /// One `*` per typed password character.
    pub masked_password: String,
    /// Field receiving input.
    pub focus: FormField,
    /// Hint for switching to the other form.
    pub switch_hint: String,
    /// Label of the submit control.
    pub submit_label: String,
}

/// Book detail overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailInfo {
    pub title: String,
    pub author: String,
    pub price: String,
    pub old_price: String,
    /// Formatted amount saved.
    pub discount_price: String,
    pub discount_percent: u64,
    pub description: String,
    /// Label/value metadata rows (publisher date, pages, language, ...).
    pub attributes: Vec<(String, String)>,
}
