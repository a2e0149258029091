//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the storefront: it owns the
//! catalog, the search query, the shopper session, the overlay state and the
//! card selection. Its methods are the only mutation entry points; renderers
//! receive an immutable [`UIViewModel`](crate::ui::viewmodel::UIViewModel)
//! computed from a state snapshot.
//!
//! # State Components
//!
//! - **Catalog**: fixed list of books, never mutated
//! - **Search Query**: edited on every keystroke, drives filtering
//! - **Session**: logged-in flag and display name
//! - **Modal**: which overlay (if any) is open
//! - **Focus / Selection**: where keys go and which card is highlighted
//!
//! The filtered list and the two shelves are derived on demand from catalog
//! and query and never cached here.
//!
//! # Example
//!
//! ```rust
//! use bookstore::app::AppState;
//! use bookstore::{Catalog, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! state.set_search_query("dale");
//! assert_eq!(state.derived_lists().best_sellers.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.sections.len(), 2);
//! ```

use super::filter::{match_ranges, DerivedLists};
use super::modal::ModalState;
use super::modes::{Focus, InputMode};
use super::session::{SessionCommand, SessionState};
use crate::domain::{format_price, Book, BookstoreError, Catalog, Category, Result};
use crate::ui::components::CHROME_ROWS;
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AccountInfo, BookCard, BookDetailInfo, EmptyState, FooterInfo, FormInfo, HeaderInfo,
    HeroInfo, OverlayInfo, SearchBarInfo, SectionInfo, UIViewModel,
};

/// Store name used when none is configured.
pub const DEFAULT_STORE_NAME: &str = "BookStore";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Books offered by the store.
    pub catalog: Catalog,

    /// Current search query.
    ///
    /// Edited by `Char`/`Backspace` events while the search box has focus.
    pub search_query: String,

    /// Shopper session.
    pub session: SessionState,

    /// Open overlay, if any.
    pub modal: ModalState,

    /// Where keys go while no overlay is open.
    pub focus: Focus,

    /// Index of the selected card within [`AppState::visible_books`].
    ///
    /// Clamped whenever the query changes; wraps during navigation.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Name shown in the header and hero banner.
    pub store_name: String,
}

impl AppState {
    /// Creates a storefront over `catalog` with an empty query, logged-out
    /// session and no overlay.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            search_query: String::new(),
            session: SessionState::new(),
            modal: ModalState::Closed,
            focus: Focus::Catalog,
            selected_index: 0,
            theme,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }

    /// Derives the filtered list and both shelves for the current query.
    #[must_use]
    pub fn derived_lists(&self) -> DerivedLists<'_> {
        DerivedLists::compute(&self.catalog, &self.search_query)
    }

    /// Books the selection cursor moves over: best-sellers, then trending.
    #[must_use]
    pub fn visible_books(&self) -> Vec<&Book> {
        self.derived_lists().shelved()
    }

    /// The book under the selection cursor, if any book is visible.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible_books().get(self.selected_index).copied()
    }

    /// Moves the selection down by one card, wrapping to the first.
    ///
    /// No-op when no book is visible.
    pub fn move_selection_down(&mut self) {
        let count = self.visible_books().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the selection up by one card, wrapping to the last.
    ///
    /// No-op when no book is visible.
    pub fn move_selection_up(&mut self) {
        let count = self.visible_books().len();
        if count == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Replaces the search query and clamps the selection to the new results.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.on_query_changed();
    }

    /// Appends a character to the search query.
    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.on_query_changed();
    }

    /// Removes the last character of the search query.
    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.on_query_changed();
    }

    /// Clears the search query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.on_query_changed();
    }

    fn on_query_changed(&mut self) {
        let count = self.visible_books().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));

        tracing::trace!(
            query = %self.search_query,
            visible = count,
            selected_index = self.selected_index,
            "search query updated"
        );
    }

    /// Opens the detail overlay for the book with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BookstoreError::UnknownBook`] if the catalog has no such book;
    /// the overlay state is left unchanged.
    pub fn open_book_detail(&mut self, id: u32) -> Result<()> {
        let book = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(BookstoreError::UnknownBook(id))?;

        tracing::debug!(book_id = id, title = %book.title, "opening book detail");
        self.modal.open_book_detail(book);
        Ok(())
    }

    /// Opens the detail overlay for the selected card.
    ///
    /// Returns `false` when no book is visible.
    pub fn open_selected_book(&mut self) -> bool {
        let Some(book) = self.selected_book().cloned() else {
            tracing::debug!("no book selected");
            return false;
        };

        tracing::debug!(book_id = book.id, title = %book.title, "opening selected book");
        self.modal.open_book_detail(book);
        true
    }

    /// Applies a session command together with its overlay effect.
    ///
    /// Login closes the login overlay and registration closes the register
    /// overlay; both changes land in this one call, so the next render sees
    /// them together.
    pub fn dispatch(&mut self, command: SessionCommand) {
        let _span = tracing::debug_span!("dispatch_session_command").entered();

        match &command {
            SessionCommand::LoginSubmitted { .. } => self.modal.close_login(),
            SessionCommand::RegisterSubmitted { .. } => self.modal.close_register(),
            SessionCommand::LogoutRequested => {}
        }
        self.session.apply(command);
    }

    /// Builds the command for the open auth form's current input.
    ///
    /// Returns `None` when neither form is open.
    #[must_use]
    pub fn pending_submission(&self) -> Option<SessionCommand> {
        match &self.modal {
            ModalState::Login(form) => Some(SessionCommand::LoginSubmitted {
                username: form.username.clone(),
                password: form.password.clone(),
            }),
            ModalState::Register(form) => Some(SessionCommand::RegisterSubmitted {
                username: form.username.clone(),
                password: form.password.clone(),
            }),
            _ => None,
        }
    }

    /// Effective input mode: an open overlay wins over the browse focus.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match (&self.modal, self.focus) {
            (ModalState::Login(_) | ModalState::Register(_), _) => InputMode::Form,
            (ModalState::BookDetail(_), _) => InputMode::Detail,
            (ModalState::Closed, Focus::SearchBar) => InputMode::Search,
            (ModalState::Closed, Focus::Catalog) => InputMode::Browse,
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// `rows` limits how many cards each shelf lists; `cols` is used to
    /// truncate long titles.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let lists = self.derived_lists();
        let selected_id = match self.input_mode() {
            InputMode::Browse | InputMode::Search => self.selected_book().map(|b| b.id),
            InputMode::Form | InputMode::Detail => None,
        };
        let max_cards = Self::cards_per_section(rows);

        let sections = [
            (Category::Bestseller, &lists.best_sellers),
            (Category::Trending, &lists.trending),
        ]
        .into_iter()
        .map(|(category, books)| self.compute_section(category, books, selected_id, max_cards, cols))
        .collect();

        UIViewModel {
            header: self.compute_header(),
            hero: self.compute_hero(),
            sections,
            footer: self.compute_footer(),
            overlay: self.compute_overlay(),
        }
    }

    /// Rows available per shelf after subtracting the page chrome.
    const fn cards_per_section(rows: usize) -> usize {
        let available = rows.saturating_sub(CHROME_ROWS);
        let per_section = available / 2;
        if per_section == 0 {
            1
        } else {
            per_section
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let account = self.session.display_name().map_or(AccountInfo::Guest, |name| {
            AccountInfo::LoggedIn {
                username: name.to_string(),
            }
        });

        HeaderInfo {
            title: self.store_name.clone(),
            search: SearchBarInfo {
                query: self.search_query.clone(),
                is_focused: self.input_mode() == InputMode::Search,
            },
            account,
            cart_count: 0,
        }
    }

    fn compute_hero(&self) -> HeroInfo {
        HeroInfo {
            headline: format!("Welcome to {}", self.store_name),
            tagline: "Hand-picked reads, up to 30% off this week".to_string(),
        }
    }

    fn compute_section(
        &self,
        category: Category,
        books: &[&Book],
        selected_id: Option<u32>,
        max_cards: usize,
        cols: usize,
    ) -> SectionInfo {
        let title = category.shelf_title().unwrap_or_default().to_string();

        let empty_state = books.is_empty().then(|| EmptyState {
            message: if self.search_query.is_empty() {
                "No books on this shelf yet".to_string()
            } else {
                format!("No books match \"{}\"", self.search_query)
            },
            subtitle: "Try another title or author".to_string(),
        });

        let start = Self::window_start(books, selected_id, max_cards);
        let cards = books
            .iter()
            .skip(start)
            .take(max_cards)
            .map(|book| self.compute_card(book, selected_id == Some(book.id), cols))
            .collect();

        SectionInfo {
            title,
            view_all: "view all >".to_string(),
            cards,
            empty_state,
        }
    }

    /// First card to show so that the selected card stays inside the window.
    fn window_start(books: &[&Book], selected_id: Option<u32>, max_cards: usize) -> usize {
        selected_id
            .and_then(|id| books.iter().position(|b| b.id == id))
            .map_or(0, |pos| (pos + 1).saturating_sub(max_cards))
    }

    fn compute_card(&self, book: &Book, is_selected: bool, cols: usize) -> BookCard {
        const PRICE_COLUMNS: usize = 30;

        let max_title = cols.saturating_sub(PRICE_COLUMNS).max(10) / 2;
        let title = truncate_chars(&book.title, max_title);
        let author = truncate_chars(&book.author, max_title);

        BookCard {
            id: book.id,
            title_highlights: match_ranges(&title, &self.search_query),
            author_highlights: match_ranges(&author, &self.search_query),
            title,
            author,
            price: format_price(book.price),
            old_price: format_price(book.old_price),
            discount_percent: book.discount_percent(),
            is_selected,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Browse if self.session.is_logged_in => {
                "j/k: move  Enter: details  /: search  o: log out  q: quit"
            }
            InputMode::Browse => {
                "j/k: move  Enter: details  /: search  l: log in  r: register  q: quit"
            }
            InputMode::Search => "Type to filter  Enter: results  ESC: clear  Ctrl+n/p: move",
            InputMode::Form if self.modal.login_open() => {
                "Tab: next field  Enter: log in  Ctrl+r: register instead  ESC: close"
            }
            InputMode::Form => "Tab: next field  Enter: sign up  Ctrl+l: log in instead  ESC: close",
            InputMode::Detail => "ESC/Enter: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            store_info: "Hotline 1900 6656 | Free delivery on orders over 300.000đ".to_string(),
        }
    }

    fn compute_overlay(&self) -> Option<OverlayInfo> {
        match &self.modal {
            ModalState::Closed => None,
            ModalState::Login(form) => Some(OverlayInfo::Login(FormInfo {
                title: "Log in".to_string(),
                username: form.username.clone(),
                masked_password: "*".repeat(form.password.chars().count()),
                focus: form.focus,
                switch_hint: "No account yet? Ctrl+r to register".to_string(),
                submit_label: "[ Log in ]".to_string(),
            })),
            ModalState::Register(form) => Some(OverlayInfo::Register(FormInfo {
                title: "Create account".to_string(),
                username: form.username.clone(),
                masked_password: "*".repeat(form.password.chars().count()),
                focus: form.focus,
                switch_hint: "Already registered? Ctrl+l to log in".to_string(),
                submit_label: "[ Sign up ]".to_string(),
            })),
            ModalState::BookDetail(book) => Some(OverlayInfo::BookDetail(Self::compute_detail(book))),
        }
    }

    fn compute_detail(book: &Book) -> BookDetailInfo {
        let attributes = [
            ("Published", book.published_display()),
            ("Language", book.language.clone()),
            ("Pages", if book.pages == 0 { String::new() } else { book.pages.to_string() }),
            ("Weight", book.weight.clone()),
            ("Size", book.package_size.clone()),
            ("Format", book.book_type.clone()),
            ("Status", book.status.clone()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| (label.to_string(), value))
        .collect();

        BookDetailInfo {
            title: book.title.clone(),
            author: book.author.clone(),
            price: format_price(book.price),
            old_price: format_price(book.old_price),
            discount_price: format_price(book.discount_price),
            discount_percent: book.discount_percent(),
            description: book.description.clone(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::FormField;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    #[test]
    fn selection_wraps_over_both_shelves() {
        let mut state = state();
        assert_eq!(state.selected_book().map(|b| b.id), Some(1));

        state.move_selection_up();
        assert_eq!(state.selected_book().map(|b| b.id), Some(6));

        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.selected_book().map(|b| b.id), Some(2));

        for _ in 0..2 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_book().map(|b| b.id), Some(3));
    }

    #[test]
    fn selection_is_clamped_when_results_shrink() {
        let mut state = state();
        for _ in 0..5 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 5);

        state.set_search_query("nguyễn");
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_book().map(|b| b.id), Some(4));

        state.set_search_query("nothing at all");
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_book().is_none());
        assert!(!state.open_selected_book());
    }

    #[test]
    fn navigation_without_results_is_noop() {
        let mut state = state();
        state.set_search_query("zzz");
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn open_unknown_book_is_an_error() {
        let mut state = state();
        let err = state.open_book_detail(42).unwrap_err();
        assert!(matches!(err, BookstoreError::UnknownBook(42)));
        assert!(!state.modal.is_open());
    }

    #[test]
    fn dispatch_login_closes_login_overlay() {
        let mut state = state();
        state.modal.open_login();
        state.dispatch(SessionCommand::LoginSubmitted {
            username: "alice".to_string(),
            password: String::new(),
        });

        assert!(state.session.is_logged_in);
        assert_eq!(state.session.username, "alice");
        assert!(!state.modal.login_open());
    }

    #[test]
    fn dispatch_register_closes_register_overlay() {
        let mut state = state();
        state.modal.open_register();
        state.dispatch(SessionCommand::RegisterSubmitted {
            username: "bob".to_string(),
            password: "pw".to_string(),
        });

        assert_eq!(state.session.display_name(), Some("bob"));
        assert!(!state.modal.is_open());
    }

    #[test]
    fn pending_submission_reads_form_fields() {
        let mut state = state();
        assert!(state.pending_submission().is_none());

        state.modal.open_register();
        if let Some(form) = state.modal.active_form_mut() {
            form.push_char('e');
            form.next_field();
            form.push_char('s');
        }

        assert_eq!(
            state.pending_submission(),
            Some(SessionCommand::RegisterSubmitted {
                username: "e".to_string(),
                password: "s".to_string(),
            })
        );
    }

    #[test]
    fn input_mode_prefers_overlays() {
        let mut state = state();
        assert_eq!(state.input_mode(), InputMode::Browse);

        state.focus = Focus::SearchBar;
        assert_eq!(state.input_mode(), InputMode::Search);

        state.modal.open_login();
        assert_eq!(state.input_mode(), InputMode::Form);

        state.modal.open_book_detail(Catalog::builtin().books()[0].clone());
        assert_eq!(state.input_mode(), InputMode::Detail);
    }

    #[test]
    fn viewmodel_keeps_empty_sections() {
        let mut state = state();
        state.set_search_query("no such book");
        let vm = state.compute_viewmodel(30, 100);

        assert_eq!(vm.sections.len(), 2);
        assert_eq!(vm.sections[0].title, "Best Sellers");
        assert_eq!(vm.sections[1].title, "Trending");
        for section in &vm.sections {
            assert!(section.cards.is_empty());
            assert!(section.empty_state.is_some());
            assert!(!section.view_all.is_empty());
        }
    }

    #[test]
    fn viewmodel_marks_selection_and_highlights() {
        let mut state = state();
        state.set_search_query("nguyễn");
        state.move_selection_down();
        let vm = state.compute_viewmodel(30, 100);

        let trending = &vm.sections[1];
        let ids: Vec<u32> = trending.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(!trending.cards[0].is_selected);
        assert!(trending.cards[1].is_selected);
        assert_eq!(trending.cards[0].author_highlights, vec![(6, 12)]);
        assert_eq!(trending.cards[1].author_highlights, vec![(0, 6)]);
    }

    #[test]
    fn viewmodel_header_reflects_session_and_cart() {
        let mut state = state();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.account, AccountInfo::Guest);
        assert_eq!(vm.header.cart_count, 0);
        assert_eq!(vm.header.title, DEFAULT_STORE_NAME);

        state.session.login("alice");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.header.account,
            AccountInfo::LoggedIn {
                username: "alice".to_string()
            }
        );
        assert!(vm.footer.keybindings.contains("log out"));
    }

    #[test]
    fn viewmodel_masks_password() {
        let mut state = state();
        state.modal.open_login();
        if let Some(form) = state.modal.active_form_mut() {
            form.push_char('u');
            form.next_field();
            for c in "secret".chars() {
                form.push_char(c);
            }
        }

        let vm = state.compute_viewmodel(24, 80);
        let Some(OverlayInfo::Login(form)) = vm.overlay else {
            panic!("expected login overlay");
        };
        assert_eq!(form.username, "u");
        assert_eq!(form.masked_password, "******");
        assert_eq!(form.focus, FormField::Password);
    }

    #[test]
    fn viewmodel_book_detail_lists_metadata() {
        let mut state = state();
        state.open_book_detail(5).unwrap();
        let vm = state.compute_viewmodel(24, 80);

        let Some(OverlayInfo::BookDetail(detail)) = vm.overlay else {
            panic!("expected book detail overlay");
        };
        assert_eq!(detail.author, "Yuval Noah Harari");
        assert_eq!(detail.price, "209.000đ");
        assert!(detail
            .attributes
            .iter()
            .any(|(label, value)| label == "Pages" && value == "554"));
    }

    #[test]
    fn small_panes_window_around_selection() {
        let mut state = state();
        state.move_selection_down();
        state.move_selection_down();
        let vm = state.compute_viewmodel(14, 80);

        let best = &vm.sections[0];
        assert_eq!(best.cards.len(), 1);
        assert_eq!(best.cards[0].id, 5);
        assert!(best.cards[0].is_selected);
    }
}
