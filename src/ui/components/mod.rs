//! Composable UI component renderers.
//!
//! Each component renders one part of the storefront at a given row and
//! returns the next free row, so the page is assembled top to bottom.
//!
//! # Components
//!
//! - [`header`]: Store name, account controls and cart badge
//! - [`search`]: Search input box
//! - [`hero`]: Promotional banner
//! - [`shelf`]: Curated shelf heading and book cards
//! - [`empty`]: Message shown in place of an empty shelf
//! - [`footer`]: Keybinding hints and store information
//! - [`overlay`]: Login, register and book-detail modals
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Search Bar - 3 lines]
//! [Border]
//! [Hero - 2 lines]
//! [Best Sellers heading]
//! [cards...]
//! [blank line]
//! [Trending heading]
//! [cards...]
//! [Border]
//! [Footer - 2 lines]
//! ```
//!
//! An open overlay is drawn last, centered on top of this layout.

mod empty;
mod footer;
mod header;
mod hero;
mod overlay;
mod search;
mod shelf;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use hero::render_hero;
use overlay::render_overlay;
use search::render_search_bar;
use shelf::render_section;

/// Rows used by everything except book cards: blank, header, search box (3),
/// border, hero (2), two shelf headings, blank between shelves, border and
/// footer (2).
pub const CHROME_ROWS: usize = 14;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole storefront page, then the overlay if one is open.
pub fn render_storefront(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_search_bar(current_row, &vm.header.search, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_hero(current_row, &vm.hero, theme, cols);

    let section_count = vm.sections.len().max(1);
    let cards_height = (rows.saturating_sub(CHROME_ROWS) / section_count).max(1);

    for (index, section) in vm.sections.iter().enumerate() {
        if index > 0 {
            current_row += 1;
        }
        current_row = render_section(current_row, section, theme, cols, cards_height);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if border_row >= current_row {
        render_border(border_row, &theme.colors.border, cols);
        render_footer(footer_start, &vm.footer, theme, cols);
    }

    if let Some(overlay) = &vm.overlay {
        render_overlay(overlay, theme, rows, cols);
    }
}
