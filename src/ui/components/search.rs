//! Search bar component renderer.
//!
//! A bordered input box under the header. The border is drawn in the accent
//! color while the box has keyboard focus and dimmed otherwise.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Placeholder shown while the query is empty.
const PLACEHOLDER: &str = "Search by title or author (press /)";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: nguyễn_  │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (search_text, text_color) = if search.query.is_empty() && !search.is_focused {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_focused { "_" } else { "" };
        (
            format!(" Search: {}{cursor}", search.query),
            &theme.colors.text_normal,
        )
    };
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
