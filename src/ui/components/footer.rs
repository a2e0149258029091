//! Footer component renderer.
//!
//! Two centered lines: keybinding hints for the current input mode and the
//! static store contact line.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.keybindings, &theme.colors.text_dim, cols);
    print!("{}", Theme::dim());
    render_centered(row + 1, &footer.store_info, &theme.colors.text_dim, cols);
    row + 2
}

fn render_centered(row: usize, text: &str, color: &str, cols: usize) {
    let text = truncate_chars(text, cols);
    let text_len = char_len(&text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
