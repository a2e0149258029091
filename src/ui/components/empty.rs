//! Empty shelf renderer.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty-shelf message in place of the book cards.
///
/// The message uses `empty_state_fg`; the subtitle is only drawn when
/// `height` leaves room for a second line.
///
/// # Returns
///
/// The next available row position.
pub fn render_empty_state(
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    height: usize,
) -> usize {
    let msg_len = char_len(&empty.message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    if height < 2 {
        return row + 1;
    }

    let sub_len = char_len(&empty.subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}
