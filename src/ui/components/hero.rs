//! Hero banner renderer.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroInfo;

/// Renders the two-line promotional banner, centered.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_hero(row: usize, hero: &HeroInfo, theme: &Theme, cols: usize) -> usize {
    let headline_len = char_len(&hero.headline);
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", " ".repeat(cols.saturating_sub(headline_len) / 2));
    print!("{}", hero.headline);
    print!("{}", Theme::reset());

    let tagline_len = char_len(&hero.tagline);
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(tagline_len) / 2));
    print!("{}", hero.tagline);
    print!("{}", Theme::reset());

    row + 2
}
