//! Book shelf component renderer.
//!
//! A shelf is a heading line ("Best Sellers" on the left, "view all >" on the
//! right) followed by one line per book card. Shelves render their heading
//! even when no card survives the search filter; the empty-state message
//! takes the place of the cards.

use super::empty::render_empty_state;
use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookCard, SectionInfo};

/// Columns reserved on the right of each card for the price block.
const PRICE_BLOCK: usize = 28;

/// Renders a shelf starting at `row`, using at most `height` lines for cards.
///
/// # Returns
///
/// The next available row position (always `row + 1 + height`, so the next
/// shelf starts at a stable position regardless of how many cards matched).
pub fn render_section(
    row: usize,
    section: &SectionInfo,
    theme: &Theme,
    cols: usize,
    height: usize,
) -> usize {
    render_section_heading(row, section, theme, cols);

    let cards_row = row + 1;
    if let Some(empty) = &section.empty_state {
        render_empty_state(cards_row, empty, theme, cols, height);
    } else {
        for (offset, card) in section.cards.iter().take(height).enumerate() {
            render_card(cards_row + offset, card, theme, cols);
        }
    }

    cards_row + height
}

fn render_section_heading(row: usize, section: &SectionInfo, theme: &Theme, cols: usize) {
    let title = format!(" {}", section.title);
    let view_all = format!("{} ", section.view_all);
    let gap = cols.saturating_sub(char_len(&title) + char_len(&view_all));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{view_all}");
    print!("{}", Theme::reset());
}

/// Renders a single card line.
///
/// # Layout
///
/// ```text
///  ▸ Đắc Nhân Tâm   Dale Carnegie            86.000đ  108.000đ  -20%
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
fn render_card(row: usize, card: &BookCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!(" ▸ ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("   ");
    }

    helpers::render_highlighted_text(&card.title, &card.title_highlights, theme, card.is_selected);
    print!("   ");

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    helpers::render_highlighted_text(&card.author, &card.author_highlights, theme, card.is_selected);

    let text_len = 3 + char_len(&card.title) + 3 + char_len(&card.author);
    let price_start = cols.saturating_sub(PRICE_BLOCK).max(text_len + 1);
    print!("{}", " ".repeat(price_start - text_len));

    let mut used = price_start;
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{}", Theme::bold());
    print!("{}", card.price);
    used += char_len(&card.price);

    if card.discount_percent > 0 {
        print!("{}", Theme::reset());
        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.old_price_fg));
        }
        print!("  ");
        print!("{}", Theme::strike());
        print!("{}", card.old_price);
        print!("{}", Theme::reset());
        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
        }
        let badge = format!("  -{}%", card.discount_percent);
        print!("{badge}");
        used += 2 + char_len(&card.old_price) + char_len(&badge);
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}
