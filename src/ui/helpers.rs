//! Shared rendering utilities and helpers.
//!
//! Low-level utilities used across the UI components: cursor positioning,
//! search-match highlighting and a few text measuring helpers.
//!
//! All width calculations count `char`s, not bytes, so Vietnamese titles
//! such as "Đắc Nhân Tâm" line up with ASCII ones. Characters are assumed to
//! occupy a single terminal cell.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` characters, ending with "..." when shortened.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Greedy word wrap of `text` into lines of at most `width` characters.
///
/// Words longer than `width` are split. Returns no lines for blank text.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            char_len(&current) + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` char indices with exclusive end. When
/// `is_selected` is true the text is printed plain so the highlight does not
/// fight the selection background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_multibyte_text() {
        assert_eq!(truncate_chars("Đắc Nhân Tâm", 20), "Đắc Nhân Tâm");
        assert_eq!(truncate_chars("Đắc Nhân Tâm", 6), "Đắc...");
        assert_eq!(char_len("Nguyễn"), 6);
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text("Cuốn sách nổi tiếng nhất mọi thời đại", 12);
        assert_eq!(lines, vec!["Cuốn sách", "nổi tiếng", "nhất mọi", "thời đại"]);
        assert!(lines.iter().all(|l| char_len(l) <= 12));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }
}
