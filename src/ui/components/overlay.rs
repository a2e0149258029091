//! Overlay renderers for the login, register and book-detail modals.
//!
//! Overlays are framed boxes drawn last, on top of the storefront, centered
//! in the pane. Every line inside the frame is padded to the full inner
//! width so the storefront underneath never shows through.

use crate::app::modes::FormField;
use crate::ui::helpers::{char_len, position_cursor, truncate_chars, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookDetailInfo, FormInfo, OverlayInfo};

/// Widest an overlay box gets on large panes.
const MAX_WIDTH: usize = 64;

/// Description lines shown in the detail overlay before eliding.
const MAX_DESCRIPTION_LINES: usize = 6;

/// A styled line inside an overlay frame.
struct Line {
    text: String,
    color: Option<String>,
    bold: bool,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    fn colored(text: impl Into<String>, color: &str) -> Self {
        Self {
            text: text.into(),
            color: Some(color.to_string()),
            bold: false,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

/// Renders `overlay` centered in a `rows` x `cols` pane.
pub fn render_overlay(overlay: &OverlayInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    if width < 12 {
        return;
    }
    let inner = width - 4;

    let (title, lines) = match overlay {
        OverlayInfo::Login(form) | OverlayInfo::Register(form) => {
            (form.title.as_str(), form_lines(form, theme))
        }
        OverlayInfo::BookDetail(detail) => (detail.title.as_str(), detail_lines(detail, theme, inner)),
    };

    draw_frame(title, &lines, theme, rows, cols, width);
}

fn form_lines(form: &FormInfo, theme: &Theme) -> Vec<Line> {
    let field = |label: &str, value: &str, field: FormField| {
        let focused = form.focus == field;
        let marker = if focused { "▸" } else { " " };
        let cursor = if focused { "_" } else { "" };
        let line = format!("{marker} {label:<9} {value}{cursor}");
        if focused {
            Line::colored(line, &theme.colors.search_bar_border)
        } else {
            Line::plain(line)
        }
    };

    vec![
        Line::blank(),
        field("Username", &form.username, FormField::Username),
        field("Password", &form.masked_password, FormField::Password),
        Line::blank(),
        Line::colored(form.submit_label.clone(), &theme.colors.accent_fg).bold(),
        Line::blank(),
        Line::colored(form.switch_hint.clone(), &theme.colors.text_dim),
    ]
}

fn detail_lines(detail: &BookDetailInfo, theme: &Theme, inner: usize) -> Vec<Line> {
    let mut lines = vec![
        Line::colored(format!("by {}", detail.author), &theme.colors.text_dim),
        Line::blank(),
    ];

    let mut price = Line::colored(detail.price.clone(), &theme.colors.price_fg).bold();
    if detail.discount_percent > 0 {
        price.text = format!(
            "{}   was {}   save {} (-{}%)",
            detail.price, detail.old_price, detail.discount_price, detail.discount_percent
        );
    }
    lines.push(price);
    lines.push(Line::blank());

    let mut description = wrap_text(&detail.description, inner);
    if description.len() > MAX_DESCRIPTION_LINES {
        description.truncate(MAX_DESCRIPTION_LINES);
        if let Some(last) = description.last_mut() {
            *last = truncate_chars(&format!("{last} ..."), inner);
        }
    }
    let has_description = !description.is_empty();
    lines.extend(description.into_iter().map(Line::plain));
    if has_description {
        lines.push(Line::blank());
    }

    lines.extend(detail.attributes.iter().map(|(label, value)| {
        Line::colored(format!("{label:<10} {value}"), &theme.colors.text_normal)
    }));

    lines
}

fn draw_frame(title: &str, lines: &[Line], theme: &Theme, rows: usize, cols: usize, width: usize) {
    let inner = width - 4;
    let height = (lines.len() + 2).min(rows);
    let top = (rows.saturating_sub(height)) / 2 + 1;
    let left = (cols.saturating_sub(width)) / 2 + 1;

    let title = truncate_chars(&format!(" {title} "), width.saturating_sub(4));
    let border = Theme::fg(&theme.colors.modal_border);

    position_cursor(top, left);
    print!("{border}╭─");
    print!("{}{}", Theme::bold(), title);
    print!("{}{border}", Theme::reset());
    print!("{}╮", "─".repeat(width.saturating_sub(3 + char_len(&title))));
    print!("{}", Theme::reset());

    let body_rows = height.saturating_sub(2);
    for (offset, line) in lines.iter().take(body_rows).enumerate() {
        let text = truncate_chars(&line.text, inner);

        position_cursor(top + 1 + offset, left);
        print!("{border}│ ");
        print!("{}", Theme::reset());
        if line.bold {
            print!("{}", Theme::bold());
        }
        match &line.color {
            Some(color) => print!("{}", Theme::fg(color)),
            None => print!("{}", Theme::fg(&theme.colors.text_normal)),
        }
        print!("{text}");
        print!("{}", " ".repeat(inner.saturating_sub(char_len(&text))));
        print!("{}", Theme::reset());
        print!("{border} │");
        print!("{}", Theme::reset());
    }

    position_cursor(top + 1 + body_rows.min(lines.len()), left);
    print!("{border}╰{}╯", "─".repeat(width.saturating_sub(2)));
    print!("{}", Theme::reset());
}
