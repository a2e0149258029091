//! Header component renderer.
//!
//! The header bar shows the store name on the left and the account controls
//! plus cart badge on the right.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AccountInfo, HeaderInfo};

/// Renders the header bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  BookStore                         [l] Log in  [r] Register  Cart (0)
///  BookStore                           Hi, alice  [o] Log out  Cart (0)
/// ```
///
/// The right-hand controls are dropped on panes too narrow to hold both
/// sides; the title always renders.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let account = account_text(&header.account);
    let cart = format!("Cart ({}) ", header.cart_count);

    let title_len = char_len(&title);
    let right_len = char_len(&account) + 2 + char_len(&cart);
    let show_right = title_len + right_len < cols;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if show_right {
        print!("{}", " ".repeat(cols - title_len - right_len));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{account}  ");
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{cart}");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}

fn account_text(account: &AccountInfo) -> String {
    match account {
        AccountInfo::Guest => "[l] Log in  [r] Register".to_string(),
        AccountInfo::LoggedIn { username } => format!("Hi, {username}  [o] Log out"),
    }
}
