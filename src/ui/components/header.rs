//! Header component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title on the left and the update age on the right.
///
/// Returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let updated = header.updated.as_deref().unwrap_or_default();
    let updated_len = updated.chars().count();
    let show_updated = title_len + updated_len + 1 <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    let title: String = header.title.chars().take(cols).collect();
    print!("{title}");

    if show_updated {
        print!("{}", " ".repeat(cols - title_len - updated_len - 1));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{updated} ");
    } else {
        print!("{}", " ".repeat(cols - title_len));
    }

    print!("{}", Theme::reset());
    row + 1
}
