//! Node list renderer.
//!
//! One row per node: the label, padded to the label column, then the delete
//! glyph flush right.

use super::DELETE_GLYPH;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders all rows starting at `row`, returning the next free row.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let label_width = helpers::label_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" ");
    helpers::render_highlighted_text(&item.label, item.highlight, theme);
    print!("{}", " ".repeat(label_width.saturating_sub(item.label.chars().count())));

    print!("{}", Theme::fg(&theme.colors.delete_button_fg));
    print!("{DELETE_GLYPH}");
    print!("{}", Theme::reset());
    row + 1
}
