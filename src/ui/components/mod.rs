//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title with node counts and update age
//! - [`filter`]: Filter field box
//! - [`list`]: Node rows with delete glyphs
//! - [`empty`]: Message shown when no rows are visible
//! - [`footer`]: Key hints
//!
//! # Layout
//!
//! ```text
//! row 1      [blank]
//! row 2      [Header]
//! row 3      [Border]
//! rows 4-6   [Filter box]
//! rows 7..   [Node rows | empty state]
//! rows-1     [Border]
//! rows       [Footer]
//! ```

mod empty;
mod filter;
mod footer;
mod header;
mod list;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter::render_filter_bar;
use footer::render_footer;
use header::render_header;
use list::render_list_rows;

/// Rows taken by everything except the node rows.
pub const LIST_CHROME_ROWS: usize = 8;

/// Terminal row (1-indexed) of the first node row.
pub const LIST_START_ROW: usize = 7;

/// Width of the delete glyph column at the right edge of each row.
pub const DELETE_COLUMN_WIDTH: usize = 5;

/// Delete glyph as painted, padded to [`DELETE_COLUMN_WIDTH`].
pub const DELETE_GLYPH: &str = " [x] ";

/// Renders a horizontal border line at `row`, returning the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane.
pub fn render_pane(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_list_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Resolves a mouse click to the uuid whose delete glyph was hit.
///
/// `line` and `col` are the 0-indexed pane coordinates Zellij reports.
#[must_use]
pub fn delete_target(vm: &UIViewModel, line: usize, col: usize, cols: usize) -> Option<&str> {
    if col < cols.saturating_sub(DELETE_COLUMN_WIDTH) || col >= cols {
        return None;
    }

    let index = (line + 1).checked_sub(LIST_START_ROW)?;
    vm.display_items.get(index).map(|item| item.uuid.as_str())
}
