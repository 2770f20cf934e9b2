//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, filter-match highlighting, and the small text
//! transformations the view model applies to node labels before they reach
//! the terminal.

use crate::ui::components::DELETE_COLUMN_WIDTH;
use crate::ui::theme::Theme;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the character range `range` in match colors.
///
/// `range` is `(start, end)` in character indices, end exclusive. An end past
/// the text is clamped.
pub fn render_highlighted_text(text: &str, range: Option<(usize, usize)>, theme: &Theme) {
    let Some((start, end)) = range else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{after}");
}

/// Width left for a node label in a pane `cols` wide.
///
/// One leading space plus the delete column are reserved.
#[must_use]
pub const fn label_width(cols: usize) -> usize {
    cols.saturating_sub(1 + DELETE_COLUMN_WIDTH)
}

/// Replaces control characters so a label cannot move the cursor.
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Shortens `label` to at most `width` characters, ending in `...` when cut.
#[must_use]
pub fn truncate_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    if width < 3 {
        return label.chars().take(width).collect();
    }

    let mut truncated: String = label.chars().take(width - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Character range of the first occurrence of `needle` in `label`.
#[must_use]
pub fn highlight_range(label: &str, needle: &str) -> Option<(usize, usize)> {
    let byte_start = label.find(needle)?;
    let start = label[..byte_start].chars().count();
    Some((start, start + needle.chars().count()))
}

/// Human-readable age of `timestamp` relative to `now`.
///
/// - under a minute: "just now"
/// - under an hour: "Xm ago"
/// - under a day: "Xh ago"
/// - otherwise: "Xd ago"
#[must_use]
pub fn time_ago(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("ééééééé", 5), "éé...");
        assert_eq!(truncate_label("abcdef", 2), "ab");
    }

    #[test]
    fn highlight_uses_char_indices() {
        assert_eq!(highlight_range("über-router", "router"), Some((5, 11)));
        assert_eq!(highlight_range("router", "x"), None);
    }

    #[test]
    fn control_characters_become_spaces() {
        assert_eq!(sanitize_label("a\u{1b}[2Jb\n"), "a [2Jb ");
    }

    #[test]
    fn ages() {
        assert_eq!(time_ago(1000, 1010), "just now");
        assert_eq!(time_ago(0, 300), "5m ago");
        assert_eq!(time_ago(0, 3 * 3600), "3h ago");
        assert_eq!(time_ago(0, 7 * 86400), "7d ago");
    }

    #[test]
    fn label_width_reserves_delete_column() {
        assert_eq!(label_width(80), 80 - 1 - DELETE_COLUMN_WIDTH);
        assert_eq!(label_width(2), 0);
    }
}
