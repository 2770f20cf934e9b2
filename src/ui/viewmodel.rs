//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`NodeListState::compute_viewmodel`](crate::app::NodeListState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings only.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows of the visible window of the list.
    pub display_items: Vec<DisplayItem>,

    /// Header information (title, update age).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Message shown instead of the list when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Current filter field contents.
    pub filter_bar: FilterBarInfo,
}

/// One node row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Node uuid, the target of the row's delete glyph.
    pub uuid: String,

    /// Sanitized, width-limited node name.
    pub label: String,

    /// Character range of the filter match inside `label`, end exclusive.
    pub highlight: Option<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with visible and total counts.
    pub title: String,

    /// "updated 5m ago" once a list has arrived.
    pub updated: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching nodes").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Filter bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub query: String,
}
