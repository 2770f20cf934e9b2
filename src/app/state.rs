//! Node list state and view derivation.
//!
//! [`NodeListState`] owns everything the pane remembers between signals: the
//! authoritative full list from the last accepted update, the current filter
//! text, and the rendered element tree. The visible subset is always derived
//! from the full list; rendering never writes back into it, so repeated
//! filtering cannot lose nodes.
//!
//! # Derivation
//!
//! ```text
//! full list ──filter (name contains text)──▶ kept ──sort (ordinal by name)──▶ visible
//!                                                                               │
//!                                                         create_item per node ─┘──▶ container
//! ```
//!
//! # Example
//!
//! ```rust
//! use nodelist::app::NodeListState;
//! use nodelist::domain::{Node, NodeList};
//! use nodelist::ui::Theme;
//!
//! let mut state = NodeListState::new(Theme::default());
//! let list = NodeList::new(vec![Node::new("1", "b"), Node::new("2", "a")]).unwrap();
//! state.apply_update(list, 0);
//!
//! let names: Vec<&str> = state.visible().iter().map(|n| n.display_name()).collect();
//! assert_eq!(names, ["a", "b"]);
//! ```

use crate::domain::{Node, NodeList};
use crate::ui::components::LIST_CHROME_ROWS;
use crate::ui::element::{self, Element};
use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, UIViewModel,
};

/// Key hints shown in the footer.
const KEY_HINTS: &str = "Type: filter  Esc: clear  Up/Down: scroll  Click [x]: delete  Ctrl+c: hide";

/// Central state of the node list pane.
#[derive(Debug, Clone)]
pub struct NodeListState {
    /// Last accepted node list, exactly as received.
    ///
    /// `None` until the first non-empty update. Replaced wholesale by each
    /// later update and never touched by filtering.
    full_list: Option<NodeList>,

    /// Text of the filter field as of the last keystroke.
    filter: Option<String>,

    /// Rendered list: one item per visible node, in visible order.
    container: Element,

    /// Nodes behind the container's items, filtered and sorted.
    visible: Vec<Node>,

    /// Unix timestamp of the last accepted update.
    updated_at: Option<i64>,

    /// Index of the first visible node shown in the pane.
    scroll_offset: usize,

    /// Color scheme for terminal rendering.
    pub theme: Theme,
}

impl NodeListState {
    /// Creates an empty state: no list received, no filter, empty container.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            full_list: None,
            filter: None,
            container: Element::container(),
            visible: Vec::new(),
            updated_at: None,
            scroll_offset: 0,
            theme,
        }
    }

    #[must_use]
    pub const fn full_list(&self) -> Option<&NodeList> {
        self.full_list.as_ref()
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The rendered list container.
    #[must_use]
    pub const fn container(&self) -> &Element {
        &self.container
    }

    /// Nodes currently rendered, in display order.
    #[must_use]
    pub fn visible(&self) -> &[Node] {
        &self.visible
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Replaces the full list and renders it unfiltered.
    ///
    /// The filter is reset: an update always shows every node, whatever was
    /// typed before. Returns whether a render happened, which is always the
    /// case because `list` is non-empty.
    pub fn apply_update(&mut self, list: NodeList, received_at: i64) -> bool {
        tracing::debug!(
            node_count = list.len(),
            previous_count = self.full_list.as_ref().map_or(0, NodeList::len),
            "replacing full node list"
        );

        self.full_list = Some(list);
        self.filter = None;
        self.updated_at = Some(received_at);
        self.scroll_offset = 0;
        self.render()
    }

    /// Stores the filter field text and re-renders the cached list.
    ///
    /// Returns `false` when no list has been received yet.
    pub fn apply_filter(&mut self, text: &str) -> bool {
        self.filter = Some(text.to_string());
        self.scroll_offset = 0;
        self.render()
    }

    /// Drops the filter and re-renders the cached list.
    ///
    /// Returns `false` when no list has been received yet.
    pub fn clear_filter(&mut self) -> bool {
        self.filter = None;
        self.scroll_offset = 0;
        self.render()
    }

    /// Rebuilds the container from the full list and the current filter.
    ///
    /// Without a full list this is a no-op returning `false`; the previous
    /// container is left alone.
    pub fn render(&mut self) -> bool {
        let Some(list) = &self.full_list else {
            tracing::debug!("no node list received yet, skipping render");
            return false;
        };

        let _span = tracing::debug_span!(
            "render_node_list",
            total_nodes = list.len(),
            filter_len = self.filter.as_ref().map_or(0, String::len)
        )
        .entered();

        let visible = visible_nodes(list, self.filter.as_deref());

        self.container.clear_children();
        for node in &visible {
            self.container
                .append(element::create_item(&node.uuid, node.display_name()));
        }

        tracing::debug!(visible_count = visible.len(), "node list rendered");
        self.visible = visible;
        true
    }

    /// Looks up a rendered node by uuid.
    #[must_use]
    pub fn rendered_node(&self, uuid: &str) -> Option<&Node> {
        self.visible.iter().find(|node| node.uuid == uuid)
    }

    /// Scrolls one row down, stopping once the last node is on screen.
    pub fn scroll_down(&mut self, pane_rows: usize) {
        let page = Self::list_rows(pane_rows);
        let max_offset = self.visible.len().saturating_sub(page);
        self.scroll_offset = (self.scroll_offset + 1).min(max_offset);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Computes the terminal view model for a pane of `rows` x `cols`.
    ///
    /// Items are read back from the rendered container, so the pane shows
    /// exactly what the element tree holds. `now` is the current Unix time,
    /// used for the "updated ... ago" header note.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let header = self.compute_header(now);
        let footer = FooterInfo {
            keybindings: KEY_HINTS.to_string(),
        };
        let filter_bar = FilterBarInfo {
            query: self.filter.clone().unwrap_or_default(),
        };

        if let Some(empty_state) = self.compute_empty_state() {
            return UIViewModel {
                display_items: vec![],
                header,
                footer,
                empty_state: Some(empty_state),
                filter_bar,
            };
        }

        let available_rows = Self::list_rows(rows);
        let total = self.visible.len();
        let start = self.scroll_offset.min(total.saturating_sub(available_rows));

        let display_items = self
            .container
            .child_elements()
            .skip(start)
            .take(available_rows)
            .map(|item| self.compute_display_item(item, cols))
            .collect();

        UIViewModel {
            display_items,
            header,
            footer,
            empty_state: None,
            filter_bar,
        }
    }

    fn compute_display_item(&self, item: &Element, cols: usize) -> DisplayItem {
        let label_width = helpers::label_width(cols);
        let label = helpers::truncate_label(&helpers::sanitize_label(&element::item_label(item)), label_width);

        let highlight = active_filter(self.filter.as_deref())
            .and_then(|needle| helpers::highlight_range(&label, needle));

        DisplayItem {
            uuid: item.id().unwrap_or_default().to_string(),
            label,
            highlight,
        }
    }

    fn compute_header(&self, now: i64) -> HeaderInfo {
        let title = self.full_list.as_ref().map_or_else(
            || " Nodes ".to_string(),
            |list| format!(" Nodes ({}/{}) ", self.visible.len(), list.len()),
        );

        HeaderInfo {
            title,
            updated: self
                .updated_at
                .map(|at| format!("updated {}", helpers::time_ago(at, now))),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.full_list.is_none() {
            return Some(EmptyState {
                message: "Waiting for nodes".to_string(),
                subtitle: "The network editor has not published a node list yet".to_string(),
            });
        }

        if self.visible.is_empty() {
            let filter = self.filter.as_deref().unwrap_or_default();
            return Some(EmptyState {
                message: "No matching nodes".to_string(),
                subtitle: format!("No node name contains \"{}\"", helpers::sanitize_label(filter)),
            });
        }

        None
    }

    const fn list_rows(pane_rows: usize) -> usize {
        pane_rows.saturating_sub(LIST_CHROME_ROWS)
    }
}

/// Returns the filter if it has anything but whitespace.
///
/// The returned text is untrimmed: `" a"` filters on `" a"`.
#[must_use]
pub fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|text| !text.trim().is_empty())
}

/// Filters `list` by name substring and sorts the result by name.
///
/// With no active filter every node is kept, unnamed ones included. With a
/// filter, a node is kept iff its name is present and contains the filter
/// text (case-sensitive). The sort is ordinal and stable.
#[must_use]
pub fn visible_nodes(list: &NodeList, filter: Option<&str>) -> Vec<Node> {
    let mut nodes: Vec<Node> = match active_filter(filter) {
        Some(needle) => list
            .iter()
            .filter(|node| node.name_contains(needle))
            .cloned()
            .collect(),
        None => list.iter().cloned().collect(),
    };

    nodes.sort_by(Node::cmp_by_name);
    nodes
}
