//! Node model and the non-empty node list.
//!
//! A [`Node`] is the editor's entity as this pane sees it: a stable uuid and a
//! display name. The editor owns the real model; the pane only keeps the copy
//! from the most recent update.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entity of the network editor, shown as one row.
///
/// `name` is optional because payload entries may omit it or send `null`.
/// Such nodes never match a filter but still show up when no filter is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Node {
    /// Creates a named node.
    #[must_use]
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: Some(name.into()),
        }
    }

    /// Creates a node without a display name.
    #[must_use]
    pub fn unnamed(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
        }
    }

    /// Returns `true` if the name is present and contains `needle`.
    ///
    /// Matching is a case-sensitive substring test on the raw UTF-8 text.
    ///
    /// ```
    /// use nodelist::domain::Node;
    ///
    /// assert!(Node::new("1", "Alan").name_contains("Al"));
    /// assert!(!Node::new("1", "Alan").name_contains("al"));
    /// assert!(!Node::unnamed("2").name_contains(""));
    /// ```
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.as_deref().is_some_and(|name| name.contains(needle))
    }

    /// Ordinal ordering by name; unnamed nodes sort before named ones.
    #[must_use]
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.as_deref().cmp(&other.name.as_deref())
    }

    /// Name used for display, empty when the node has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A node list known to hold at least one node.
///
/// Updates carrying no nodes are ignored by the pane, so the cached full list
/// is always an `Option<NodeList>` rather than a possibly-empty vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList(Vec<Node>);

#[allow(clippy::len_without_is_empty)]
impl NodeList {
    /// Wraps `nodes`, or returns `None` when the vector is empty.
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self(nodes))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
