//! Element tree for the rendered node list.
//!
//! The pane's list is kept as a small element tree shaped like the markup the
//! web editor uses: a container `div` holding one item per visible node. The
//! terminal renderer reads the item labels back out of this tree, and
//! [`to_html`](crate::ui::html::to_html) serializes it for web hosts.
//!
//! Text is stored as text nodes, never as markup, so node names cannot inject
//! elements.

/// DOM id of the list container.
pub const CONTAINER_ID: &str = "node-list-container";

/// Class carried by every list item.
pub const ITEM_CLASS: &str = "node-list-item";

/// Class carried by the label inside a list item.
pub const LABEL_CLASS: &str = "node-list-item-label";

/// A child of an [`Element`]: either a nested element or a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Element),
    Text(String),
}

/// A minimal element: tag, optional id, classes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<&'static str>,
    children: Vec<Child>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates the empty list container.
    #[must_use]
    pub fn container() -> Self {
        Self::new("div").with_id(CONTAINER_ID)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Replaces all children with a single text node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = vec![Child::Text(text.into())];
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.append(child);
        self
    }

    pub fn append(&mut self, child: Self) {
        self.children.push(Child::Element(child));
    }

    /// Removes every child. Safe to call on an empty element.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Iterates over element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(element) => Some(element),
            Child::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(element) => element.collect_text(out),
            }
        }
    }

    /// First descendant (depth-first, self included) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find_by_class(class))
    }
}

/// Builds the list item for one node.
///
/// ```text
/// div#<id>.node-list-item
/// ├── div.node-list-item-label   (text: name)
/// └── button#<id>.btn
///     └── i.bi.bi-x-lg
/// ```
///
/// The button carries no behavior; whoever hosts the list wires deletion to
/// it by id.
#[must_use]
pub fn create_item(id: &str, name: &str) -> Element {
    let label = Element::new("div").with_class(LABEL_CLASS).with_text(name);

    let icon = Element::new("i").with_class("bi").with_class("bi-x-lg");
    let delete_button = Element::new("button")
        .with_class("btn")
        .with_id(id)
        .with_child(icon);

    Element::new("div")
        .with_id(id)
        .with_class(ITEM_CLASS)
        .with_child(label)
        .with_child(delete_button)
}

/// Label text of a list item built by [`create_item`].
#[must_use]
pub fn item_label(item: &Element) -> String {
    item.find_by_class(LABEL_CLASS)
        .map(Element::text_content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_has_label_and_delete_button_tagged_with_uuid() {
        let item = create_item("n-1", "router");

        assert_eq!(item.tag(), "div");
        assert_eq!(item.id(), Some("n-1"));
        assert!(item.has_class(ITEM_CLASS));

        let children: Vec<&Element> = item.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].classes(), [LABEL_CLASS]);
        assert_eq!(children[0].text_content(), "router");

        assert_eq!(children[1].tag(), "button");
        assert_eq!(children[1].id(), Some("n-1"));
        let icon = children[1].child_elements().next().unwrap();
        assert_eq!(icon.tag(), "i");
        assert_eq!(icon.classes(), ["bi", "bi-x-lg"]);
    }

    #[test]
    fn markup_in_names_stays_text() {
        let item = create_item("x", "<b>bold</b>");
        let label = item.find_by_class(LABEL_CLASS).unwrap();
        assert_eq!(label.children(), [Child::Text("<b>bold</b>".to_string())]);
        assert_eq!(item_label(&item), "<b>bold</b>");
    }

    #[test]
    fn clearing_is_idempotent() {
        let mut container = Element::container().with_child(create_item("1", "a"));
        container.clear_children();
        container.clear_children();
        assert!(container.children().is_empty());
        assert_eq!(container.id(), Some(CONTAINER_ID));
    }
}
