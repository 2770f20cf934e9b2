//! Markup serialization of the element tree.
//!
//! Text nodes and attribute values go through `quick_xml`'s escaping, so a
//! node called `<script>` shows up as that literal text in a browser.

use crate::domain::{NodeListError, Result};
use crate::ui::element::{Child, Element};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serializes `element` and its subtree to HTML.
///
/// ```
/// use nodelist::ui::element::create_item;
/// use nodelist::ui::html::to_html;
///
/// let html = to_html(&create_item("7", "a & b"))?;
/// assert_eq!(
///     html,
///     "<div id=\"7\" class=\"node-list-item\">\
///      <div class=\"node-list-item-label\">a &amp; b</div>\
///      <button id=\"7\" class=\"btn\"><i class=\"bi bi-x-lg\"></i></button>\
///      </div>"
/// );
/// # Ok::<(), nodelist::NodeListError>(())
/// ```
///
/// # Errors
///
/// Returns [`NodeListError::Markup`] if the writer fails, which an in-memory
/// buffer does not do in practice.
pub fn to_html(element: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;

    String::from_utf8(writer.into_inner()).map_err(|e| NodeListError::Markup(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag());
    if let Some(id) = element.id() {
        start.push_attribute(("id", id));
    }
    if !element.classes().is_empty() {
        start.push_attribute(("class", element.classes().join(" ").as_str()));
    }
    write_event(writer, Event::Start(start))?;

    for child in element.children() {
        match child {
            Child::Element(child) => write_element(writer, child)?,
            Child::Text(text) => write_event(writer, Event::Text(BytesText::new(text)))?,
        }
    }

    write_event(writer, Event::End(BytesEnd::new(element.tag())))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| NodeListError::Markup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::element::create_item;

    #[test]
    fn escapes_hostile_names() {
        let html = to_html(&create_item("1", "<img src=x onerror=alert(1)>")).unwrap();
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn escapes_ids() {
        let html = to_html(&create_item("\"><x", "n")).unwrap();
        assert!(html.contains("&lt;x"));
        assert!(!html.contains("\"><x"));
    }

    #[test]
    fn empty_container() {
        assert_eq!(
            to_html(&Element::container()).unwrap(),
            "<div id=\"node-list-container\"></div>"
        );
    }
}
