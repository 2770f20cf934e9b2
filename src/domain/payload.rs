//! Decoding of `updateNodeList` payloads.
//!
//! The editor sends `{"detail": {"nodeList": [...]}}`. Older editor builds put
//! the array straight into `detail`; both shapes are accepted. Anything that
//! does not yield at least one node decodes to `None`, which the update
//! handler treats as "ignore".

use super::error::Result;
use super::node::{Node, NodeList};
use serde::Deserialize;
use serde_json::Value;

/// Decodes a raw payload string into a node list.
///
/// # Errors
///
/// Returns [`NodeListError::Payload`](super::NodeListError::Payload) if the
/// payload is not JSON at all. Valid JSON of the wrong shape is `Ok(None)`.
///
/// # Example
///
/// ```
/// use nodelist::domain::decode_update;
///
/// let list = decode_update(r#"{"detail":{"nodeList":[{"uuid":"1","name":"a"}]}}"#)?;
/// assert_eq!(list.map(|l| l.len()), Some(1));
///
/// assert!(decode_update(r#"{"detail":{"nodeList":[]}}"#)?.is_none());
/// assert!(decode_update("null")?.is_none());
/// # Ok::<(), nodelist::NodeListError>(())
/// ```
pub fn decode_update(payload: &str) -> Result<Option<NodeList>> {
    let value: Value = serde_json::from_str(payload)?;

    let nodes = match value.get("detail") {
        Some(detail @ Value::Array(_)) => Some(detail),
        Some(Value::Object(detail)) => detail.get("nodeList"),
        _ => None,
    };

    Ok(nodes.and_then(decode_node_list))
}

/// Decodes a JSON array of nodes, dropping entries that are not nodes.
///
/// An entry is kept when it is an object with a string `uuid`; its `name` may
/// be missing or `null`. Returns `None` for non-arrays and for arrays with no
/// usable entry.
#[must_use]
pub fn decode_node_list(value: &Value) -> Option<NodeList> {
    let Value::Array(entries) = value else {
        tracing::debug!(kind = value_kind(value), "node list is not an array");
        return None;
    };

    let nodes: Vec<Node> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Node::deserialize(entry) {
            Ok(node) => Some(node),
            Err(e) => {
                tracing::debug!(index, error = %e, "dropping malformed node entry");
                None
            }
        })
        .collect();

    NodeList::new(nodes)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_nested_node_list() {
        let list = decode_update(
            r#"{"detail":{"nodeList":[{"uuid":"1","name":"Beta"},{"uuid":"2","name":"alpha"}]}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0], Node::new("1", "Beta"));
    }

    #[test]
    fn accepts_array_directly_in_detail() {
        let list = decode_update(r#"{"detail":[{"uuid":"1","name":"a"}]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ignores_missing_null_empty_and_non_array_lists() {
        for payload in [
            "{}",
            "null",
            "[]",
            r#"{"detail":null}"#,
            r#"{"detail":{}}"#,
            r#"{"detail":{"nodeList":null}}"#,
            r#"{"detail":{"nodeList":[]}}"#,
            r#"{"detail":{"nodeList":"nodes"}}"#,
            r#"{"detail":{"nodeList":{"uuid":"1"}}}"#,
        ] {
            assert!(decode_update(payload).unwrap().is_none(), "{payload}");
        }
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(decode_update("{\"detail\":").is_err());
    }

    #[test]
    fn drops_entries_without_uuid() {
        let value = json!([
            {"uuid": "1", "name": "kept"},
            {"name": "no uuid"},
            null,
            42,
            {"uuid": 7, "name": "numeric uuid"},
            {"uuid": "2"}
        ]);
        let list = decode_node_list(&value).unwrap();
        let uuids: Vec<&str> = list.iter().map(|n| n.uuid.as_str()).collect();
        assert_eq!(uuids, ["1", "2"]);
    }

    #[test]
    fn all_malformed_entries_decode_to_none() {
        assert!(decode_node_list(&json!([null, {"name": "x"}])).is_none());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let list = decode_node_list(&json!([
            {"uuid": "1", "name": "a", "x_pos": 3.5, "entry_node": true}
        ]))
        .unwrap();
        assert_eq!(list.as_slice()[0], Node::new("1", "a"));
    }
}
