//! End-to-end behavior of the node list view, driven through the signal bus.

use nodelist::ui::element::item_label;
use nodelist::ui::to_html;
use nodelist::{initialize, node_list_bus, Action, Config, Node, NodeList, NodeListState, Signal, SignalBus};
use proptest::prelude::*;
use serde_json::json;

fn setup() -> (NodeListState, SignalBus<NodeListState>) {
    (initialize(&Config::default()), node_list_bus())
}

fn update_payload(nodes: &[(&str, &str)]) -> String {
    let list: Vec<_> = nodes
        .iter()
        .map(|(uuid, name)| json!({ "uuid": uuid, "name": name }))
        .collect();
    json!({ "detail": { "nodeList": list } }).to_string()
}

fn labels(state: &NodeListState) -> Vec<String> {
    state.container().child_elements().map(item_label).collect()
}

fn ids(state: &NodeListState) -> Vec<String> {
    state
        .container()
        .child_elements()
        .filter_map(|item| item.id().map(str::to_string))
        .collect()
}

#[test]
fn update_renders_all_nodes_in_ordinal_name_order() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "Beta"), ("2", "alpha"), ("3", "Gamma")]);

    let (render, actions) = bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(labels(&state), ["Beta", "Gamma", "alpha"]);
    assert_eq!(ids(&state), ["1", "3", "2"]);
}

#[test]
fn keyup_filters_case_sensitively() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "Alice"), ("2", "Bob"), ("3", "Alan")]);
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();

    bus.dispatch(&mut state, Signal::KeyUp, "al").unwrap();
    assert!(labels(&state).is_empty());

    bus.dispatch(&mut state, Signal::KeyUp, "Al").unwrap();
    assert_eq!(labels(&state), ["Alan", "Alice"]);
}

#[test]
fn search_clear_restores_full_sorted_list() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "c"), ("2", "a"), ("3", "b")]);
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();
    bus.dispatch(&mut state, Signal::KeyUp, "b").unwrap();
    assert_eq!(labels(&state), ["b"]);

    bus.dispatch(&mut state, Signal::Search, "").unwrap();
    assert_eq!(labels(&state), ["a", "b", "c"]);
}

#[test]
fn empty_null_and_non_array_updates_leave_view_unchanged() {
    let (mut state, mut bus) = setup();
    bus.dispatch(&mut state, Signal::UpdateNodeList, &update_payload(&[("1", "x")]))
        .unwrap();
    let before = state.container().clone();

    for payload in [
        r#"{"detail":{"nodeList":[]}}"#,
        r#"{"detail":{"nodeList":null}}"#,
        r#"{"detail":{"nodeList":"router"}}"#,
        r#"{"detail":null}"#,
        "null",
    ] {
        let (render, _) = bus.dispatch(&mut state, Signal::UpdateNodeList, payload).unwrap();
        assert!(!render, "{payload}");
        assert_eq!(state.container(), &before, "{payload}");
    }
    assert_eq!(state.full_list().map(NodeList::len), Some(1));
}

#[test]
fn array_directly_in_detail_is_accepted() {
    let (mut state, mut bus) = setup();
    let payload = r#"{"detail":[{"uuid":"9","name":"edge"}]}"#;
    bus.dispatch(&mut state, Signal::UpdateNodeList, payload).unwrap();
    assert_eq!(labels(&state), ["edge"]);
}

#[test]
fn filtering_twice_gives_the_same_view() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "core-a"), ("2", "edge"), ("3", "core-b")]);
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();

    bus.dispatch(&mut state, Signal::KeyUp, "core").unwrap();
    let first = state.container().clone();
    bus.dispatch(&mut state, Signal::KeyUp, "core").unwrap();

    assert_eq!(state.container(), &first);
    assert_eq!(labels(&state), ["core-a", "core-b"]);
}

#[test]
fn delete_click_asks_editor_and_keeps_list_until_next_update() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "a"), ("2", "b")]);
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();

    let (render, actions) = bus.dispatch(&mut state, Signal::DeleteClicked, "2").unwrap();
    assert!(!render);
    assert_eq!(actions, [Action::RequestDelete { uuid: "2".into() }]);
    assert_eq!(labels(&state), ["a", "b"]);

    bus.dispatch(&mut state, Signal::UpdateNodeList, &update_payload(&[("1", "a")]))
        .unwrap();
    assert_eq!(labels(&state), ["a"]);
}

#[test]
fn names_are_escaped_in_markup() {
    let (mut state, mut bus) = setup();
    let payload = update_payload(&[("1", "<b>bold</b> & co")]);
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();

    let html = to_html(state.container()).unwrap();
    assert!(html.starts_with("<div id=\"node-list-container\">"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(!html.contains("<b>"));
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,4}"
}

fn nodes_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(name_strategy(), 1..20).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Node::new(format!("n{i}"), name))
            .collect()
    })
}

fn loaded(nodes: &[Node]) -> (NodeListState, SignalBus<NodeListState>) {
    let (mut state, mut bus) = setup();
    let payload = json!({ "detail": { "nodeList": nodes } }).to_string();
    bus.dispatch(&mut state, Signal::UpdateNodeList, &payload).unwrap();
    (state, bus)
}

proptest! {
    #[test]
    fn rendered_items_are_exactly_the_matching_nodes_in_order(
        nodes in nodes_strategy(),
        filter in "[a-cA-C]{1,2}",
    ) {
        let (mut state, mut bus) = loaded(&nodes);
        bus.dispatch(&mut state, Signal::KeyUp, &filter).unwrap();

        let expected = nodes.iter().filter(|n| n.name_contains(&filter)).count();
        prop_assert_eq!(state.container().child_elements().count(), expected);

        let rendered = labels(&state);
        for pair in rendered.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }

        let rendered_ids = ids(&state);
        for node in &nodes {
            let shown = rendered_ids.contains(&node.uuid);
            prop_assert_eq!(shown, node.name_contains(&filter));
        }
    }

    #[test]
    fn filters_never_shrink_the_cached_list(
        nodes in nodes_strategy(),
        filters in prop::collection::vec("[a-cA-C ]{0,3}", 1..8),
    ) {
        let (mut state, mut bus) = loaded(&nodes);
        for filter in &filters {
            bus.dispatch(&mut state, Signal::KeyUp, filter).unwrap();
            prop_assert_eq!(state.full_list().map(NodeList::len), Some(nodes.len()));
        }

        bus.dispatch(&mut state, Signal::Search, "").unwrap();
        prop_assert_eq!(state.container().child_elements().count(), nodes.len());
    }

    #[test]
    fn repeating_a_filter_is_idempotent(
        nodes in nodes_strategy(),
        filter in "[a-cA-C]{0,2}",
    ) {
        let (mut state, mut bus) = loaded(&nodes);
        bus.dispatch(&mut state, Signal::KeyUp, &filter).unwrap();
        let first = state.container().clone();
        bus.dispatch(&mut state, Signal::KeyUp, &filter).unwrap();
        prop_assert_eq!(state.container(), &first);
    }
}
