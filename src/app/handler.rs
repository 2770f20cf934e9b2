//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one place where the pane's state changes. Host
//! notifications arrive either as named signals through the bus built by
//! [`node_list_bus`], or directly as [`Event`]s for pane-local input such as
//! scrolling.
//!
//! # Event Types
//!
//! - **Editor**: `NodeListUpdated`
//! - **Filter field**: `FilterKeyUp`, `SearchCleared`
//! - **Pane**: `DeleteClicked`, `ScrollDown`, `ScrollUp`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use nodelist::app::{handle_event, Event, NodeListState};
//! use nodelist::ui::Theme;
//!
//! let mut state = NodeListState::new(Theme::default());
//! let payload = r#"{"detail":{"nodeList":[{"uuid":"1","name":"router"}]}}"#;
//! let (render, actions) = handle_event(
//!     &mut state,
//!     &Event::NodeListUpdated { payload: payload.to_string() },
//! )?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), nodelist::NodeListError>(())
//! ```

use crate::app::bus::{Outcome, Signal, SignalBus};
use crate::app::{Action, NodeListState};
use crate::domain::{decode_update, Result};

/// Events the pane reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The editor published its node set.
    ///
    /// Payloads without at least one node are ignored.
    NodeListUpdated {
        /// Raw update JSON.
        payload: String,
    },

    /// A key was released in the filter field.
    FilterKeyUp {
        /// Full text of the field after the keystroke.
        text: String,
    },

    /// The filter field's clear affordance was used.
    SearchCleared,

    /// The delete glyph of a rendered node was clicked.
    DeleteClicked {
        /// Uuid the glyph is tagged with.
        uuid: String,
    },

    /// Scrolls the list one row down.
    ScrollDown {
        /// Pane height, to stop once the last node is on screen.
        pane_rows: usize,
    },

    /// Scrolls the list one row up.
    ScrollUp,

    /// Hides the pane.
    CloseFocus,
}

/// Processes an event, mutates state, and returns `(repaint, actions)`.
///
/// `repaint` tells the host whether the pane changed. It is `false` for
/// ignored updates and for clicks, and `true` for every filter keystroke
/// because the field text is painted even before any list arrives.
///
/// # Errors
///
/// Returns [`NodeListError::Payload`](crate::NodeListError::Payload) when an
/// update payload is not JSON. State is left untouched in that case.
pub fn handle_event(state: &mut NodeListState, event: &Event) -> Result<Outcome> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::NodeListUpdated { payload } => {
            let Some(list) = decode_update(payload)? else {
                tracing::debug!("update carried no nodes, keeping previous list");
                return Ok((false, vec![]));
            };

            let received_at = chrono::Utc::now().timestamp();
            Ok((state.apply_update(list, received_at), vec![]))
        }
        Event::FilterKeyUp { text } => {
            tracing::trace!(filter = %text, "filter keystroke");
            state.apply_filter(text);
            Ok((true, vec![]))
        }
        Event::SearchCleared => {
            tracing::debug!("filter cleared");
            state.clear_filter();
            Ok((true, vec![]))
        }
        Event::DeleteClicked { uuid } => {
            if state.rendered_node(uuid).is_none() {
                tracing::debug!(uuid = %uuid, "delete clicked for a node that is not rendered");
                return Ok((false, vec![]));
            }

            tracing::debug!(uuid = %uuid, "requesting node deletion");
            Ok((false, vec![Action::RequestDelete { uuid: uuid.clone() }]))
        }
        Event::ScrollDown { pane_rows } => {
            let before = state.scroll_offset();
            state.scroll_down(*pane_rows);
            Ok((state.scroll_offset() != before, vec![]))
        }
        Event::ScrollUp => {
            let before = state.scroll_offset();
            state.scroll_up();
            Ok((state.scroll_offset() != before, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Builds the bus with the pane's handler registered for every signal.
#[must_use]
pub fn node_list_bus() -> SignalBus<NodeListState> {
    let mut bus: SignalBus<NodeListState> = SignalBus::new();

    bus.subscribe(Signal::UpdateNodeList, |state, payload| {
        handle_event(
            state,
            &Event::NodeListUpdated {
                payload: payload.to_string(),
            },
        )
    });
    bus.subscribe(Signal::KeyUp, |state, text| {
        handle_event(
            state,
            &Event::FilterKeyUp {
                text: text.to_string(),
            },
        )
    });
    bus.subscribe(Signal::Search, |state, _| {
        handle_event(state, &Event::SearchCleared)
    });
    bus.subscribe(Signal::DeleteClicked, |state, uuid| {
        handle_event(
            state,
            &Event::DeleteClicked {
                uuid: uuid.to_string(),
            },
        )
    });

    bus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    const TWO_NODES: &str =
        r#"{"detail":{"nodeList":[{"uuid":"1","name":"Beta"},{"uuid":"2","name":"alpha"}]}}"#;

    fn updated_state() -> NodeListState {
        let mut state = NodeListState::new(Theme::default());
        handle_event(
            &mut state,
            &Event::NodeListUpdated {
                payload: TWO_NODES.to_string(),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn empty_update_is_ignored() {
        let mut state = updated_state();
        let before = state.container().clone();

        let (render, actions) = handle_event(
            &mut state,
            &Event::NodeListUpdated {
                payload: r#"{"detail":{"nodeList":[]}}"#.to_string(),
            },
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.container(), &before);
        assert_eq!(state.full_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn malformed_update_errors_without_touching_state() {
        let mut state = updated_state();
        let before = state.visible().to_vec();

        let result = handle_event(
            &mut state,
            &Event::NodeListUpdated {
                payload: "{".to_string(),
            },
        );

        assert!(result.is_err());
        assert_eq!(state.visible(), before.as_slice());
    }

    #[test]
    fn keystroke_before_any_list_still_repaints_field() {
        let mut state = NodeListState::new(Theme::default());
        let (render, _) = handle_event(&mut state, &Event::FilterKeyUp { text: "a".into() }).unwrap();
        assert!(render);
        assert!(state.container().children().is_empty());
        assert_eq!(state.filter(), Some("a"));
    }

    #[test]
    fn delete_click_requests_deletion_of_rendered_node_only() {
        let mut state = updated_state();

        let (_, actions) =
            handle_event(&mut state, &Event::DeleteClicked { uuid: "2".into() }).unwrap();
        assert_eq!(actions, [Action::RequestDelete { uuid: "2".into() }]);

        handle_event(&mut state, &Event::FilterKeyUp { text: "Beta".into() }).unwrap();
        let (_, actions) =
            handle_event(&mut state, &Event::DeleteClicked { uuid: "2".into() }).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.full_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn scrolling_a_short_list_does_not_repaint() {
        let mut state = updated_state();
        let (render, _) = handle_event(&mut state, &Event::ScrollDown { pane_rows: 40 }).unwrap();
        assert!(!render);
        let (render, _) = handle_event(&mut state, &Event::ScrollUp).unwrap();
        assert!(!render);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = NodeListState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, [Action::CloseFocus]);
    }

    #[test]
    fn bus_routes_all_signals() {
        let mut bus = node_list_bus();
        for signal in Signal::ALL {
            assert!(bus.has_subscribers(signal), "{signal}");
        }

        let mut state = NodeListState::new(Theme::default());
        let (render, _) = bus.dispatch(&mut state, Signal::UpdateNodeList, TWO_NODES).unwrap();
        assert!(render);

        bus.dispatch(&mut state, Signal::KeyUp, "alp").unwrap();
        assert_eq!(state.visible().len(), 1);

        bus.dispatch(&mut state, Signal::Search, "").unwrap();
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.filter(), None);

        let (_, actions) = bus.dispatch(&mut state, Signal::DeleteClicked, "1").unwrap();
        assert_eq!(actions, [Action::RequestDelete { uuid: "1".into() }]);
    }
}
