//! Application layer coordinating state, signals, and actions.
//!
//! ```text
//! Host notification → Signal → SignalBus → handle_event → NodeListState → (repaint, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands for the host
//! - [`bus`]: Named signal dispatch
//! - [`handler`]: Event processing
//! - [`input`]: Filter text field model
//! - [`state`]: Cached full list, filter, rendered list, view model

pub mod actions;
pub mod bus;
pub mod handler;
pub mod input;
pub mod state;

pub use actions::Action;
pub use bus::{Outcome, Signal, SignalBus};
pub use handler::{handle_event, node_list_bus, Event};
pub use input::FilterField;
pub use state::{active_filter, visible_nodes, NodeListState};
