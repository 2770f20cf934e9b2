//! Domain layer for the node list pane.
//!
//! Holds the types the rest of the crate agrees on, independent of Zellij or
//! of how the list ends up on screen.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`node`]: `Node` and the non-empty `NodeList`
//! - [`payload`]: Decoding of inbound `updateNodeList` payloads
//!
//! # Examples
//!
//! ```
//! use nodelist::domain::{Node, NodeList};
//!
//! let list = NodeList::new(vec![Node::new("1", "router")]);
//! assert!(list.is_some());
//! assert!(NodeList::new(vec![]).is_none());
//! ```

pub mod error;
pub mod node;
pub mod payload;

pub use error::{NodeListError, Result};
pub use node::{Node, NodeList};
pub use payload::{decode_node_list, decode_update};
