//! Actions representing side effects to be executed by the host.
//!
//! The handler never talks to Zellij directly. It returns actions, and the
//! plugin shim turns them into host calls.

/// Commands for the host to carry out after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the network editor to delete a node.
    ///
    /// Emitted when the delete glyph of a rendered node is clicked. The pane
    /// itself does not remove the node; the editor does, and then sends a new
    /// node list.
    RequestDelete {
        /// Uuid of the node whose delete glyph was clicked.
        uuid: String,
    },
}
