//! Named signal dispatch.
//!
//! The pane reacts to a handful of named host notifications. Handlers are
//! registered per [`Signal`] and run synchronously, in registration order,
//! when the host dispatches that signal. There is no queue: a dispatch
//! finishes before the host delivers the next notification.
//!
//! # Example
//!
//! ```rust
//! use nodelist::app::{Signal, SignalBus};
//!
//! let mut bus: SignalBus<Vec<String>> = SignalBus::new();
//! bus.subscribe(Signal::KeyUp, |seen, text| {
//!     seen.push(text.to_string());
//!     Ok((true, vec![]))
//! });
//!
//! let mut seen = Vec::new();
//! let (render, actions) = bus.dispatch(&mut seen, Signal::KeyUp, "rou")?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(seen, ["rou"]);
//! # Ok::<(), nodelist::NodeListError>(())
//! ```

use crate::app::Action;
use crate::domain::Result;
use std::fmt;

/// What a handler reports: whether the pane should repaint, and the actions
/// for the host.
pub type Outcome = (bool, Vec<Action>);

type Handler<S> = Box<dyn FnMut(&mut S, &str) -> Result<Outcome>>;

/// Host notifications the pane understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The editor published its node set. Payload: the update JSON.
    UpdateNodeList,
    /// A key was released in the filter field. Payload: the field text.
    KeyUp,
    /// The filter field was cleared. Payload: ignored.
    Search,
    /// A delete glyph was clicked. Payload: the node uuid.
    DeleteClicked,
}

impl Signal {
    /// Every signal, in declaration order.
    pub const ALL: [Self; 4] = [Self::UpdateNodeList, Self::KeyUp, Self::Search, Self::DeleteClicked];

    /// Wire name of the signal.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpdateNodeList => "updateNodeList",
            Self::KeyUp => "keyup",
            Self::Search => "search",
            Self::DeleteClicked => "deleteClicked",
        }
    }

    /// Looks a signal up by wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|signal| signal.name() == name)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Observer registry dispatching signals to handlers over shared state `S`.
pub struct SignalBus<S> {
    handlers: Vec<(Signal, Handler<S>)>,
}

impl<S> SignalBus<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers `handler` for `signal`.
    pub fn subscribe<F>(&mut self, signal: Signal, handler: F)
    where
        F: FnMut(&mut S, &str) -> Result<Outcome> + 'static,
    {
        self.handlers.push((signal, Box::new(handler)));
    }

    #[must_use]
    pub fn has_subscribers(&self, signal: Signal) -> bool {
        self.handlers.iter().any(|(registered, _)| *registered == signal)
    }

    /// Runs every handler registered for `signal`.
    ///
    /// Repaint requests are OR-ed, actions concatenated in handler order. A
    /// signal with no handlers yields `(false, [])`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first handler error.
    pub fn dispatch(&mut self, state: &mut S, signal: Signal, payload: &str) -> Result<Outcome> {
        let _span = tracing::debug_span!("dispatch_signal", signal = %signal, payload_len = payload.len()).entered();

        let mut should_render = false;
        let mut actions = Vec::new();

        for (_, handler) in self
            .handlers
            .iter_mut()
            .filter(|(registered, _)| *registered == signal)
        {
            let (render, mut emitted) = handler(state, payload)?;
            should_render |= render;
            actions.append(&mut emitted);
        }

        Ok((should_render, actions))
    }
}

impl<S> Default for SignalBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for SignalBus<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signals: Vec<Signal> = self.handlers.iter().map(|(signal, _)| *signal).collect();
        f.debug_struct("SignalBus").field("handlers", &signals).finish()
    }
}
