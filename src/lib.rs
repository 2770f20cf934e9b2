//! Nodelist: a Zellij plugin pane listing the nodes of a network editor.
//!
//! The pane provides:
//! - A cached copy of the editor's full node list, replaced on every update
//! - A case-sensitive name filter driven by a text field
//! - Name-sorted rendering with a delete affordance per node
//! - Delete requests forwarded back to the editor as pipe messages

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, plugin.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Signal bus and event handling                    │
//! │  - Filter/sort derivation of the visible list       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Element tree and HTML serialization              │
//! │  - Terminal components and theming                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Node model and update payload decoding           │
//! │  - Error types, platform paths                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON log lines to a size-rotated file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State, signal bus, and event/action model
//! - [`domain`]: Node types, payload decoding, errors
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Element tree and terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/nodelist.wasm" {
//!         theme "catppuccin-latte"
//!         log_level "debug"
//!     }
//! }
//! ```
//!
//! # Signal Flow
//!
//! 1. The editor pipes `updateNodeList` with the node array; the pane caches
//!    it and renders every node sorted by name.
//! 2. Each keystroke in the filter field dispatches `keyup`; the cached list
//!    is filtered and re-sorted. The cache itself never changes.
//! 3. `Esc` clears the field and dispatches `search`, restoring the full list.
//! 4. Clicking `[x]` dispatches `deleteClicked`; the pane pipes `deleteNode`
//!    with the node's uuid back to the editor, which answers with a fresh
//!    `updateNodeList`.
//!
//! # Example
//!
//! ```rust
//! use nodelist::{initialize, node_list_bus, Config, Signal};
//!
//! let mut state = initialize(&Config::default());
//! let mut bus = node_list_bus();
//!
//! let payload = r#"{"detail":{"nodeList":[
//!     {"uuid":"a","name":"switch"},
//!     {"uuid":"b","name":"router"}
//! ]}}"#;
//! bus.dispatch(&mut state, Signal::UpdateNodeList, payload)?;
//! bus.dispatch(&mut state, Signal::KeyUp, "rou")?;
//!
//! assert_eq!(state.visible().len(), 1);
//! assert_eq!(state.full_list().map(|l| l.len()), Some(2));
//! # Ok::<(), nodelist::NodeListError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, node_list_bus, Action, Event, NodeListState, Signal, SignalBus};
pub use domain::{Node, NodeList, NodeListError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub log_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; empty values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use nodelist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("log_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.log_level.as_deref(), Some("debug"));
    /// assert!(config.theme_file.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            log_level: get("log_level"),
        }
    }
}

/// Creates the pane state with the configured theme.
///
/// The theme comes from `theme_file` if set, else from `theme_name`, else the
/// default. A theme that fails to load falls back to the default.
#[must_use]
pub fn initialize(config: &Config) -> NodeListState {
    tracing::debug!("initializing nodelist plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    NodeListState::new(theme)
}
