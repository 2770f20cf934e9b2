//! Zellij plugin wrapper.
//!
//! Thin integration layer between the nodelist library and Zellij. It owns the
//! filter field, translates keys, clicks, and pipe messages into signals, and
//! carries out the actions the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build state and signal bus
//! 2. **Subscribe**: Register for Key, Mouse, `CustomMessage` events
//! 3. **Pipe / Update**: Map input to signals, dispatch, run actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Char(c)` / `Backspace` → edit filter field, `keyup` with the new text
//! - `Esc` → clear filter field, `search`
//! - `Up` / `Down`, mouse wheel → scroll
//! - `Ctrl+c` → hide pane
//! - Left click on `[x]` → `deleteClicked` with the row's uuid
//! - Pipe or custom message named after a signal → that signal, payload as is
//!
//! # Outgoing Messages
//!
//! - `deleteNode` (payload `{"uuid": "..."}`) when a delete glyph is clicked

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use nodelist::app::{FilterField, Outcome};
use nodelist::ui::components::delete_target;
use nodelist::{handle_event, node_list_bus, Action, Config, NodeListState, Signal, SignalBus};

/// Name of the pipe message asking the editor to delete a node.
const DELETE_MESSAGE: &str = "deleteNode";

/// Plugin state wrapper.
pub struct State {
    /// Core pane state from the library layer.
    app: NodeListState,

    /// Signal bus with the pane's handlers registered.
    bus: SignalBus<NodeListState>,

    /// Text typed into the filter field.
    filter: FilterField,

    /// Pane size from the last render, used to resolve clicks and scrolling.
    rows: usize,
    cols: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: nodelist::initialize(&Config::default()),
            bus: node_list_bus(),
            filter: FilterField::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `ChangeApplicationState`: hide the pane
    /// - `MessageAndLaunchOtherPlugins`: send `deleteNode` to the editor
    /// - `ReadCliPipes`: receive signals piped from the command line
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        nodelist::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = nodelist::initialize(&config);

        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::MessageAndLaunchOtherPlugins,
            PermissionType::ReadCliPipes,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles Zellij events. Returns `true` if the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        match event {
            zellij_tile::prelude::Event::Key(ref key) => self.handle_key(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.handle_mouse(mouse),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.handle_named(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permissions denied - delete requests cannot be sent");
                }
                false
            }
            _ => false,
        }
    }

    /// Handles pipe messages from the editor or the CLI.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

        let payload = pipe_message.payload.unwrap_or_default();
        self.handle_named(&pipe_message.name, &payload)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        nodelist::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Routes a message named after a signal to the bus.
    fn handle_named(&mut self, name: &str, payload: &str) -> bool {
        let Some(signal) = Signal::from_name(name) else {
            tracing::debug!(message_name = %name, "ignoring message with unknown name");
            return false;
        };

        let should_render = self.dispatch(signal, payload);
        self.filter.replace(self.app.filter().unwrap_or_default());
        should_render
    }

    fn handle_key(&mut self, key: &KeyWithModifier) -> bool {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('c') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return self.handle(&nodelist::Event::CloseFocus);
        }

        match key.bare_key {
            BareKey::Char(c) => {
                let text = self.filter.insert(c).to_string();
                self.dispatch(Signal::KeyUp, &text)
            }
            BareKey::Backspace => {
                let text = self.filter.delete_back().to_string();
                self.dispatch(Signal::KeyUp, &text)
            }
            BareKey::Esc => {
                if self.filter.clear() {
                    self.dispatch(Signal::Search, "")
                } else {
                    false
                }
            }
            BareKey::Down => self.handle(&nodelist::Event::ScrollDown {
                pane_rows: self.rows,
            }),
            BareKey::Up => self.handle(&nodelist::Event::ScrollUp),
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: Mouse) -> bool {
        match mouse {
            Mouse::ScrollDown(_) => self.handle(&nodelist::Event::ScrollDown {
                pane_rows: self.rows,
            }),
            Mouse::ScrollUp(_) => self.handle(&nodelist::Event::ScrollUp),
            Mouse::LeftClick(line, col) => {
                let Ok(line) = usize::try_from(line) else {
                    return false;
                };

                let now = chrono::Utc::now().timestamp();
                let vm = self.app.compute_viewmodel(self.rows, self.cols, now);
                let Some(uuid) = delete_target(&vm, line, col, self.cols).map(str::to_string) else {
                    return false;
                };

                self.dispatch(Signal::DeleteClicked, &uuid)
            }
            _ => false,
        }
    }

    fn dispatch(&mut self, signal: Signal, payload: &str) -> bool {
        let result = self.bus.dispatch(&mut self.app, signal, payload);
        self.finish(result)
    }

    fn handle(&mut self, event: &nodelist::Event) -> bool {
        let result = handle_event(&mut self.app, event);
        self.finish(result)
    }

    fn finish(&self, result: nodelist::Result<Outcome>) -> bool {
        match result {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::RequestDelete { uuid } => {
                let payload = serde_json::json!({ "uuid": uuid }).to_string();
                tracing::debug!(uuid = %uuid, "sending delete request");
                pipe_message_to_plugin(MessageToPlugin::new(DELETE_MESSAGE).with_payload(payload));
            }
        }
    }
}
