//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `recipe_explorer` library and Zellij.
//! It implements `ZellijPlugin` for the UI thread and `ZellijWorker` for the
//! catalog loader, translates Zellij events into library [`Event`]s and
//! carries out the returned [`Action`]s.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij plugin thread   │
//! │  ┌────────────────────┐  │
//! │  │  State (plugin)    │  │  ← UI state, event handling
//! │  └────────────────────┘  │
//! │        │ LoadCatalog     │
//! │        ▼  ▲ CatalogLoaded│
//! │  ┌────────────────────┐  │
//! │  │ CatalogWorkerShim  │  │  ← reads and validates the dataset
//! │  └────────────────────┘  │
//! └──────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`, request
//!    `FullHdAccess`, subscribe to events
//! 2. **Permission result**: post `LoadCatalog` to the worker
//! 3. **Worker reply**: install the catalog (or the empty state)
//! 4. **Update/Render**: keys and mouse drive the focus machine; every render
//!    reports the pane size
//!
//! # Keybindings
//!
//! - Arrows (`h`/`j`/`k`/`l` outside the search box): move focus
//! - `Enter`: select category / open recipe / close recipe
//! - `Esc`: back (close recipe, clear query, reset category)
//! - `Backspace`: delete a query character, or back
//! - `/`: focus the search box
//! - `q`: close the plugin pane

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(not(target_family = "wasm"), allow(dead_code, unused_imports))]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use recipe_explorer::app::{event_for_key, Key};
use recipe_explorer::ui::Hit;
use recipe_explorer::worker::{decode, encode, CatalogWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
use recipe_explorer::{handle_event, Action, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);
#[cfg(target_family = "wasm")]
register_worker!(CatalogWorkerShim, catalog_worker, CATALOG_WORKER);

/// The plugin only runs inside Zellij.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("recipe-explorer is a Zellij plugin; build it for wasm32-wasip1 and load it from Zellij");
}

/// Plugin state wrapper.
struct State {
    app: recipe_explorer::AppState,

    /// Worker name for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: recipe_explorer::initialize(&Config::default()),
            worker_name: WORKER_NAME.to_string(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        recipe_explorer::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(catalog = ?config.catalog, layout = ?config.layout, "parsed configuration");
        self.app = recipe_explorer::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard =
            tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Some(Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            }),
            _ => None,
        };

        let Some(our_event) = our_event else {
            return false;
        };
        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&Event::Resize { rows, cols });
        recipe_explorer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        let key = match key.bare_key {
            BareKey::Left => Key::Left,
            BareKey::Right => Key::Right,
            BareKey::Up => Key::Up,
            BareKey::Down => Key::Down,
            BareKey::Enter => Key::Enter,
            BareKey::Esc => Key::Esc,
            BareKey::Backspace => Key::Backspace,
            BareKey::Char(c) => Key::Char(c),
            _ => return None,
        };
        event_for_key(key, self.app.is_typing())
    }

    /// Zellij reports 0-based pane coordinates; the layout is 1-based.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let (line, col, clicked) = match mouse {
            Mouse::LeftClick(line, col) => (line, col, true),
            Mouse::Hover(line, col) => (line, col, false),
            _ => return None,
        };
        let row = usize::try_from(line).ok()? + 1;
        let hit = self.app.hit_test(row, col + 1)?;
        tracing::trace!(?hit, clicked, "pointer hit");

        match (hit, clicked) {
            (Hit::SearchBox, true) => Some(Event::FocusSearch),
            (Hit::CloseButton, true) => Some(Event::CloseDetail),
            (Hit::Item(region, index), true) => Some(Event::Click { region, index }),
            (Hit::Item(region, index), false) => Some(Event::Hover { region, index }),
            (Hit::SearchBox | Hit::CloseButton, false) => None,
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match decode::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match encode(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}

/// `ZellijWorker` adapter around the library's [`CatalogWorker`].
#[derive(Default, Serialize, Deserialize)]
struct CatalogWorkerShim {
    inner: CatalogWorker,
}

impl ZellijWorker<'_> for CatalogWorkerShim {
    fn on_message(&mut self, message: String, payload: String) {
        if message != WORKER_NAME {
            return;
        }
        if let Some(reply) = self.inner.on_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: WORKER_NAME.to_string(),
                payload: reply,
                worker_name: None,
            });
        }
    }
}
