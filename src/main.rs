//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Folio library and
//! the Zellij plugin system. It implements the `ZellijPlugin` trait, maps host
//! events to library events and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, Timer, Visible events
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Apply the pane size, then call the library renderer
//!
//! # Event Mapping
//!
//! - `Key(Enter)` → `Event::Confirm`
//! - `Key(Space)` → `Event::Activate(Space)`
//! - `Key(Tab)` / `Key(Shift+Tab)` → `Event::FocusNext` / `Event::FocusPrev`
//! - `Key(Esc)` → `Event::ClearFocus`
//! - `Mouse(ScrollUp | ScrollDown)` → `Event::Scroll`
//! - `Mouse(LeftClick)` → `Event::Click`
//! - `Timer(seconds)` → `Event::TimerElapsed`
//! - `Visible(bool)` → `Event::Visibility`
//!
//! # Keybindings
//!
//! - `j`/`Down`, `k`/`Up`: Scroll one row
//! - `PageDown`/`PageUp`: Scroll one viewport
//! - `Tab`/`Shift+Tab`: Move focus between employers
//! - `Enter`: Advance to the next employer
//! - `Space`: Select the focused employer
//! - `Esc`: Clear focus
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use folio::selection::ControlKey;
use folio::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: folio::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: folio::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `ChangeApplicationState`, needed to hide the pane on `q`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        folio::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            entries_file = ?config.entries_file,
            theme = ?config.theme_name,
            "parsed configuration"
        );
        self.app = folio::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::Visible,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(seconds) => Event::TimerElapsed { seconds },
            zellij_tile::prelude::Event::Visible(visible) => Event::Visibility(visible),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - q will not hide the pane");
                    }
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Applies the pane size, then renders.
    ///
    /// Zellij only reports the pane size here, so a resize is fed through the
    /// handler before drawing; any timers it requests are started as usual.
    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&Event::Resize { rows, cols });
        folio::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::Visible(..) => "Visible".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FocusPrev);
        }

        Some(match key.bare_key {
            BareKey::Enter => Event::Confirm,
            BareKey::Char(' ') => Event::Activate(ControlKey::Space),
            BareKey::Tab => Event::FocusNext,
            BareKey::Esc => Event::ClearFocus,
            BareKey::Down | BareKey::Char('j') => Event::Scroll { lines: 1 },
            BareKey::Up | BareKey::Char('k') => Event::Scroll { lines: -1 },
            BareKey::PageDown => Event::ScrollPages { pages: 1 },
            BareKey::PageUp => Event::ScrollPages { pages: -1 },
            BareKey::Char('q') => Event::Close,
            _ => return None,
        })
    }

    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        let to_lines = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);

        match mouse {
            Mouse::ScrollDown(n) => Some(Event::Scroll { lines: to_lines(n) }),
            Mouse::ScrollUp(n) => Some(Event::Scroll { lines: -to_lines(n) }),
            Mouse::LeftClick(line, col) => usize::try_from(line)
                .ok()
                .map(|line| Event::Click { line, col }),
            _ => None,
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::SetTimeout(duration) => set_timeout(duration.as_secs_f64()),
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
