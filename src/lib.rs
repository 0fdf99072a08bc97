//! Folio: a Zellij plugin presenting a professional experience section.
//!
//! The pane shows a navigation list of employers beside a scrolling stack of
//! detail cards. Selecting an employer scrolls its card into view; scrolling
//! the cards moves the selection. The two directions are reconciled by the
//! [`SelectionController`](selection::SelectionController), which ignores the
//! echo of its own animated scroll until a cancellable timer ends the
//! transition.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event routing
//! │  - Event handling, focus ring                       │
//! │  - Timer actions                                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Selection     │   │ Viewport      │
//! │ (ui/)         │   │ (selection/)  │   │ (viewport/)   │
//! │ - Layout      │   │ - Controller  │   │ - Surface     │
//! │ - Theming     │   │ - Phase       │   │ - Animation   │
//! │ - Components  │   │ - Schedulers  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure Layers                     │
//! │  - Entries, catalog, markup (domain/)               │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Tracing export (observability/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 })?;
//! handle_event(&mut state, &Event::Confirm)?;
//!
//! assert_eq!(state.controller.selected_id(), "talentrise");
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod selection;
pub mod ui;
pub mod viewport;

pub use app::{handle_event, Action, AppState, Event, NavFocus};
pub use domain::{Catalog, Entry, FolioError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

use app::state::{DEFAULT_FRAME_INTERVAL, DEFAULT_HEADING, DEFAULT_SUBTITLE};
use selection::DEFAULT_TRANSITION;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/folio.wasm" {
///     entries_file "~/cv/experience.toml"
///     theme "catppuccin-latte"
///     trace_level "debug"
///     transition_ms "800"
///     frame_ms "40"
///     heading "Where I've worked"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file (TOML `[[entry]]` tables, or a JSON array if the name ends
    /// in `.json`). The built-in catalog is used when unset or unreadable.
    pub entries_file: Option<String>,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// How long scroll-follow stays suspended after a direct selection.
    pub transition: Duration,

    /// Interval between scroll animation frames. Must be shorter than
    /// `transition`.
    pub frame_interval: Duration,

    pub heading: String,
    pub subtitle: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            transition: DEFAULT_TRANSITION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            heading: DEFAULT_HEADING.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `entries_file`, `theme`, `theme_file`, `trace_level`: taken as-is,
    ///   blank values ignored
    /// - `transition_ms`, `frame_ms`: positive integers; anything else falls
    ///   back to 1000 and 50
    /// - `heading`, `subtitle`: replace the default copy
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use folio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("transition_ms".to_string(), "800".to_string());
    /// map.insert("frame_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.transition, Duration::from_millis(800));
    /// assert_eq!(config.frame_interval, Duration::from_millis(50));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, default: Duration| {
            config
                .get(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map_or(default, Duration::from_millis)
        };

        Self {
            entries_file: text("entries_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            transition: millis("transition_ms", DEFAULT_TRANSITION),
            frame_interval: millis("frame_ms", DEFAULT_FRAME_INTERVAL),
            heading: text("heading").unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            subtitle: text("subtitle").unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
        }
    }
}

/// Builds the initial `AppState` from configuration.
///
/// Nothing here fails: a catalog, theme or timing that cannot be used is
/// logged and replaced by its built-in default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing folio plugin");

    let mut state = AppState::new(load_catalog(config), load_theme(config))
        .with_copy(config.heading.clone(), config.subtitle.clone());

    if let Err(e) = state.set_timing(config.transition, config.frame_interval) {
        tracing::warn!(error = %e, "invalid timing, using defaults");
    }

    tracing::debug!(
        entries = state.controller.catalog().len(),
        theme = %state.theme.name,
        frames = state.animation_frames(),
        "app state initialized"
    );
    state
}

fn load_catalog(config: &Config) -> Catalog {
    let Some(file) = &config.entries_file else {
        return Catalog::builtin();
    };

    let path = infrastructure::resolve_config_path(file);
    Catalog::from_file(&path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to load entries, using built-in catalog");
        Catalog::builtin()
    })
}

fn load_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        let path = infrastructure::resolve_config_path(file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}
