//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the selection, viewport and
//! UI layers.
//!
//! ```text
//! Zellij Input → Events → Event Handler → State Mutations → Actions → Host
//!                              ↑                               │
//!                              └──────── Timer events ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and routing
//! - [`focus`]: Keyboard focus ring over the nav controls
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod focus;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use focus::NavFocus;
pub use handler::{handle_event, Event};
pub use state::AppState;
