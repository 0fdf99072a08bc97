//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin runtime executes them in order. Everything the host must do besides
//! rendering goes through here.

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Starts a host timer. The host reports it back as
    /// `Event::TimerElapsed` with the same duration.
    SetTimeout(Duration),

    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,
}
