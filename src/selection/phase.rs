//! Two-state machine guarding scroll-follow against programmatic scrolling.
//!
//! ```text
//!            select_entry                      timer fired / detach
//!   Idle ───────────────────► Transitioning ─────────────────────────► Idle
//!                              │        ▲
//!                              └────────┘
//!                    select_entry (old timer cancelled)
//! ```
//!
//! While `Transitioning`, scroll samples are the controller's own animated
//! scroll echoing back and must not move the selection.

use super::scheduler::TimerHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Scroll tracking is live.
    #[default]
    Idle,

    /// A programmatic scroll is in flight; `timer` ends it.
    Transitioning { timer: TimerHandle },
}

impl Phase {
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// The pending reset timer, if any.
    #[must_use]
    pub const fn timer(self) -> Option<TimerHandle> {
        match self {
            Self::Idle => None,
            Self::Transitioning { timer } => Some(timer),
        }
    }
}
