//! Scroll-synchronized selection.
//!
//! This module holds the host-independent core of the plugin: which entry is
//! selected, and how direct selection and scroll position are reconciled
//! without feedback loops.
//!
//! # Modules
//!
//! - [`controller`]: [`SelectionController`], the single owner of selection state
//! - [`phase`]: the `Idle` / `Transitioning` state machine
//! - [`scheduler`]: injectable, cancellable one-shot timers
//!
//! # Example
//!
//! ```
//! use folio::domain::Catalog;
//! use folio::selection::{ManualScheduler, SelectionController};
//!
//! let mut controller = SelectionController::new(Catalog::builtin(), ManualScheduler::default())
//!     .with_viewport_height(40.0);
//!
//! // scrolling follows, it never drives
//! assert!(controller.on_scroll(80.0, 40.0));
//! assert_eq!(controller.selected_id(), "21twelve");
//! assert!(!controller.is_transitioning());
//! ```

pub mod controller;
pub mod phase;
pub mod scheduler;

pub use controller::{
    Activation, ControlKey, ScrollCommand, SelectionController, DEFAULT_TRANSITION,
};
pub use phase::Phase;
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TimerQueue};
