//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime, already mapped from Zellij input
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Timer requests queued during the mutation are returned as actions
//!
//! # Event Types
//!
//! - **Selection**: `Confirm`, `Activate`, `Click`
//! - **Focus**: `FocusNext`, `FocusPrev`, `ClearFocus`
//! - **Scrolling**: `Scroll`, `ScrollPages`
//! - **Host**: `TimerElapsed`, `Resize`, `Visibility`, `Close`

use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::selection::ControlKey;

/// Events triggered by user input or host changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Enter. Advances to the next entry regardless of focus.
    Confirm,
    /// Key pressed on the focused nav control.
    Activate(ControlKey),
    FocusNext,
    FocusPrev,
    ClearFocus,
    /// Left click at 0-indexed pane coordinates.
    Click { line: usize, col: usize },
    /// User scroll by rows; negative scrolls up.
    Scroll { lines: isize },
    /// User scroll by whole viewports.
    ScrollPages { pages: isize },
    /// A host timer fired after the given duration.
    TimerElapsed { seconds: f64 },
    Resize { rows: usize, cols: usize },
    /// Pane shown (mount) or hidden (unmount).
    Visibility(bool),
    /// Closes the plugin pane.
    Close,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in sequence.
///
/// # Errors
///
/// Returns [`FolioError::Parse`](crate::domain::FolioError::Parse) when a timer
/// event carries an invalid duration.
///
/// # Example
///
/// ```rust
/// use folio::app::{handle_event, Action, AppState, Event};
/// use folio::domain::Catalog;
/// use folio::ui::Theme;
/// use std::time::Duration;
///
/// let mut state = AppState::new(Catalog::builtin(), Theme::default());
/// handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 })?;
///
/// let (render, actions) = handle_event(&mut state, &Event::Confirm)?;
/// assert!(render);
/// assert_eq!(actions[0], Action::SetTimeout(Duration::from_millis(1000)));
/// # Ok::<(), folio::domain::FolioError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let should_render = match event {
        Event::Confirm => state.confirm(),
        Event::Activate(key) => state.activate_focused(*key),
        Event::FocusNext => state.focus_next(),
        Event::FocusPrev => state.focus_prev(),
        Event::ClearFocus => state.clear_focus(),
        Event::Click { line, col } => state.click(*line, *col),
        Event::Scroll { lines } => state.scroll_lines(*lines),
        Event::ScrollPages { pages } => state.scroll_pages(*pages),
        Event::TimerElapsed { seconds } => state.timer_elapsed(*seconds)?,
        Event::Resize { rows, cols } => state.resize(*rows, *cols),
        Event::Visibility(visible) => state.set_visible(*visible),
        Event::Close => return Ok((false, vec![Action::CloseFocus])),
    };

    let actions = state.take_timer_actions();
    tracing::trace!(
        should_render,
        timers = actions.len(),
        selected = %state.controller.selected_id(),
        transitioning = state.controller.is_transitioning(),
        "event handled"
    );

    Ok((should_render, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::ui::Theme;
    use std::time::Duration;

    fn state() -> AppState {
        let mut state = AppState::new(Catalog::builtin(), Theme::default());
        handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 }).unwrap();
        state
    }

    #[test]
    fn close_requests_hide() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn resize_to_same_size_does_not_render() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 }).unwrap();
        assert!(!render);
    }

    #[test]
    fn click_emits_transition_and_frame_timers() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Click { line: 9, col: 2 }).unwrap();

        assert!(render);
        assert_eq!(state.controller.selected_id(), "21twelve");
        assert_eq!(
            actions,
            vec![
                Action::SetTimeout(Duration::from_millis(1000)),
                Action::SetTimeout(Duration::from_millis(50)),
            ]
        );
    }

    #[test]
    fn user_scroll_emits_no_timers() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Scroll { lines: 3 }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
    }

    #[test]
    fn activate_other_key_is_not_handled() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::FocusNext).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Activate(ControlKey::Other)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.controller.selected_id(), "tjcg");

        handle_event(&mut state, &Event::Activate(ControlKey::Space)).unwrap();
        assert_eq!(state.controller.selected_id(), "talentrise");
    }

    #[test]
    fn bad_timer_is_an_error() {
        let mut state = state();
        assert!(handle_event(&mut state, &Event::TimerElapsed { seconds: f64::INFINITY }).is_err());
    }

    #[test]
    fn clear_focus_renders_only_when_focused() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::ClearFocus).unwrap().0);
        handle_event(&mut state, &Event::FocusNext).unwrap();
        assert!(handle_event(&mut state, &Event::ClearFocus).unwrap().0);
    }
}
