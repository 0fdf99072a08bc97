//! Selection state owner reconciling direct selection with scroll position.
//!
//! The controller keeps exactly one entry selected. Two input sources compete:
//!
//! - **Direct selection** (click, keyboard) *drives* scrolling: it changes the
//!   selection, enters [`Phase::Transitioning`] and returns a [`ScrollCommand`]
//!   for the host to execute.
//! - **Scroll sampling** *follows* scrolling: it maps the scroll offset to an
//!   entry index and updates the selection without issuing any command.
//!
//! Scroll samples are ignored while transitioning, since they are the echo of
//! the controller's own animated scroll. The transition ends when the
//! scheduled reset timer comes back through [`SelectionController::on_timer`].

use std::time::Duration;

use crate::domain::{Catalog, Entry};

use super::phase::Phase;
use super::scheduler::{Scheduler, TimerHandle};

/// Time a programmatic scroll is given to settle before scroll-follow resumes.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1000);

/// Instruction for the host's scrolling primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Target vertical offset, in the same unit as the viewport height.
    pub offset: f64,
    /// Whether the host should animate towards `offset`.
    pub animated: bool,
}

/// Key pressed while a navigation control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Enter,
    Space,
    Other,
}

impl ControlKey {
    /// Enter and Space activate a control.
    #[must_use]
    pub const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Result of a key press on a navigation control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    /// The key was consumed; the host must skip its default handling.
    pub handled: bool,
    /// Scroll to execute, if the selection changed.
    pub scroll: Option<ScrollCommand>,
}

/// Owner of the selection state.
///
/// # Example
///
/// ```
/// use folio::domain::Catalog;
/// use folio::selection::{ManualScheduler, SelectionController, DEFAULT_TRANSITION};
///
/// let mut controller = SelectionController::new(Catalog::builtin(), ManualScheduler::default())
///     .with_viewport_height(800.0);
///
/// let scroll = controller.select_entry("talentrise").unwrap();
/// assert_eq!(scroll.offset, 800.0);
/// assert!(controller.is_transitioning());
///
/// for timer in controller.scheduler_mut().advance(DEFAULT_TRANSITION) {
///     controller.on_timer(timer);
/// }
/// assert!(!controller.is_transitioning());
/// ```
#[derive(Debug)]
pub struct SelectionController<S: Scheduler> {
    catalog: Catalog,
    selected: usize,
    phase: Phase,
    scheduler: S,
    transition: Duration,
    viewport_height: f64,
    attached: bool,
}

impl<S: Scheduler> SelectionController<S> {
    /// Creates a controller selecting the first entry, in `Idle`.
    #[must_use]
    pub fn new(catalog: Catalog, scheduler: S) -> Self {
        Self {
            catalog,
            selected: 0,
            phase: Phase::Idle,
            scheduler,
            transition: DEFAULT_TRANSITION,
            viewport_height: 0.0,
            attached: true,
        }
    }

    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.set_transition(transition);
        self
    }

    /// Changes the transition window for subsequent selections.
    pub fn set_transition(&mut self, transition: Duration) {
        self.transition = transition;
    }

    #[must_use]
    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.set_viewport_height(height);
        self
    }

    #[must_use]
    pub fn selected_id(&self) -> &str {
        &self.selected_entry().id
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_entry(&self) -> &Entry {
        self.catalog.get(self.selected).unwrap_or_else(|| self.catalog.first())
    }

    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    #[must_use]
    pub const fn transition(&self) -> Duration {
        self.transition
    }

    /// Whether scroll samples are currently followed (the view is mounted).
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Records a new viewport height. Non-finite or negative values are ignored.
    pub fn set_viewport_height(&mut self, height: f64) {
        if height.is_finite() && height >= 0.0 {
            self.viewport_height = height;
        }
    }

    /// Selects the entry with `id` and returns the scroll the host must run.
    ///
    /// Returns `None` without touching any state when `id` is already
    /// selected or names no entry.
    pub fn select_entry(&mut self, id: &str) -> Option<ScrollCommand> {
        let Some(index) = self.catalog.position(id) else {
            tracing::debug!(id = %id, "ignoring selection of unknown entry");
            return None;
        };
        self.select_index(index)
    }

    /// Index-based form of [`select_entry`](Self::select_entry).
    pub fn select_index(&mut self, index: usize) -> Option<ScrollCommand> {
        if index == self.selected || index >= self.catalog.len() {
            return None;
        }

        if let Some(stale) = self.phase.timer() {
            self.scheduler.cancel(stale);
        }
        let timer = self.scheduler.schedule(self.transition);
        self.phase = Phase::Transitioning { timer };
        self.selected = index;

        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.viewport_height;

        tracing::debug!(
            selected = %self.selected_id(),
            index,
            offset,
            timer = timer.id(),
            "selection driven, scrolling"
        );

        Some(ScrollCommand {
            offset,
            animated: true,
        })
    }

    /// Follows a scroll sample. Returns `true` if the selection changed.
    ///
    /// Never issues a scroll command and never enters `Transitioning`.
    pub fn on_scroll(&mut self, scroll_top: f64, viewport_height: f64) -> bool {
        if self.phase.is_transitioning() || !self.attached {
            return false;
        }
        if !scroll_top.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return false;
        }
        self.viewport_height = viewport_height;

        let index = self.index_for_offset(scroll_top / viewport_height);
        if index == self.selected {
            return false;
        }

        self.selected = index;
        tracing::debug!(selected = %self.selected_id(), index, scroll_top, "selection follows scroll");
        true
    }

    /// Selects the entry after the current one, wrapping to the first.
    pub fn advance_to_next(&mut self) -> Option<ScrollCommand> {
        let next = (self.selected + 1) % self.catalog.len();
        self.select_index(next)
    }

    /// Handles `key` pressed on the navigation control of entry `id`.
    pub fn handle_key_activate(&mut self, id: &str, key: ControlKey) -> Activation {
        if !key.activates() {
            return Activation {
                handled: false,
                scroll: None,
            };
        }
        Activation {
            handled: true,
            scroll: self.select_entry(id),
        }
    }

    /// Delivers a fired timer. Returns `true` if it ended the transition.
    ///
    /// Handles other than the pending one are stale and ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.phase.timer() != Some(handle) {
            tracing::trace!(timer = handle.id(), "ignoring stale timer");
            return false;
        }
        self.phase = Phase::Idle;
        tracing::debug!(timer = handle.id(), "transition finished");
        true
    }

    /// Unmount: cancels any pending timer, returns to `Idle` and stops
    /// following scroll samples.
    pub fn detach(&mut self) {
        if let Some(timer) = self.phase.timer() {
            self.scheduler.cancel(timer);
        }
        self.phase = Phase::Idle;
        self.attached = false;
        tracing::debug!("selection controller detached");
    }

    /// Remount: resumes following scroll samples.
    pub fn attach(&mut self) {
        self.attached = true;
        tracing::debug!("selection controller attached");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn index_for_offset(&self, ratio: f64) -> usize {
        let last = self.catalog.last_index();
        let rounded = ratio.round();
        if rounded <= 0.0 {
            0
        } else if rounded >= last as f64 {
            last
        } else {
            rounded as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::selection::ManualScheduler;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            company: id.to_uppercase(),
            title: "Engineer".to_string(),
            duration: "2024".to_string(),
            location: "Remote".to_string(),
            color: "#6366F1".to_string(),
            logo: None,
            details: vec![],
        }
    }

    fn controller(ids: &[&str]) -> SelectionController<ManualScheduler> {
        let catalog = Catalog::new(ids.iter().map(|id| entry(id)).collect()).unwrap();
        SelectionController::new(catalog, ManualScheduler::default()).with_viewport_height(800.0)
    }

    fn settle(c: &mut SelectionController<ManualScheduler>, by: Duration) {
        for timer in c.scheduler_mut().advance(by) {
            c.on_timer(timer);
        }
    }

    #[test]
    fn starts_idle_on_first_entry() {
        let c = controller(&["a", "b", "c"]);
        assert_eq!(c.selected_id(), "a");
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_attached());
    }

    #[test]
    fn select_entry_updates_selection_and_scrolls() {
        let mut c = controller(&["a", "b", "c"]);
        let cmd = c.select_entry("c");

        assert_eq!(c.selected_id(), "c");
        assert_eq!(cmd, Some(ScrollCommand { offset: 1600.0, animated: true }));
        assert!(c.is_transitioning());
    }

    #[test]
    fn selecting_the_current_entry_is_a_no_op() {
        let mut c = controller(&["a", "b", "c"]);
        assert_eq!(c.select_entry("a"), None);
        assert!(!c.is_transitioning());
        assert_eq!(c.scheduler().pending_count(), 0);
    }

    #[test]
    fn reselecting_during_transition_keeps_phase() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("b");
        let phase = c.phase();

        assert_eq!(c.select_entry("b"), None);
        assert_eq!(c.phase(), phase);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut c = controller(&["a", "b"]);
        assert_eq!(c.select_entry("nope"), None);
        assert_eq!(c.selected_id(), "a");
        assert!(!c.is_transitioning());
    }

    #[test]
    fn transition_ends_only_after_full_duration() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("b");

        settle(&mut c, Duration::from_millis(999));
        assert!(c.is_transitioning());

        settle(&mut c, Duration::from_millis(1));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn custom_transition_duration() {
        let catalog = Catalog::new(vec![entry("a"), entry("b")]).unwrap();
        let mut c = SelectionController::new(catalog, ManualScheduler::default())
            .with_transition(Duration::from_millis(250));
        c.select_entry("b");

        settle(&mut c, Duration::from_millis(250));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn reselect_cancels_stale_timer() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("b");
        settle(&mut c, Duration::from_millis(600));
        c.select_entry("c");

        // the first selection's deadline passes; the second transition is still live
        settle(&mut c, Duration::from_millis(600));
        assert!(c.is_transitioning());
        assert_eq!(c.scheduler().pending_count(), 1);

        settle(&mut c, Duration::from_millis(400));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn stale_handle_does_not_end_transition() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("b");
        let stale = c.phase().timer().unwrap();
        c.select_entry("c");

        assert!(!c.on_timer(stale));
        assert!(c.is_transitioning());
    }

    #[test]
    fn scroll_follows_when_idle() {
        let mut c = controller(&["a", "b", "c"]);
        assert!(c.on_scroll(800.0, 800.0));
        assert_eq!(c.selected_id(), "b");
        assert!(!c.is_transitioning());
        assert_eq!(c.scheduler().pending_count(), 0);
    }

    #[test]
    fn scroll_rounds_to_nearest_entry() {
        let mut c = controller(&["a", "b", "c"]);
        assert!(!c.on_scroll(399.0, 800.0));
        assert_eq!(c.selected_id(), "a");
        assert!(c.on_scroll(400.0, 800.0));
        assert_eq!(c.selected_id(), "b");
    }

    #[test]
    fn scroll_past_the_end_clamps_to_last() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_scroll(10_000.0, 800.0);
        assert_eq!(c.selected_id(), "c");
    }

    #[test]
    fn negative_scroll_clamps_to_first() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_scroll(1600.0, 800.0);
        c.on_scroll(-300.0, 800.0);
        assert_eq!(c.selected_id(), "a");
    }

    #[test]
    fn degenerate_scroll_samples_are_ignored() {
        let mut c = controller(&["a", "b", "c"]);
        assert!(!c.on_scroll(800.0, 0.0));
        assert!(!c.on_scroll(f64::NAN, 800.0));
        assert!(!c.on_scroll(800.0, f64::INFINITY));
        assert_eq!(c.selected_id(), "a");
        assert!((c.viewport_height() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scroll_is_suppressed_while_transitioning() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("c");
        for top in [0.0, 400.0, 800.0, 1200.0] {
            assert!(!c.on_scroll(top, 800.0));
        }
        assert_eq!(c.selected_id(), "c");
    }

    #[test]
    fn scroll_sample_remembers_viewport_height() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_scroll(0.0, 600.0);
        let cmd = c.select_entry("b").unwrap();
        assert!((cmd.offset - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn advance_wraps_around() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_scroll(1600.0, 800.0);
        assert_eq!(c.selected_id(), "c");

        let cmd = c.advance_to_next();
        assert_eq!(c.selected_id(), "a");
        assert_eq!(cmd, Some(ScrollCommand { offset: 0.0, animated: true }));
    }

    #[test]
    fn advance_on_single_entry_is_a_no_op() {
        let mut c = controller(&["solo"]);
        assert_eq!(c.advance_to_next(), None);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn enter_and_space_activate() {
        for key in [ControlKey::Enter, ControlKey::Space] {
            let mut c = controller(&["a", "b", "c"]);
            let activation = c.handle_key_activate("b", key);

            assert!(activation.handled);
            assert_eq!(activation.scroll, Some(ScrollCommand { offset: 800.0, animated: true }));
            assert_eq!(c.selected_id(), "b");
            assert!(c.is_transitioning());
        }
    }

    #[test]
    fn activation_on_selected_control_is_still_handled() {
        let mut c = controller(&["a", "b"]);
        let activation = c.handle_key_activate("a", ControlKey::Space);
        assert!(activation.handled);
        assert_eq!(activation.scroll, None);
    }

    #[test]
    fn other_keys_do_not_activate() {
        let mut c = controller(&["a", "b"]);
        let activation = c.handle_key_activate("b", ControlKey::Other);
        assert!(!activation.handled);
        assert_eq!(c.selected_id(), "a");
    }

    #[test]
    fn detach_cancels_timer_and_stops_following() {
        let mut c = controller(&["a", "b", "c"]);
        c.select_entry("b");
        c.detach();

        assert!(!c.is_transitioning());
        assert_eq!(c.scheduler().pending_count(), 0);
        assert!(!c.on_scroll(1600.0, 800.0));
        assert_eq!(c.selected_id(), "b");

        c.attach();
        assert!(c.on_scroll(1600.0, 800.0));
        assert_eq!(c.selected_id(), "c");
    }

    #[test]
    fn invalid_viewport_heights_are_ignored() {
        let mut c = controller(&["a", "b"]);
        c.set_viewport_height(-5.0);
        c.set_viewport_height(f64::NAN);
        assert!((c.viewport_height() - 800.0).abs() < f64::EPSILON);
    }
}
