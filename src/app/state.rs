//! Application state management and view model computation.
//!
//! [`AppState`] glues the selection controller to the host: it owns the
//! [`ScrollSurface`] that plays the role of the scrolling container, routes
//! every offset change back to the controller as a scroll sample, and keeps
//! the animation frame timer alongside the controller's transition timer in a
//! single [`TimerQueue`].
//!
//! # State Components
//!
//! - **Controller**: selected entry and `Idle`/`Transitioning` phase
//! - **Surface**: detail scroll offset and running animation
//! - **Focus**: keyboard focus ring over the nav controls
//! - **Layout**: geometry for the last known pane size
//!
//! # Example
//!
//! ```rust
//! use folio::app::AppState;
//! use folio::domain::Catalog;
//! use folio::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! state.resize(30, 120);
//! let viewmodel = state.compute_viewmodel(30, 120);
//! assert_eq!(viewmodel.detail.len(), 24);
//! ```

use std::time::Duration;

use crate::domain::{Catalog, FolioError, Result};
use crate::selection::{
    ControlKey, ScrollCommand, Scheduler, SelectionController, TimerHandle, TimerQueue,
    DEFAULT_TRANSITION,
};
use crate::ui::layout::{Layout, LayoutMode, MIN_COLS, MIN_ROWS};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    detail_page, EmptyState, FooterInfo, HeaderInfo, NavItem, StyledLine, UIViewModel,
};
use crate::viewport::ScrollSurface;

use super::actions::Action;
use super::focus::NavFocus;

pub const DEFAULT_HEADING: &str = "Professional Experience";
pub const DEFAULT_SUBTITLE: &str = "Building scalable solutions across diverse technology stacks";
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Share of the transition window the scroll animation may use, so the
/// surface settles before scroll-follow resumes.
const ANIMATION_SHARE: (u32, u32) = (3, 5);

const WIDE_KEYS: &str = "click/⏎ select · tab focus · ↑↓ scroll · q close";
const COMPACT_KEYS: &str = "click/⏎ select · tab focus · q close";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub controller: SelectionController<TimerQueue>,
    pub surface: ScrollSurface,
    pub theme: Theme,
    pub focus: NavFocus,
    pub layout: Layout,
    pub heading: String,
    pub subtitle: String,
    pub visible: bool,
    frame_interval: Duration,
    animation_frames: u32,
    /// Pending animation frame timer, if one is in flight.
    frame_timer: Option<TimerHandle>,
}

impl AppState {
    /// Creates state for `catalog` with default timing and copy.
    ///
    /// The layout is unknown until the first [`resize`](Self::resize).
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let pages = catalog.len();
        Self {
            controller: SelectionController::new(catalog, TimerQueue::default()),
            surface: ScrollSurface::new(pages, 0),
            theme,
            focus: NavFocus::None,
            layout: Layout::compute(0, 0),
            heading: DEFAULT_HEADING.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            visible: true,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            animation_frames: animation_frames(DEFAULT_TRANSITION, DEFAULT_FRAME_INTERVAL),
            frame_timer: None,
        }
    }

    /// Sets the transition window and animation frame interval.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] unless `0 < frame_interval < transition`.
    pub fn set_timing(&mut self, transition: Duration, frame_interval: Duration) -> Result<()> {
        if frame_interval.is_zero() || frame_interval >= transition {
            return Err(FolioError::Config(format!(
                "frame interval {frame_interval:?} must be non-zero and shorter than transition {transition:?}"
            )));
        }

        self.controller.set_transition(transition);
        self.frame_interval = frame_interval;
        self.animation_frames = animation_frames(transition, frame_interval);
        Ok(())
    }

    #[must_use]
    pub fn with_copy(mut self, heading: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.heading = heading.into();
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub const fn animation_frames(&self) -> u32 {
        self.animation_frames
    }

    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    fn entry_count(&self) -> usize {
        self.controller.catalog().len()
    }

    /// Nav controls the focus ring may land on: only those drawn on screen.
    fn focusable_count(&self) -> usize {
        self.layout.visible_nav_items(self.entry_count())
    }

    /// Applies a new pane size. Returns `true` if the layout changed.
    ///
    /// The surface re-anchors on the selected entry and the controller learns
    /// the new viewport height.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let layout = Layout::compute(rows, cols);
        if layout == self.layout {
            return false;
        }

        let viewport = layout.viewport_height();
        tracing::debug!(rows, cols, mode = ?layout.mode, viewport, "layout changed");

        self.layout = layout;
        if self.focus.index().is_some_and(|i| i >= self.focusable_count()) {
            self.focus = NavFocus::None;
        }
        self.surface.resize(viewport, self.controller.selected_index());
        #[allow(clippy::cast_precision_loss)]
        self.controller.set_viewport_height(viewport as f64);
        true
    }

    /// Enter. Advances to the next entry whether or not a nav control has
    /// focus; the focused control only reacts to Space.
    pub fn confirm(&mut self) -> bool {
        match self.controller.advance_to_next() {
            Some(command) => {
                self.run_scroll(command);
                true
            }
            None => false,
        }
    }

    /// Key press on the focused nav control. Returns `true` if it was handled.
    pub fn activate_focused(&mut self, key: ControlKey) -> bool {
        let Some(index) = self.focus.index() else {
            return false;
        };
        let Some(id) = self.controller.catalog().get(index).map(|e| e.id.clone()) else {
            return false;
        };

        let activation = self.controller.handle_key_activate(&id, key);
        if let Some(command) = activation.scroll {
            self.run_scroll(command);
        }
        activation.handled
    }

    pub fn focus_next(&mut self) -> bool {
        self.focus = self.focus.next(self.focusable_count());
        true
    }

    pub fn focus_prev(&mut self) -> bool {
        self.focus = self.focus.prev(self.focusable_count());
        true
    }

    pub fn clear_focus(&mut self) -> bool {
        let had_focus = self.focus != NavFocus::None;
        self.focus = NavFocus::None;
        had_focus
    }

    /// Mouse click at 0-indexed pane coordinates.
    ///
    /// A click on a nav control focuses it and selects its entry.
    pub fn click(&mut self, line: usize, col: usize) -> bool {
        let Some(index) = self.layout.nav_item_at(line + 1, col + 1, self.entry_count()) else {
            return false;
        };
        let Some(id) = self.controller.catalog().get(index).map(|e| e.id.clone()) else {
            return false;
        };

        self.focus = NavFocus::Item(index);
        if let Some(command) = self.controller.select_entry(&id) {
            self.run_scroll(command);
        }
        true
    }

    /// User scroll by `lines` rows. Only the wide layout scrolls.
    pub fn scroll_lines(&mut self, lines: isize) -> bool {
        if self.layout.mode != LayoutMode::Wide {
            return false;
        }

        let moved = self.surface.scroll_by(lines);
        if moved {
            self.report_scroll();
        }
        moved
    }

    /// User scroll by whole viewports.
    pub fn scroll_pages(&mut self, pages: isize) -> bool {
        let viewport = isize::try_from(self.surface.viewport()).unwrap_or(isize::MAX);
        self.scroll_lines(pages.saturating_mul(viewport))
    }

    /// Pane shown or hidden: remount or unmount the controller.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if visible == self.visible {
            return false;
        }

        self.visible = visible;
        if visible {
            self.controller.attach();
        } else {
            self.controller.detach();
        }
        visible
    }

    /// A host timer fired after `seconds`.
    ///
    /// Frame timers advance the scroll animation; anything else is offered to
    /// the controller as a possible end of transition.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] if `seconds` is not a valid duration.
    pub fn timer_elapsed(&mut self, seconds: f64) -> Result<bool> {
        let elapsed = Duration::try_from_secs_f64(seconds)
            .map_err(|e| FolioError::Parse(format!("invalid timer duration {seconds}: {e}")))?;

        let Some(handle) = self.controller.scheduler_mut().fire(elapsed) else {
            return Ok(false);
        };

        if self.frame_timer == Some(handle) {
            self.frame_timer = None;
            let more = self.surface.tick();
            self.report_scroll();
            if more {
                self.ensure_frame_timer();
            }
            return Ok(true);
        }

        Ok(self.controller.on_timer(handle))
    }

    /// Drains timer requests into host actions.
    pub fn take_timer_actions(&mut self) -> Vec<Action> {
        self.controller
            .scheduler_mut()
            .take_requests()
            .into_iter()
            .map(Action::SetTimeout)
            .collect()
    }

    fn run_scroll(&mut self, command: ScrollCommand) {
        if self.surface.apply(command, self.animation_frames) {
            self.ensure_frame_timer();
        } else {
            self.report_scroll();
        }
    }

    fn ensure_frame_timer(&mut self) {
        if self.frame_timer.is_none() {
            let interval = self.frame_interval;
            self.frame_timer = Some(self.controller.scheduler_mut().schedule(interval));
        }
    }

    /// Feeds the surface offset to the controller, as a scroll event would.
    #[allow(clippy::cast_precision_loss)]
    fn report_scroll(&mut self) -> bool {
        let viewport = self.surface.viewport();
        if viewport == 0 {
            return false;
        }
        self.controller
            .on_scroll(self.surface.offset() as f64, viewport as f64)
    }

    /// Computes the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = Layout::compute(rows, cols);
        let selected = self.controller.selected_index();

        let header = HeaderInfo {
            title: self.heading.clone(),
            subtitle: self.subtitle.clone(),
        };
        let footer = FooterInfo {
            keybindings: if layout.is_wide() { WIDE_KEYS } else { COMPACT_KEYS }.to_string(),
            status: format!("{}/{}", selected + 1, self.entry_count()),
        };

        if layout.mode == LayoutMode::TooSmall {
            return UIViewModel {
                layout,
                header,
                nav: vec![],
                detail: vec![],
                footer,
                empty_state: Some(EmptyState {
                    message: "Pane too small".to_string(),
                    subtitle: format!("Resize to at least {MIN_COLS}×{MIN_ROWS}"),
                }),
            };
        }

        let nav = self
            .controller
            .catalog()
            .iter()
            .enumerate()
            .map(|(index, entry)| NavItem {
                label: entry.company.clone(),
                accent: entry.color.clone(),
                is_selected: index == selected,
                is_focused: self.focus.is_focused(index),
            })
            .collect();

        UIViewModel {
            layout,
            header,
            nav,
            detail: self.detail_rows(&layout),
            footer,
            empty_state: None,
        }
    }

    /// Visible detail rows: a window over the page stack in the wide layout,
    /// the selected page alone in the compact one.
    fn detail_rows(&self, layout: &Layout) -> Vec<StyledLine> {
        let height = layout.viewport_height();
        let width = layout.detail_width.saturating_sub(2);
        if height == 0 {
            return vec![];
        }

        if !layout.is_wide() {
            return detail_page(self.controller.selected_entry(), width, height);
        }

        let offset = self.surface.offset();
        let mut rows: Vec<StyledLine> = self
            .controller
            .catalog()
            .iter()
            .skip(offset / height)
            .take(2)
            .flat_map(|entry| detail_page(entry, width, height))
            .skip(offset % height)
            .take(height)
            .collect();
        rows.resize(height, StyledLine::blank());
        rows
    }
}

fn animation_frames(transition: Duration, frame_interval: Duration) -> u32 {
    let budget = transition.as_millis() * u128::from(ANIMATION_SHARE.0) / u128::from(ANIMATION_SHARE.1);
    let frames = budget / frame_interval.as_millis().max(1);
    u32::try_from(frames).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 0.05;

    fn state() -> AppState {
        let mut state = AppState::new(Catalog::builtin(), Theme::default());
        state.resize(30, 120);
        state
    }

    /// Fires host timers for every pending request until none are left or
    /// `limit` timers have fired.
    fn run_timers(state: &mut AppState, limit: usize) -> Vec<Duration> {
        let mut fired = Vec::new();
        let mut pending: Vec<Duration> = state
            .take_timer_actions()
            .into_iter()
            .map(|a| match a {
                Action::SetTimeout(d) => d,
                Action::CloseFocus => unreachable!(),
            })
            .collect();
        pending.sort();

        while let Some(next) = pending.first().copied() {
            if fired.len() == limit {
                break;
            }
            pending.remove(0);
            state.timer_elapsed(next.as_secs_f64()).unwrap();
            fired.push(next);
            for action in state.take_timer_actions() {
                if let Action::SetTimeout(d) = action {
                    pending.push(d);
                }
            }
            pending.sort();
        }
        fired
    }

    #[test]
    fn frames_fit_in_transition_window() {
        assert_eq!(animation_frames(Duration::from_millis(1000), Duration::from_millis(50)), 12);
        assert_eq!(animation_frames(Duration::from_millis(100), Duration::from_millis(90)), 1);
    }

    #[test]
    fn timing_must_leave_room_for_frames() {
        let mut state = AppState::new(Catalog::builtin(), Theme::default());
        assert!(state.set_timing(Duration::from_millis(50), Duration::from_millis(50)).is_err());
        assert!(state.set_timing(Duration::from_millis(500), Duration::ZERO).is_err());
        assert_eq!(state.controller.transition(), DEFAULT_TRANSITION);

        state
            .set_timing(Duration::from_millis(500), Duration::from_millis(25))
            .unwrap();
        assert_eq!(state.animation_frames(), 12);
        assert_eq!(state.controller.transition(), Duration::from_millis(500));
    }

    #[test]
    fn resize_sets_viewport() {
        let state = state();
        assert_eq!(state.surface.viewport(), 24);
        assert!((state.controller.viewport_height() - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confirm_without_focus_advances_and_animates() {
        let mut state = state();
        assert!(state.confirm());
        assert_eq!(state.controller.selected_id(), "talentrise");
        assert!(state.controller.is_transitioning());
        assert!(state.surface.is_animating());

        let actions = state.take_timer_actions();
        assert_eq!(
            actions,
            vec![
                Action::SetTimeout(Duration::from_millis(1000)),
                Action::SetTimeout(Duration::from_millis(50)),
            ]
        );
    }

    #[test]
    fn animation_echo_does_not_move_selection() {
        let mut state = state();
        state.confirm();
        let fired = run_timers(&mut state, 100);

        assert_eq!(fired.iter().filter(|d| **d == Duration::from_millis(50)).count(), 12);
        assert_eq!(state.surface.offset(), 24);
        assert_eq!(state.controller.selected_id(), "talentrise");
        assert!(!state.controller.is_transitioning());
        assert!(state.frame_timer.is_none());
    }

    #[test]
    fn scroll_follows_when_idle() {
        let mut state = state();
        assert!(state.scroll_lines(40));
        assert_eq!(state.controller.selected_id(), "21twelve");
        assert!(state.take_timer_actions().is_empty());
    }

    #[test]
    fn scroll_is_ignored_while_transitioning() {
        let mut state = state();
        state.confirm();
        state.scroll_lines(48);
        assert_eq!(state.controller.selected_id(), "talentrise");
    }

    #[test]
    fn compact_layout_does_not_scroll() {
        let mut state = state();
        state.resize(30, 80);
        assert!(!state.scroll_lines(5));
        assert!(!state.scroll_pages(1));
    }

    #[test]
    fn focused_enter_still_advances() {
        let mut state = state();
        state.focus_prev();
        assert_eq!(state.focus, NavFocus::Item(2));

        assert!(state.confirm());
        assert_eq!(state.controller.selected_id(), "talentrise");
        assert_eq!(state.focus, NavFocus::Item(2));
    }

    #[test]
    fn focused_enter_on_selected_entry_advances() {
        let mut state = state();
        state.focus_next();
        assert!(state.confirm());
        assert_eq!(state.controller.selected_id(), "talentrise");
        assert!(state.controller.is_transitioning());
    }

    #[test]
    fn focused_space_selects_focused_entry() {
        let mut state = state();
        state.focus_prev();
        assert!(state.activate_focused(ControlKey::Space));
        assert_eq!(state.controller.selected_id(), "21twelve");
    }

    #[test]
    fn focus_ring_skips_hidden_nav_items() {
        let catalog = Catalog::new(
            ["a", "b", "c", "d", "e"]
                .iter()
                .map(|id| {
                    let mut entry = Catalog::builtin().first().clone();
                    entry.id = (*id).to_string();
                    entry
                })
                .collect(),
        )
        .unwrap();
        let mut state = AppState::new(catalog, Theme::default());
        state.resize(12, 120);
        assert_eq!(state.layout.nav_capacity(), 3);

        state.focus_prev();
        assert_eq!(state.focus, NavFocus::Item(2));
        state.focus_next();
        assert_eq!(state.focus, NavFocus::Item(0));
    }

    #[test]
    fn shrinking_pane_drops_focus_on_hidden_item() {
        let mut state = state();
        state.resize(30, 120);
        state.focus_prev();
        assert_eq!(state.focus, NavFocus::Item(2));

        state.resize(10, 120);
        assert_eq!(state.layout.nav_capacity(), 2);
        assert_eq!(state.focus, NavFocus::None);
    }

    #[test]
    fn space_without_focus_is_ignored() {
        let mut state = state();
        assert!(!state.activate_focused(ControlKey::Space));
        assert_eq!(state.controller.selected_id(), "tjcg");
    }

    #[test]
    fn click_focuses_and_selects() {
        let mut state = state();
        // row 8 (1-indexed) is the second nav item
        assert!(state.click(7, 3));
        assert_eq!(state.focus, NavFocus::Item(1));
        assert_eq!(state.controller.selected_id(), "talentrise");

        assert!(!state.click(7, 60));
    }

    #[test]
    fn hiding_detaches_controller() {
        let mut state = state();
        state.confirm();
        assert!(!state.set_visible(false));
        assert!(!state.controller.is_transitioning());
        assert!(!state.controller.is_attached());

        state.set_visible(true);
        assert!(state.controller.is_attached());
    }

    #[test]
    fn stale_transition_timer_is_swallowed() {
        let mut state = state();
        state.confirm();
        state.confirm();
        assert_eq!(state.controller.selected_id(), "21twelve");

        // first transition timer was cancelled
        assert!(!state.timer_elapsed(1.0).unwrap());
        assert!(state.controller.is_transitioning());
        assert!(state.timer_elapsed(1.0).unwrap());
        assert!(!state.controller.is_transitioning());
    }

    #[test]
    fn invalid_timer_duration_is_an_error() {
        let mut state = state();
        assert!(state.timer_elapsed(f64::NAN).is_err());
        assert!(state.timer_elapsed(-1.0).is_err());
        assert!(!state.timer_elapsed(FRAME).unwrap());
    }

    #[test]
    fn viewmodel_windows_the_page_stack() {
        let mut state = state();
        state.scroll_lines(24);
        let vm = state.compute_viewmodel(30, 120);

        assert_eq!(vm.detail.len(), 24);
        assert!(vm.detail[0].text().contains("Talentrise"));
        assert!(vm.nav[1].is_selected);
        assert_eq!(vm.footer.status, "2/3");
    }

    #[test]
    fn tiny_pane_shows_notice() {
        let state = state();
        let vm = state.compute_viewmodel(8, 120);
        assert_eq!(vm.empty_state.unwrap().message, "Pane too small");
    }
}
