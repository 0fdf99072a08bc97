//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the components for the layout mode
//!
//! The frame is assembled in a buffer and printed once.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::LayoutMode;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI output.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut out = String::new();
    render_viewmodel(&mut out, &viewmodel, &state.theme);
    out
}

fn render_viewmodel(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(out, empty, theme, vm.layout.rows, vm.layout.cols);
        return;
    }

    match vm.layout.mode {
        LayoutMode::Wide => components::render_wide_mode(out, vm, theme),
        LayoutMode::Compact => components::render_compact_mode(out, vm, theme),
        LayoutMode::TooSmall => {}
    }
}
