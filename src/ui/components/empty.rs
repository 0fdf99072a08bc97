//! Empty state component renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line centered notice, vertically centered in `rows`.
///
/// Used when the pane is too small for any layout.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    let row = (rows / 2).max(1);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&center(&empty.message, cols));
    out.push_str(Theme::reset());

    if rows > row {
        position_cursor(out, row + 1, 1);
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&center(&empty.subtitle, cols));
        out.push_str(Theme::reset());
    }
}
