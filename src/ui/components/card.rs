//! Detail area renderer.

use crate::ui::helpers::{position_cursor, render_styled_line};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StyledLine;

/// Writes the visible detail rows starting at `top`, within the detail
/// columns of `layout`.
pub fn render_detail(out: &mut String, layout: &Layout, top: usize, lines: &[StyledLine], theme: &Theme) {
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(out, top + offset, layout.detail_left);
        render_styled_line(out, line, theme, layout.detail_width.saturating_sub(1));
    }
}
