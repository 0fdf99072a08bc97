//! Header component renderer.
//!
//! Renders the section heading and its subtitle, both centered.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the heading at `row` and the subtitle below it.
///
/// The heading is bold in `header_fg`, on `header_bg` when the theme sets one.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&center(&header.title, cols));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.subtitle_fg));
    out.push_str(&center(&header.subtitle, cols));
    out.push_str(Theme::reset());

    row + 2
}
