//! Footer component renderer.

use crate::ui::helpers::{center, display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the help bar at `row`: keybindings centered, status on the right.
///
/// The status is dropped when the pane is too narrow to hold both.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let status_len = display_width(&footer.status);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));

    if status_len + 2 < cols / 4 {
        let help_width = cols - status_len - 1;
        out.push_str(&center(&footer.keybindings, help_width));
        out.push_str(&truncate(&footer.status, status_len));
        out.push(' ');
    } else {
        out.push_str(&center(&footer.keybindings, cols));
    }

    out.push_str(Theme::reset());
    row + 1
}
