//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into the shared buffer.
//!
//! # Components
//!
//! - [`header`]: Heading and subtitle
//! - [`footer`]: Keybinding hints and position indicator
//! - [`nav`]: Nav column (wide) and tab strip (compact)
//! - [`card`]: Detail rows
//! - [`empty`]: Notice shown when the pane is too small
//!
//! # Layout Modes
//!
//! - [`render_wide_mode`]: Header + Nav column │ Detail stack + Footer
//! - [`render_compact_mode`]: Header + Tab strip + Detail card + Footer

mod card;
mod empty;
mod footer;
mod header;
mod nav;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use card::render_detail;
use footer::render_footer;
use header::render_header;
use nav::{render_nav_column, render_tab_strip};

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Header, bottom border and footer shared by both layouts.
fn render_chrome(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    let cols = vm.layout.cols;
    let mut row = 2; // row 1 stays blank
    row = render_header(out, row, &vm.header, theme, cols);
    render_border(out, row, &theme.colors.border, cols);

    let footer_row = vm.layout.rows;
    render_border(out, footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders the side-by-side layout.
///
/// ```text
/// [blank line]
/// [Heading]
/// [Subtitle]
/// [Border]
/// [Nav] │ [Detail viewport]
/// [Border]
/// [Footer]
/// ```
pub fn render_wide_mode(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    let layout = &vm.layout;
    render_chrome(out, vm, theme);

    let separator_col = layout.nav_width + 1;
    for row in layout.body_top..layout.body_top + layout.body_height {
        position_cursor(out, row, separator_col);
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push('│');
        out.push_str(Theme::reset());
    }

    render_nav_column(out, layout, &vm.nav, theme);
    render_detail(out, layout, layout.body_top, &vm.detail, theme);
}

/// Renders the tab strip layout.
///
/// ```text
/// [blank line]
/// [Heading]
/// [Subtitle]
/// [Border]
/// [Tabs]
/// [Tab underline]
/// [Selected card]
/// [Border]
/// [Footer]
/// ```
pub fn render_compact_mode(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    let layout = &vm.layout;
    render_chrome(out, vm, theme);

    render_tab_strip(out, layout, &vm.nav, theme);
    render_detail(out, layout, layout.body_top + 2, &vm.detail, theme);
}
