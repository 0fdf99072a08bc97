//! Navigation controls: the wide layout's nav column and the compact tab
//! strip.

use crate::ui::helpers::{center, pad_right, position_cursor};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavItem;

const SELECTED_BAR: &str = "▌";
const FOCUS_MARKER: &str = "›";
const SELECTED_ARROW: &str = " ▸ ";

/// Renders the nav column, one item every other row from the top of the body.
///
/// ```text
/// ▌› Company        ▸
///
///    Other company
/// ```
pub fn render_nav_column(out: &mut String, layout: &Layout, items: &[NavItem], theme: &Theme) {
    let label_width = layout.nav_width.saturating_sub(6);

    for (index, item) in items.iter().enumerate().take(layout.nav_capacity()) {
        position_cursor(out, layout.nav_row(index), 1);
        let label = pad_right(&item.label, label_width);

        if item.is_selected {
            out.push_str(&Theme::bg(&theme.colors.nav_selected_bg));
            out.push_str(&Theme::fg(&item.accent));
            out.push_str(SELECTED_BAR);
        } else {
            out.push(' ');
        }

        if item.is_focused {
            out.push_str(&Theme::fg(&theme.colors.focus_fg));
            out.push_str(FOCUS_MARKER);
        } else {
            out.push(' ');
        }
        out.push(' ');

        if item.is_selected {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.nav_selected_fg));
            out.push_str(&label);
            out.push_str(&Theme::fg(&item.accent));
            out.push_str(SELECTED_ARROW);
        } else {
            out.push_str(&Theme::fg(&theme.colors.nav_fg));
            out.push_str(&label);
            out.push_str("   ");
        }
        out.push_str(Theme::reset());
    }
}

/// Renders the compact tab strip at the top of the body, with the selected
/// tab underlined in its accent color on the row below.
pub fn render_tab_strip(out: &mut String, layout: &Layout, items: &[NavItem], theme: &Theme) {
    let tab_width = layout.tab_width(items.len());
    let row = layout.body_top;

    position_cursor(out, row, 1);
    let mut used = 0;
    for item in items {
        let label = if item.is_focused {
            format!("{FOCUS_MARKER}{}", item.label)
        } else {
            item.label.clone()
        };

        if item.is_selected {
            out.push_str(&Theme::bg(&theme.colors.nav_selected_bg));
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.nav_selected_fg));
        } else if item.is_focused {
            out.push_str(&Theme::fg(&theme.colors.focus_fg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.nav_fg));
        }
        out.push_str(&center(&label, tab_width));
        out.push_str(Theme::reset());
        used += tab_width;
    }
    out.push_str(&" ".repeat(layout.cols.saturating_sub(used)));

    position_cursor(out, row + 1, 1);
    for item in items {
        let color = if item.is_selected { &item.accent } else { &theme.colors.border };
        out.push_str(&Theme::fg(color));
        out.push_str(&"─".repeat(tab_width));
    }
    out.push_str(&Theme::fg(&theme.colors.border));
    out.push_str(&"─".repeat(layout.cols.saturating_sub(used)));
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::display_width;

    fn item(label: &str, is_selected: bool) -> NavItem {
        NavItem {
            label: label.to_string(),
            accent: "#06b6d4".to_string(),
            is_selected,
            is_focused: false,
        }
    }

    #[test]
    fn wide_labels_are_cut_to_column_width() {
        let layout = Layout::compute(30, 120);
        assert_eq!(layout.nav_width, 30);

        let mut out = String::new();
        let items = [item("株式会社タレントライズテクノクラート", true), item("Tjcg", false)];
        render_nav_column(&mut out, &layout, &items, &Theme::default());

        let label = "株式会社タレントライズ… ";
        assert_eq!(display_width(label), 24);
        assert!(out.contains(label));
        assert!(out.contains(&format!("Tjcg{}", " ".repeat(20))));
    }
}
