//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready data only: the detail area arrives
//! already wrapped, windowed to the scroll offset and cut to the viewport.

use crate::domain::markup::Span;
use crate::domain::{BulletDepth, Entry};
use crate::ui::helpers::{display_width, wrap_spans};
use crate::ui::layout::Layout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub layout: Layout,
    pub header: HeaderInfo,
    /// Nav column (wide) or tab strip (compact) items, in catalog order.
    pub nav: Vec<NavItem>,
    /// Visible detail rows, exactly `layout.viewport_height()` of them.
    pub detail: Vec<StyledLine>,
    pub footer: FooterInfo,
    /// Replaces everything else when set.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// One navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// Entry accent color, `#rrggbb`.
    pub accent: String,
    pub is_selected: bool,
    /// Holds keyboard focus (independent of selection).
    pub is_focused: bool,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Right-aligned position indicator, e.g. `2/3`.
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Semantic style of a run of detail text; the renderer maps it to theme
/// colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    /// Entry accent color.
    Accent { color: String, bold: bool },
    Title,
    Meta,
    Body,
    /// `**bold**` inside bullets.
    Strong,
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: TextStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![StyledSpan::new(text, TextStyle::Plain)],
        }
    }

    /// Concatenated text without styling.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

const ACCENT_BAR: &str = "▌ ";
const TOP_BULLET: &str = "  • ";
const NESTED_BULLET: &str = "      ◦ ";

/// Lays out one entry as a detail page exactly `height` rows tall.
///
/// ```text
/// ▌ Software Developer @ TJCG
/// ▌ Jan 2024 - Present · Toronto, ON
/// ────────────────────────────────
///
///   • bullet text, wrapped
///         continuation
///       ◦ nested bullet
/// ```
///
/// Bullets that do not fit are replaced by a trailing `…` row.
#[must_use]
pub fn detail_page(entry: &Entry, width: usize, height: usize) -> Vec<StyledLine> {
    let accent = |bold: bool| TextStyle::Accent {
        color: entry.color.clone(),
        bold,
    };

    let mut lines = vec![
        StyledLine {
            spans: vec![
                StyledSpan::new(ACCENT_BAR, accent(false)),
                StyledSpan::new(entry.title.clone(), TextStyle::Title),
                StyledSpan::new(" @ ", TextStyle::Meta),
                StyledSpan::new(entry.company.clone(), accent(true)),
            ],
        },
        StyledLine {
            spans: vec![
                StyledSpan::new(ACCENT_BAR, accent(false)),
                StyledSpan::new(format!("{} · {}", entry.duration, entry.location), TextStyle::Meta),
            ],
        },
        StyledLine {
            spans: vec![StyledSpan::new("─".repeat(width), TextStyle::Rule)],
        },
        StyledLine::blank(),
    ];

    for detail in entry.detail_lines() {
        let prefix = match detail.depth {
            BulletDepth::Top => TOP_BULLET,
            BulletDepth::Nested => NESTED_BULLET,
        };
        let indent = display_width(prefix);
        let wrapped = wrap_spans(&detail.spans, width.saturating_sub(indent));

        for (i, row) in wrapped.into_iter().enumerate() {
            let lead = if i == 0 {
                StyledSpan::new(prefix, accent(false))
            } else {
                StyledSpan::new(" ".repeat(indent), TextStyle::Plain)
            };
            let mut spans = vec![lead];
            spans.extend(row.into_iter().map(body_span));
            lines.push(StyledLine { spans });
        }
    }

    if lines.len() > height {
        lines.truncate(height.saturating_sub(1));
        if height > 0 {
            lines.push(StyledLine {
                spans: vec![StyledSpan::new("  …", TextStyle::Meta)],
            });
        }
    }
    lines.resize(height, StyledLine::blank());
    lines
}

fn body_span(span: Span) -> StyledSpan {
    let style = if span.bold { TextStyle::Strong } else { TextStyle::Body };
    StyledSpan::new(span.text, style)
}
