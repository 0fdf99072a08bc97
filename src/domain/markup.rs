//! Inline `**bold**` markup used in entry detail bullets.
//!
//! Detail strings are authored as plain text with `**` pairs marking bold runs.
//! Markers pair left to right. A trailing marker without a partner is kept as
//! literal text so a stray `**` never swallows the rest of the line.

/// A run of text sharing the same emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false }
    }

    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: true }
    }
}

const MARKER: &str = "**";

/// Splits `text` into plain and bold spans.
///
/// Empty runs (for example `****`) are dropped.
///
/// # Example
///
/// ```
/// use folio::domain::markup::{parse_bold, Span};
///
/// let spans = parse_bold("Built **REST APIs** in Rust");
/// assert_eq!(spans, vec![
///     Span::plain("Built "),
///     Span::bold("REST APIs"),
///     Span::plain(" in Rust"),
/// ]);
/// ```
#[must_use]
pub fn parse_bold(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    loop {
        let Some(open) = rest.find(MARKER) else {
            push_span(&mut spans, rest, false);
            break;
        };
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            // unpaired marker: everything from here on is literal
            push_span(&mut spans, rest, false);
            break;
        };

        push_span(&mut spans, &rest[..open], false);
        push_span(&mut spans, &after_open[..close], true);
        rest = &after_open[close + MARKER.len()..];
    }

    spans
}

/// Appends `text`, merging with the previous span when emphasis matches.
fn push_span(spans: &mut Vec<Span>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.bold == bold => last.text.push_str(text),
        _ => spans.push(Span { text: text.to_string(), bold }),
    }
}
