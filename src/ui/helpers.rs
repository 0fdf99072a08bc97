//! Shared rendering utilities.
//!
//! Components write into a frame buffer (`&mut String`) rather than straight to
//! stdout, so a whole frame is emitted with a single `print!` and can be
//! inspected in tests. Widths are terminal columns as reported by
//! `unicode-width`, so CJK text counts double.

use std::fmt::Write as _;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::markup::Span;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StyledLine, TextStyle};

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Columns taken by one `char`; control characters count as one.
fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(1)
}

/// Longest prefix of `text` that fits in `width` columns.
fn take_columns(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        let w = char_width(ch);
        if used + w > width {
            return &text[..i];
        }
        used += w;
    }
    text
}

/// Cuts `text` to at most `width` columns, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut = take_columns(text, width - 1).to_string();
    cut.push('…');
    cut
}

/// Truncates `text` to `width` columns and pads it with spaces to exactly
/// `width`.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let mut text = truncate(text, width);
    let len = display_width(&text);
    text.push_str(&" ".repeat(width.saturating_sub(len)));
    text
}

/// Centers `text` in `width` columns, truncating if needed.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = display_width(&text);
    let spare = width.saturating_sub(len);
    let left = spare / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(spare - left))
}

/// Writes a styled line clipped and padded to exactly `width` columns.
pub fn render_styled_line(out: &mut String, line: &StyledLine, theme: &Theme, width: usize) {
    let mut remaining = width;

    for span in &line.spans {
        if remaining == 0 {
            break;
        }
        let text = take_columns(&span.text, remaining);
        remaining -= display_width(text);

        out.push_str(&style_prefix(&span.style, theme));
        out.push_str(text);
        out.push_str(Theme::reset());
    }

    out.push_str(&" ".repeat(remaining));
}

fn style_prefix(style: &TextStyle, theme: &Theme) -> String {
    let colors = &theme.colors;
    match style {
        TextStyle::Plain => String::new(),
        TextStyle::Accent { color, bold } => {
            let fg = Theme::fg(color);
            if *bold {
                format!("{}{fg}", Theme::bold())
            } else {
                fg
            }
        }
        TextStyle::Title => format!("{}{}", Theme::bold(), Theme::fg(&colors.header_fg)),
        TextStyle::Meta => Theme::fg(&colors.text_dim),
        TextStyle::Body => Theme::fg(&colors.text_normal),
        TextStyle::Strong => format!("{}{}", Theme::bold(), Theme::fg(&colors.header_fg)),
        TextStyle::Rule => Theme::fg(&colors.border),
    }
}

/// Word-wraps emphasised text to `width` columns.
///
/// Words are split on whitespace; a word wider than `width` is broken
/// mid-word, and a single glyph wider than `width` gets a row of its own. Emphasis is kept per character, so `**React**-based` stays one
/// word with a bold prefix.
#[must_use]
pub fn wrap_spans(spans: &[Span], width: usize) -> Vec<Vec<Span>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line: Vec<Span> = Vec::new();
    let mut line_len = 0;

    for word in split_words(spans) {
        let word_len: usize = word.iter().map(|s| display_width(&s.text)).sum();

        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            push_span(&mut line, Span::plain(" "));
            line_len += 1;
        }

        if word_len <= width {
            for span in word {
                push_span(&mut line, span);
            }
            line_len += word_len;
            continue;
        }

        for span in word {
            for ch in span.text.chars() {
                let w = char_width(ch);
                if line_len > 0 && line_len + w > width {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                push_span(
                    &mut line,
                    Span {
                        text: ch.to_string(),
                        bold: span.bold,
                    },
                );
                line_len += w;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn split_words(spans: &[Span]) -> Vec<Vec<Span>> {
    let mut words = Vec::new();
    let mut word: Vec<Span> = Vec::new();

    for span in spans {
        let mut piece = String::new();
        for ch in span.text.chars() {
            if ch.is_whitespace() {
                if !piece.is_empty() {
                    push_span(
                        &mut word,
                        Span {
                            text: std::mem::take(&mut piece),
                            bold: span.bold,
                        },
                    );
                }
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            } else {
                piece.push(ch);
            }
        }
        if !piece.is_empty() {
            push_span(&mut word, Span { text: piece, bold: span.bold });
        }
    }

    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Appends `span`, merging it into the last span when emphasis matches.
fn push_span(line: &mut Vec<Span>, span: Span) {
    match line.last_mut() {
        Some(last) if last.bold == span.bold => last.text.push_str(&span.text),
        _ => line.push(span),
    }
}
