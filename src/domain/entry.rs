//! Experience entry domain model.
//!
//! An [`Entry`] is one employer/role in the fixed, ordered experience list.
//! Entries are immutable after loading; their position in the catalog is
//! their ordinal for scroll math.

use serde::{Deserialize, Serialize};

use super::markup::{parse_bold, Span};

/// Prefix marking a detail bullet as nested under the previous one.
const NESTED_PREFIX: &str = "  - ";

/// One employer/role in the experience section.
///
/// # Fields
///
/// - `id`: unique identifier, referenced by navigation controls
/// - `company`: organization name shown in the navigation list
/// - `title`: role held at the organization
/// - `duration`: free-form date range ("2021 – 2023")
/// - `location`: "Remote", "Onsite", a city, ...
/// - `color`: accent color as `#rrggbb`
/// - `logo`: optional logo reference, carried through but not rendered
/// - `details`: bullet strings with optional `**bold**` markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub company: String,
    pub title: String,
    pub duration: String,
    pub location: String,
    pub color: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Indentation level of a detail bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletDepth {
    Top,
    Nested,
}

/// A detail bullet split into styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub depth: BulletDepth,
    pub spans: Vec<Span>,
}

impl DetailLine {
    /// Parses one raw detail string.
    ///
    /// ```
    /// use folio::domain::entry::{BulletDepth, DetailLine};
    ///
    /// let line = DetailLine::parse("  - Mentored **two** juniors");
    /// assert_eq!(line.depth, BulletDepth::Nested);
    /// assert_eq!(line.spans.len(), 3);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(NESTED_PREFIX) {
            Some(content) => Self {
                depth: BulletDepth::Nested,
                spans: parse_bold(content),
            },
            None => Self {
                depth: BulletDepth::Top,
                spans: parse_bold(raw),
            },
        }
    }
}

impl Entry {
    /// Returns the parsed detail bullets in authoring order.
    #[must_use]
    pub fn detail_lines(&self) -> Vec<DetailLine> {
        self.details.iter().map(|d| DetailLine::parse(d)).collect()
    }
}
