//! Keyboard focus over the navigation controls.
//!
//! Focus is independent of selection: Tab moves focus without selecting and
//! Space activates the focused control. Enter is global and always advances
//! to the next entry.

/// Which navigation control, if any, holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavFocus {
    #[default]
    None,
    Item(usize),
}

impl NavFocus {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Item(index) => Some(index),
        }
    }

    #[must_use]
    pub const fn is_focused(self, index: usize) -> bool {
        matches!(self, Self::Item(i) if i == index)
    }

    /// Tab: first control, or the one after the current, wrapping.
    #[must_use]
    pub const fn next(self, count: usize) -> Self {
        if count == 0 {
            return Self::None;
        }
        match self {
            Self::None => Self::Item(0),
            Self::Item(i) => Self::Item((i + 1) % count),
        }
    }

    /// Shift-Tab: last control, or the one before the current, wrapping.
    #[must_use]
    pub const fn prev(self, count: usize) -> Self {
        if count == 0 {
            return Self::None;
        }
        match self {
            Self::None => Self::Item(count - 1),
            Self::Item(i) => Self::Item((i + count - 1) % count),
        }
    }
}
