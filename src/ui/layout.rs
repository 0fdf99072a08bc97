//! Pane geometry for the experience section.
//!
//! All rows and columns are 1-indexed terminal coordinates.
//!
//! ```text
//! row 1          blank
//! row 2          heading
//! row 3          subtitle
//! row 4          border
//! rows 5..=r-2   body (nav + detail, or tab strip + card)
//! row r-1        border
//! row r          footer
//! ```

/// Narrowest pane that gets the side-by-side layout.
pub const WIDE_MIN_COLS: usize = 100;
pub const MIN_COLS: usize = 30;
pub const MIN_ROWS: usize = 10;

const BODY_TOP: usize = 5;
/// Rows outside the body: four above, two below.
const CHROME_ROWS: usize = 6;
const NAV_MIN_WIDTH: usize = 22;
/// Each nav item is a label row followed by a spacer row.
const NAV_ITEM_STRIDE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Nav column beside a scrolling stack of cards.
    Wide,
    /// Tab strip above the selected card.
    Compact,
    TooSmall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub mode: LayoutMode,
    pub rows: usize,
    pub cols: usize,
    pub body_top: usize,
    pub body_height: usize,
    /// Width of the nav column (wide) or 0.
    pub nav_width: usize,
    /// First column of the detail area.
    pub detail_left: usize,
    pub detail_width: usize,
}

impl Layout {
    #[must_use]
    pub fn compute(rows: usize, cols: usize) -> Self {
        let body_height = rows.saturating_sub(CHROME_ROWS);

        let mode = if rows < MIN_ROWS || cols < MIN_COLS {
            LayoutMode::TooSmall
        } else if cols >= WIDE_MIN_COLS {
            LayoutMode::Wide
        } else {
            LayoutMode::Compact
        };

        let (nav_width, detail_left, detail_width) = match mode {
            LayoutMode::Wide => {
                let nav = (cols / 4).max(NAV_MIN_WIDTH);
                // one separator column between nav and detail
                (nav, nav + 2, cols.saturating_sub(nav + 1))
            }
            LayoutMode::Compact | LayoutMode::TooSmall => (0, 1, cols),
        };

        Self {
            mode,
            rows,
            cols,
            body_top: BODY_TOP,
            body_height,
            nav_width,
            detail_left,
            detail_width,
        }
    }

    /// Height of one detail page, which is also the scroll viewport.
    ///
    /// The compact layout spends two body rows on the tab strip.
    #[must_use]
    pub const fn viewport_height(&self) -> usize {
        match self.mode {
            LayoutMode::Wide => self.body_height,
            LayoutMode::Compact => self.body_height.saturating_sub(2),
            LayoutMode::TooSmall => 0,
        }
    }

    #[must_use]
    pub const fn is_wide(&self) -> bool {
        matches!(self.mode, LayoutMode::Wide)
    }

    /// Screen row of nav item `index` in the wide layout.
    #[must_use]
    pub const fn nav_row(&self, index: usize) -> usize {
        self.body_top + 1 + index * NAV_ITEM_STRIDE
    }

    /// How many nav items fit in the body.
    #[must_use]
    pub const fn nav_capacity(&self) -> usize {
        (self.body_height.saturating_sub(1) + NAV_ITEM_STRIDE - 1) / NAV_ITEM_STRIDE
    }

    /// How many of `count` nav controls are on screen and can take focus.
    #[must_use]
    pub fn visible_nav_items(&self, count: usize) -> usize {
        match self.mode {
            LayoutMode::Wide => count.min(self.nav_capacity()),
            LayoutMode::Compact => count,
            LayoutMode::TooSmall => 0,
        }
    }

    /// Width of each tab in the compact strip.
    #[must_use]
    pub fn tab_width(&self, count: usize) -> usize {
        if count == 0 {
            return self.cols;
        }
        (self.cols / count).max(1)
    }

    /// Maps a click at `(row, col)` to the nav item under it.
    #[must_use]
    pub fn nav_item_at(&self, row: usize, col: usize, count: usize) -> Option<usize> {
        match self.mode {
            LayoutMode::Wide => {
                if col == 0 || col > self.nav_width || row <= self.body_top {
                    return None;
                }
                let rel = row - self.body_top - 1;
                if rel % NAV_ITEM_STRIDE != 0 {
                    return None;
                }
                let index = rel / NAV_ITEM_STRIDE;
                (index < count.min(self.nav_capacity())).then_some(index)
            }
            LayoutMode::Compact => {
                if row != self.body_top || col == 0 || col > self.cols || count == 0 {
                    return None;
                }
                let index = (col - 1) / self.tab_width(count);
                Some(index.min(count - 1))
            }
            LayoutMode::TooSmall => None,
        }
    }
}
