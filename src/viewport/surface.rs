//! The scrollable detail area, measured in terminal rows.
//!
//! Content is a stack of equally tall pages, one per entry, each exactly one
//! viewport high. The surface only knows offsets; mapping an offset back to an
//! entry is the selection controller's job.

use crate::selection::ScrollCommand;

use super::animation::ScrollAnimation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSurface {
    offset: usize,
    viewport: usize,
    pages: usize,
    animation: Option<ScrollAnimation>,
}

impl ScrollSurface {
    #[must_use]
    pub const fn new(pages: usize, viewport: usize) -> Self {
        Self {
            offset: 0,
            viewport,
            pages,
            animation: None,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn viewport(&self) -> usize {
        self.viewport
    }

    #[must_use]
    pub const fn content_height(&self) -> usize {
        self.pages * self.viewport
    }

    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.content_height().saturating_sub(self.viewport)
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// User scroll by `delta` rows. Interrupts any running animation.
    ///
    /// Returns `true` if the offset moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.animation = None;
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.move_to(target)
    }

    /// Executes a scroll command.
    ///
    /// Returns `true` if an animation was started and needs frame ticks; a
    /// non-animated command (or one already at its target) jumps immediately.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn apply(&mut self, command: ScrollCommand, frames: u32) -> bool {
        let target = if command.offset.is_finite() && command.offset > 0.0 {
            (command.offset.round() as usize).min(self.max_offset())
        } else {
            0
        };

        if !command.animated || target == self.offset {
            self.animation = None;
            self.move_to(target);
            return false;
        }

        self.animation = Some(ScrollAnimation::new(self.offset, target, frames));
        true
    }

    /// Advances the running animation by one frame.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let position = animation.step();
        let finished = animation.is_finished();
        if finished {
            self.animation = None;
        }
        self.move_to(position);
        !finished
    }

    /// Changes the viewport height and re-anchors on page `anchor`.
    ///
    /// Any running animation is dropped; the surface jumps to the anchor.
    pub fn resize(&mut self, viewport: usize, anchor: usize) {
        self.viewport = viewport;
        self.animation = None;
        self.offset = (anchor * viewport).min(self.max_offset());
    }

    fn move_to(&mut self, target: usize) -> bool {
        let clamped = target.min(self.max_offset());
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }
}
