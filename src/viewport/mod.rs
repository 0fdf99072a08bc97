//! Host-side scrolling primitive for the detail area.
//!
//! The selection controller emits [`ScrollCommand`](crate::selection::ScrollCommand)s;
//! the [`ScrollSurface`] executes them, jumping or animating over frame ticks,
//! and reports every offset change back as a scroll sample.
//!
//! - [`surface`]: offset bookkeeping, user scrolling, command execution
//! - [`animation`]: eased interpolation between two offsets

pub mod animation;
pub mod surface;

pub use animation::ScrollAnimation;
pub use surface::ScrollSurface;
