//! Domain layer for the Folio plugin.
//!
//! Host-independent types describing what the experience section shows:
//! entries, the validated catalog that orders them, and the inline markup
//! used in their detail bullets.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Entry model and detail bullet parsing
//! - [`catalog`]: Ordered, validated entry list
//! - [`markup`]: `**bold**` span parsing
//!
//! # Examples
//!
//! ```
//! use folio::domain::{Catalog, Result};
//!
//! fn load() -> Result<Catalog> {
//!     Ok(Catalog::builtin())
//! }
//!
//! assert_eq!(load().unwrap().first().id, "tjcg");
//! ```

pub mod catalog;
pub mod entry;
pub mod error;
pub mod markup;

pub use catalog::Catalog;
pub use entry::{BulletDepth, DetailLine, Entry};
pub use error::{FolioError, Result};
