//! User interface rendering layer with component-based architecture.
//!
//! This module turns a view model into an ANSI frame through composable
//! components. It provides theme support and a responsive layout that switches
//! between a side-by-side and a tabbed presentation.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`layout`]: Pane geometry and click hit-testing
//! - [`viewmodel`]: View model types and detail page layout
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer utilities and word wrapping
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Layout, LayoutMode};
pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, NavItem, StyledLine, StyledSpan, TextStyle, UIViewModel,
};
