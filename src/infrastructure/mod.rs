//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a sandbox: the plugin's own data directory is mounted
//! at `/data` and the host filesystem, rooted at the directory Zellij was
//! started from, at `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_config_path, trace_file};
