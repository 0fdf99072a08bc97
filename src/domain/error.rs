//! Error types for the Folio plugin.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used by everything that can fail while loading configuration data.
//! The selection state machine itself never fails; errors only come from the
//! edges (catalog files, theme files, plugin configuration).

use thiserror::Error;

/// The main error type for Folio plugin operations.
///
/// # Examples
///
/// ```
/// use folio::domain::FolioError;
///
/// fn validate() -> Result<(), FolioError> {
///     Err(FolioError::Catalog("catalog has no entries".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// The entry catalog is malformed (empty, duplicate or blank ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML or JSON document could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A specialized `Result` type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
