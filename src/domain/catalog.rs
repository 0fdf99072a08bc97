//! The ordered, immutable list of experience entries.
//!
//! A [`Catalog`] is validated once at construction: it is never empty and
//! every id is unique and non-blank. Everything downstream (the selection
//! controller, the view model) relies on those guarantees instead of
//! re-checking them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::entry::Entry;
use super::error::{FolioError, Result};

/// TOML document shape: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    entry: Vec<Entry>,
}

/// Validated, ordered collection of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists and blank or duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Catalog`] when validation fails.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FolioError::Catalog("catalog has no entries".to_string()));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(FolioError::Catalog(format!(
                    "entry for '{}' has a blank id",
                    entry.company
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(FolioError::Catalog(format!("duplicate entry id '{}'", entry.id)));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the catalog compiled into the plugin.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `data/experience.toml` fails to parse, which is
    /// covered by the test suite.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(include_str!("../../data/experience.toml"))
            .expect("Built-in experience catalog should always parse")
    }

    /// Parses a TOML document made of `[[entry]]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] on malformed TOML and
    /// [`FolioError::Catalog`] when validation fails.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(toml_str)?;
        Self::new(doc.entry)
    }

    /// Parses a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] on malformed JSON and
    /// [`FolioError::Catalog`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Loads a catalog file, choosing JSON for `.json` and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read, plus any
    /// parse or validation error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Ordinal position of the entry with `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    #[must_use]
    pub fn first(&self) -> &Entry {
        &self.entries[0]
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            company: id.to_uppercase(),
            title: "Engineer".to_string(),
            duration: "2024".to_string(),
            location: "Remote".to_string(),
            color: "#2DD4BF".to_string(),
            logo: None,
            details: vec![],
        }
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.first().id, "tjcg");
        assert_eq!(catalog.position("21twelve"), Some(2));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::new(vec![]), Err(FolioError::Catalog(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("a"), entry("b"), entry("a")]).unwrap_err();
        assert!(err.to_string().contains("duplicate entry id 'a'"));
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(Catalog::new(vec![entry("  ")]).is_err());
    }

    #[test]
    fn position_of_unknown_id_is_none() {
        let catalog = Catalog::new(vec![entry("a"), entry("b")]).unwrap();
        assert_eq!(catalog.position("zzz"), None);
        assert_eq!(catalog.last_index(), 1);
    }

    #[test]
    fn parses_json_array() {
        let json = r##"[{"id":"x","company":"X","title":"Dev","duration":"2023",
            "location":"Remote","color":"#ffffff","details":["**bold**"]}]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.get(0).map(|e| e.details.len()), Some(1));
    }

    #[test]
    fn toml_without_entries_is_rejected() {
        assert!(matches!(Catalog::from_toml_str(""), Err(FolioError::Catalog(_))));
    }
}
