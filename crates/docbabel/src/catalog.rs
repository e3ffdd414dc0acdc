//! Catalog lookup: per-domain, per-language text-to-text translation.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{BabelError, Result};

/// A text-to-text translation capability.
///
/// A requested text absent from the catalog is a hard error: translation
/// presumes the catalog is complete for every text the extraction traversal
/// would emit for the document set.
pub trait Lookup: std::fmt::Debug {
    fn get(&self, text: &str) -> Result<String>;
}

/// The identity lookup, used when the target language is the source
/// language and no catalog exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Lookup for Identity {
    fn get(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// An in-memory catalog backed by a string map.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Lookup for Catalog {
    fn get(&self, text: &str) -> Result<String> {
        self.entries
            .get(text)
            .cloned()
            .ok_or_else(|| BabelError::MissingTranslation(text.to_string()))
    }
}

/// Obtains a [`Lookup`] for a `(domain, language)` pair.
///
/// The batch orchestrator requests one lookup per distinct domain per run
/// and reuses it across all files sharing that domain. Tests inject an
/// in-memory implementation.
pub trait CatalogProvider {
    fn lookup(&self, domain: &str, language: &str) -> Result<Box<dyn Lookup>>;
}

/// Production provider reading flat JSON catalogs from a locale directory.
///
/// Catalogs live at `<root>/<language>/<domain>.json`, each a single JSON
/// object mapping source text to translated text. If no catalog file exists
/// and the requested language is the source language, the lookup falls back
/// to identity; for any other language a missing catalog is an error.
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
    source_language: String,
}

impl DirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_language: "en".to_string(),
        }
    }

    /// Override the source language (default `en`).
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    fn catalog_path(&self, domain: &str, language: &str) -> PathBuf {
        self.root.join(language).join(format!("{domain}.json"))
    }

    fn load_catalog(&self, path: &Path, domain: &str, language: &str) -> Result<Catalog> {
        let file = File::open(path).map_err(|e| BabelError::Catalog {
            domain: domain.to_string(),
            language: language.to_string(),
            message: format!("cannot open '{}': {}", path.display(), e),
        })?;
        let entries: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| BabelError::Catalog {
                domain: domain.to_string(),
                language: language.to_string(),
                message: format!("cannot parse '{}': {}", path.display(), e),
            })?;
        Ok(Catalog::new(entries))
    }
}

impl CatalogProvider for DirProvider {
    fn lookup(&self, domain: &str, language: &str) -> Result<Box<dyn Lookup>> {
        let path = self.catalog_path(domain, language);
        if !path.exists() {
            if language == self.source_language {
                return Ok(Box::new(Identity));
            }
            return Err(BabelError::Catalog {
                domain: domain.to_string(),
                language: language.to_string(),
                message: format!("no catalog at '{}'", path.display()),
            });
        }
        Ok(Box::new(self.load_catalog(&path, domain, language)?))
    }
}
