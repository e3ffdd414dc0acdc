//! Batch orchestration: translate configured source sets into target
//! directories.
//!
//! The orchestrator is the only component that touches the filesystem and
//! the catalog provider; the traversals themselves are pure. Files are
//! processed strictly in configuration-entry order, then in source-file
//! order within an entry, each fully read, transformed in memory, and fully
//! written before the next begins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::catalog::{CatalogProvider, Lookup};
use crate::codelist::Codelist;
use crate::error::{BabelError, Result};
use crate::schema::Schema;

/// One unit of batch work: source files translated under a single domain's
/// catalog into a target directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigEntry {
    /// Source file paths (caller-assembled; no glob expansion here).
    pub sources: Vec<PathBuf>,
    /// Output directory, created if missing.
    pub target: PathBuf,
    /// Catalog domain shared by all sources in this entry.
    pub domain: String,
}

/// Traversal a source file dispatches to, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Codelist,
    Schema,
}

impl FileKind {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(FileKind::Codelist),
            Some("json") => Ok(FileKind::Schema),
            _ => Err(BabelError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Runs a batch translation over an ordered list of configuration entries.
///
/// One catalog lookup is obtained per distinct domain per run and reused
/// across every entry sharing that domain.
pub struct BatchTranslator<'a> {
    provider: &'a dyn CatalogProvider,
    language: String,
    substitutions: IndexMap<String, String>,
}

impl<'a> BatchTranslator<'a> {
    pub fn new(provider: &'a dyn CatalogProvider, language: impl Into<String>) -> Self {
        let language = language.into();
        // Schema files always receive the target language as `{{lang}}`.
        let mut substitutions = IndexMap::new();
        substitutions.insert("lang".to_string(), language.clone());
        Self {
            provider,
            language,
            substitutions,
        }
    }

    /// Add a named placeholder substitution applied to translated schema
    /// strings.
    pub fn with_substitution(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.substitutions.insert(name.into(), value.into());
        self
    }

    /// Translate every configuration entry, in order.
    pub fn run(&self, config: &[ConfigEntry]) -> Result<()> {
        // Resolve dispatch for every source up front so an unsupported
        // extension aborts the run before any output is written.
        for entry in config {
            for source in &entry.sources {
                FileKind::from_path(source)?;
            }
        }

        let mut lookups: HashMap<String, Box<dyn Lookup>> = HashMap::new();

        for entry in config {
            info!(
                "translating to {} using \"{}\" domain, into {}",
                self.language,
                entry.domain,
                entry.target.display()
            );

            let lookup = match lookups.entry(entry.domain.clone()) {
                Entry::Occupied(occupied) => occupied.into_mut(),
                Entry::Vacant(vacant) => {
                    vacant.insert(self.provider.lookup(&entry.domain, &self.language)?)
                }
            };

            fs::create_dir_all(&entry.target).map_err(|e| BabelError::Io {
                path: entry.target.clone(),
                source: e,
            })?;

            for source in &entry.sources {
                self.translate_file(source, &entry.target, lookup.as_ref())?;
            }
        }

        Ok(())
    }

    fn translate_file(&self, source: &Path, target: &Path, lookup: &dyn Lookup) -> Result<()> {
        let content = fs::read_to_string(source).map_err(|e| BabelError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

        let output = match FileKind::from_path(source)? {
            FileKind::Codelist => {
                let codelist = Codelist::parse(&content).map_err(|e| e.in_file(source))?;
                codelist.translate(lookup)?
            }
            FileKind::Schema => {
                let schema = Schema::parse(&content).map_err(|e| e.in_file(source))?;
                let mut output = schema
                    .translate(lookup, &self.substitutions)?
                    .to_pretty_json()?;
                output.push('\n');
                output
            }
        };

        let basename = source
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let destination = target.join(basename);
        fs::write(&destination, output).map_err(|e| BabelError::Io {
            path: destination.clone(),
            source: e,
        })
    }
}
