//! Error types for the docbabel library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docbabel operations.
#[derive(Debug, Error)]
pub enum BabelError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A source document failed to parse as valid codelist or schema content.
    #[error("Malformed input in '{path}': {message}")]
    Malformed { path: PathBuf, message: String },

    /// Source file extension is neither `.csv` nor `.json`.
    #[error("Unsupported file format: '{0}'")]
    UnsupportedFormat(PathBuf),

    /// A text requested from a catalog has no translation.
    #[error("No translation for text: {0:?}")]
    MissingTranslation(String),

    /// A catalog exists but could not be read or parsed.
    #[error("Cannot load catalog for domain '{domain}', language '{language}': {message}")]
    Catalog {
        domain: String,
        language: String,
        message: String,
    },
}

impl BabelError {
    /// Attach a source file path to parse errors that lack one.
    ///
    /// Catalog and translation errors keep their own identity; only raw
    /// CSV/JSON parse failures are rewrapped so the failing file is named.
    pub(crate) fn in_file(self, path: &std::path::Path) -> Self {
        match self {
            BabelError::Csv(e) => BabelError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            BabelError::Json(e) => BabelError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            other => other,
        }
    }
}

/// Result type alias for docbabel operations.
pub type Result<T> = std::result::Result<T, BabelError>;
