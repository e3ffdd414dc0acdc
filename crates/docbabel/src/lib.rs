//! docbabel: translation extraction and substitution for standards documents.
//!
//! docbabel walks two structured document formats — delimited codelist CSVs
//! and nested JSON schema files — and either *extracts* their translatable
//! text as positionally-addressed units, or *re-emits* structurally
//! identical documents with the text replaced from a per-domain catalog.
//! The two traversals are dual: whatever extraction emits is exactly what
//! translation rewrites, and nothing else changes.
//!
//! # Core Principles
//!
//! - **Duality**: extraction and translation walk the same document shape
//! - **Structure-preserving**: column order, key insertion order, array
//!   order, and non-text content survive translation bit-for-bit
//! - **Complete catalogs**: a missing translation is a hard error, never a
//!   silent passthrough
//!
//! # Example
//!
//! ```
//! use docbabel::{Codelist, Identity};
//!
//! let codelist = Codelist::parse("code,title\ndirect,Direct\n")?;
//! for unit in codelist.units() {
//!     println!("{}\t{}", unit.location, unit.text);
//! }
//! let output = codelist.translate(&Identity)?;
//! assert_eq!(output, "code,title\ndirect,Direct\n");
//! # Ok::<(), docbabel::BabelError>(())
//! ```

pub mod batch;
pub mod catalog;
pub mod codelist;
pub mod error;
pub mod schema;
pub mod text;
pub mod unit;

pub use batch::{BatchTranslator, ConfigEntry};
pub use catalog::{Catalog, CatalogProvider, DirProvider, Identity, Lookup};
pub use codelist::Codelist;
pub use error::{BabelError, Result};
pub use schema::Schema;
pub use text::{TRANSLATABLE_CODELIST_HEADERS, TRANSLATABLE_SCHEMA_KEYWORDS};
pub use unit::{Location, TextUnit};
