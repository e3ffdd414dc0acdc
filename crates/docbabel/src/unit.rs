//! Positionally-addressed translatable text units.

use std::fmt;

use serde::Serialize;

/// Where a text unit lives inside its source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A codelist cell: row 0 is the header row (with an empty column key),
    /// data rows are 1-indexed in document order.
    Cell { row: usize, column: String },
    /// A slash-delimited path of keys and array indices from the document
    /// root of a schema file, e.g. `/properties/statementType/title`.
    Pointer(String),
}

impl Location {
    /// Location of a header column name.
    pub fn header() -> Self {
        Location::Cell {
            row: 0,
            column: String::new(),
        }
    }

    /// Location of a data cell.
    pub fn cell(row: usize, column: impl Into<String>) -> Self {
        Location::Cell {
            row,
            column: column.into(),
        }
    }

    /// Location of a nested-document value.
    pub fn pointer(path: impl Into<String>) -> Self {
        Location::Pointer(path.into())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Cell { row, column } if column.is_empty() => write!(f, "{row}"),
            Location::Cell { row, column } => write!(f, "{row}:{column}"),
            Location::Pointer(path) => write!(f, "{path}"),
        }
    }
}

/// An extracted piece of translatable text and its address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextUnit {
    /// Where the text was found.
    pub location: Location,
    /// The whitespace-trimmed text.
    pub text: String,
}

impl TextUnit {
    pub fn new(location: Location, text: impl Into<String>) -> Self {
        Self {
            location,
            text: text.into(),
        }
    }
}
