//! Tabular traversal: extraction and translation of codelist CSV files.
//!
//! A codelist is a comma-separated file with a required header row. Reading
//! accepts any newline convention (`\r`, `\n`, `\r\n` all terminate rows);
//! output always uses `\n`. Extraction yields one unit per non-empty header
//! name (row 0) and one per candidate cell (rows 1-indexed, keyed by column
//! name). Translation rewrites headers and candidate cells through a
//! [`Lookup`] and re-keys every row by the translated header names, so the
//! two traversals stay dual.

use indexmap::IndexMap;

use crate::catalog::Lookup;
use crate::error::Result;
use crate::text::{TRANSLATABLE_CODELIST_HEADERS, cell_text, clean_text};
use crate::unit::{Location, TextUnit};

/// A parsed codelist: ordered column names plus rows as ordered
/// column-name → cell maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codelist {
    fieldnames: Vec<String>,
    rows: Vec<IndexMap<String, String>>,
}

impl Codelist {
    /// Parse CSV content.
    ///
    /// Rows shorter than the header are padded with empty cells; extra
    /// trailing cells are dropped. A header consisting of a single empty
    /// field name parses to a codelist with no translatable columns.
    pub fn parse(input: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input.as_bytes());

        let fieldnames: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: IndexMap<String, String> = fieldnames
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), record.get(i).unwrap_or("").to_string()))
                .collect();
            rows.push(row);
        }

        Ok(Self { fieldnames, rows })
    }

    /// Column names in document order.
    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Extract every text unit, in document order.
    ///
    /// Header units come first (row 0, empty column key), then cell units
    /// row by row in column order. Re-invoking re-derives the same sequence.
    pub fn units(&self) -> impl Iterator<Item = TextUnit> + '_ {
        let headers = self
            .fieldnames
            .iter()
            .filter_map(|name| clean_text(name))
            .map(|text| TextUnit::new(Location::header(), text));

        let cells = self.rows.iter().enumerate().flat_map(|(index, row)| {
            row.iter().filter_map(move |(key, value)| {
                let text = cell_text(value, TRANSLATABLE_CODELIST_HEADERS.contains(&key.as_str()))?;
                Some(TextUnit::new(Location::cell(index + 1, key.clone()), text))
            })
        });

        headers.chain(cells)
    }

    /// Translate every header name and candidate cell through `lookup` and
    /// serialize the result as CSV.
    ///
    /// Candidate cells are whitespace-trimmed before lookup, so an identity
    /// lookup reproduces the document modulo that trimming. Non-candidate
    /// cells (empty or all-whitespace) pass through unchanged.
    pub fn translate(&self, lookup: &dyn Lookup) -> Result<String> {
        let fieldnames: Vec<String> = self
            .fieldnames
            .iter()
            .map(|name| match clean_text(name) {
                Some(text) => lookup.get(text),
                None => Ok(name.clone()),
            })
            .collect::<Result<_>>()?;

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&fieldnames)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(row.len());
            for (key, value) in row {
                let translatable = TRANSLATABLE_CODELIST_HEADERS.contains(&key.as_str());
                let cell = match cell_text(value, translatable) {
                    Some(text) => lookup.get(text)?,
                    None => value.clone(),
                };
                record.push(cell);
            }
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        // The writer only ever receives valid UTF-8.
        Ok(String::from_utf8(bytes).expect("CSV output is UTF-8"))
    }
}
