//! Table module for quickcsv
//!
//! This module provides the in-memory table: an ordered list of records plus
//! an optional header row. Its operations are split by concern:
//!
//! - `get` - copying accessors for records, cells and columns
//! - `search` - linear equality search driven by lookup criteria
//! - `modify` - row and column mutation, upsert
//! - `io` - loading from and writing to delimited files
//!
//! Every accessor returns owned copies, so callers can never reach the
//! table's storage except through the mutation methods.

mod get;
mod io;
mod modify;
mod search;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cell::{Cell, Record};
use crate::lookup::{LookupIndexValue, LookupValue};

/// Represents an in-memory table
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Whether the header slot is in use
    has_headers: bool,

    /// Column names, only meaningful when `has_headers` is set
    headers: Vec<String>,

    /// Rows of data
    records: Vec<Record>,

    /// Whether the table was modified since the last load or write
    content_changed: bool,

    /// File used by `save`, bound on load and write
    target_file: Option<PathBuf>,
}

impl Table {
    /// Create an empty table
    ///
    /// With `has_headers` set the header row starts out empty; use
    /// `set_column_names` to name the columns.
    pub fn new(has_headers: bool) -> Self {
        Table {
            has_headers,
            ..Table::default()
        }
    }

    /// Create an empty table with the given column names
    pub fn with_headers<S: AsRef<str>>(names: &[S]) -> Self {
        Table {
            has_headers: true,
            headers: names.iter().map(|n| n.as_ref().to_string()).collect(),
            ..Table::default()
        }
    }

    /// Whether the table is in header mode
    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    /// Number of columns
    ///
    /// With headers this is the header length, otherwise the length of the
    /// first record, or 0 for an empty table.
    pub fn column_count(&self) -> usize {
        if self.has_headers {
            self.headers.len()
        } else {
            self.records.first().map_or(0, Vec::len)
        }
    }

    /// Number of data records (the header row is not counted)
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no data records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the table was modified since it was last loaded or written
    pub fn is_content_changed(&self) -> bool {
        self.content_changed
    }

    /// The file `save` writes to, if any
    pub fn target_file(&self) -> Option<&Path> {
        self.target_file.as_deref()
    }

    /// Switch to header mode, moving the first record into the header slot
    ///
    /// This is a data move, not a flag change: the row count drops by one
    /// and the former first record becomes resolvable as column names.
    /// Does nothing if the table already has headers. On an empty table
    /// only the mode changes.
    pub fn enable_headers(&mut self) {
        if self.has_headers {
            return;
        }
        self.has_headers = true;
        if self.records.is_empty() {
            return;
        }

        let first = self.records.remove(0);
        self.headers = first.iter().map(Cell::to_string).collect();
        self.content_changed = true;
        debug!(columns = self.headers.len(), "Moved first record into header row");
    }

    /// Leave header mode, moving the header row back in as the first record
    ///
    /// The row count grows by one (unless the header row was empty) and
    /// columns can no longer be resolved by name.
    pub fn disable_headers(&mut self) {
        if !self.has_headers {
            return;
        }
        self.has_headers = false;
        let headers = std::mem::take(&mut self.headers);
        if headers.is_empty() {
            return;
        }

        self.records.insert(0, headers.into_iter().map(Cell::Text).collect());
        self.content_changed = true;
        debug!("Moved header row back into records");
    }

    /// Get the index of a column by name
    ///
    /// Comparison is exact and ordinal. Returns `None` when the table has no
    /// headers as well as when no header carries that name.
    pub fn resolve_column_index(&self, name: &str) -> Option<usize> {
        if !self.has_headers {
            return None;
        }
        self.headers.iter().position(|h| h == name)
    }

    /// Convert a name-based criterion into its index-based form
    ///
    /// An unresolvable column yields an unresolved criterion, which every
    /// search treats as "not found".
    pub fn resolve_lookup(&self, lookup: &LookupValue) -> LookupIndexValue {
        match self.resolve_column_index(&lookup.column_name) {
            Some(idx) => LookupIndexValue::new(lookup.search_string.clone(), idx),
            None => LookupIndexValue::unresolved(lookup.search_string.clone()),
        }
    }

    /// Iterate over copies of all records in row order
    ///
    /// Each call starts a fresh pass; yielded records are independent of
    /// later changes to the table.
    pub fn iter(&self) -> Records<'_> {
        Records {
            inner: self.records.iter(),
        }
    }
}

/// Iterator over owned copies of a table's records
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: std::slice::Iter<'a, Record>,
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.inner.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl<'a> IntoIterator for &'a Table {
    type Item = Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Records<'a> {
        self.iter()
    }
}
