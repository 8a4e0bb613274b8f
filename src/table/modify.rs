//! Table mutation
//!
//! Every successful mutation sets the content-changed flag. Row insertion
//! does no duplicate or width checking; column operations keep the header
//! row and every record in step.

use std::collections::HashSet;

use tracing::debug;

use super::Table;
use crate::cell::{Cell, Record};
use crate::error::{QuickCsvError, QuickCsvResult};
use crate::lookup::{LookupIndexValue, LookupValue};

impl Table {
    /// Enable header mode and replace the column names outright
    ///
    /// Records are not touched, so this can leave the column count out of
    /// step with record width. Intended for setting up a new table.
    pub fn set_column_names<S: AsRef<str>>(&mut self, names: &[S]) {
        self.has_headers = true;
        self.headers = names.iter().map(|n| n.as_ref().to_string()).collect();
        self.content_changed = true;
    }

    /// Append a record at the end
    pub fn append_record(&mut self, record: Record) {
        self.records.push(record);
        self.content_changed = true;
    }

    /// Insert a record before position `index` (`index == row_count` appends)
    pub fn insert_record(&mut self, record: Record, index: usize) -> QuickCsvResult<()> {
        if index > self.records.len() {
            return Err(QuickCsvError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.records.insert(index, record);
        self.content_changed = true;
        Ok(())
    }

    /// Append a record of `column_count` absent cells, returning its index
    pub fn append_empty_record(&mut self) -> usize {
        let record = self.empty_record();
        self.append_record(record);
        self.records.len() - 1
    }

    /// Insert a record of `column_count` absent cells before `index`
    pub fn insert_empty_record(&mut self, index: usize) -> QuickCsvResult<()> {
        let record = self.empty_record();
        self.insert_record(record, index)
    }

    fn empty_record(&self) -> Record {
        vec![Cell::Null; self.column_count()]
    }

    /// Remove the record at `index` and return it
    ///
    /// # Returns
    /// * `Err(IndexOutOfRange)` unless `index < row_count`
    pub fn remove_record(&mut self, index: usize) -> QuickCsvResult<Record> {
        if index >= self.records.len() {
            return Err(QuickCsvError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.content_changed = true;
        Ok(self.records.remove(index))
    }

    /// Remove the first record matching a name-based criterion, if any
    ///
    /// # Returns
    /// * `Err(NoHeaders)` if the table has no headers
    /// * `Ok(true)` if a record was removed
    pub fn remove_record_if_exists(&mut self, lookup: &LookupValue) -> QuickCsvResult<bool> {
        if !self.has_headers {
            return Err(QuickCsvError::NoHeaders);
        }
        let resolved = self.resolve_lookup(lookup);
        Ok(self.remove_record_if_exists_at(&resolved))
    }

    /// Remove the first record matching an index-based criterion, if any
    pub fn remove_record_if_exists_at(&mut self, lookup: &LookupIndexValue) -> bool {
        match self.find_record_index(lookup) {
            Some(idx) => {
                self.records.remove(idx);
                self.content_changed = true;
                true
            }
            None => false,
        }
    }

    /// Replace the first record whose `match_column` equals the incoming
    /// record's own value in that column, or append the record
    ///
    /// An absent (null) key matches rows whose cell is also absent. A record
    /// shorter than `match_column` is always appended.
    ///
    /// # Returns
    /// The row index the record ended up at
    pub fn overwrite_or_insert_record(&mut self, record: Record, match_column: usize) -> usize {
        let existing = record.get(match_column).and_then(|key| {
            self.records
                .iter()
                .position(|r| r.get(match_column) == Some(key))
        });

        self.content_changed = true;
        match existing {
            Some(idx) => {
                self.records[idx] = record;
                idx
            }
            None => {
                self.records.push(record);
                self.records.len() - 1
            }
        }
    }

    /// Upsert keyed on a named column
    ///
    /// # Returns
    /// * `Err(NoHeaders)` if the table has no headers
    /// * `Err(ColumnNotFound)` if the name does not resolve
    pub fn overwrite_or_insert_record_by_name(
        &mut self,
        record: Record,
        match_column: &str,
    ) -> QuickCsvResult<usize> {
        let column = self.require_column(match_column)?;
        Ok(self.overwrite_or_insert_record(record, column))
    }

    /// Add a column at the end, filling existing records with `default_value`
    ///
    /// With headers a unique `name` is required. Without headers the name is
    /// ignored and only the records grow.
    pub fn add_column(
        &mut self,
        name: Option<&str>,
        default_value: impl Into<Cell>,
    ) -> QuickCsvResult<()> {
        if self.has_headers {
            let name = name.ok_or(QuickCsvError::MissingColumnName)?;
            if self.resolve_column_index(name).is_some() {
                return Err(QuickCsvError::DuplicateColumn(name.to_string()));
            }
            self.headers.push(name.to_string());
        }

        let default_value = default_value.into();
        for record in &mut self.records {
            record.push(default_value.clone());
        }
        self.content_changed = true;
        Ok(())
    }

    /// Set one cell addressed by row index and column name
    pub fn set_cell(
        &mut self,
        row: usize,
        column_name: &str,
        value: impl Into<Cell>,
    ) -> QuickCsvResult<()> {
        let column = self
            .resolve_column_index(column_name)
            .ok_or_else(|| QuickCsvError::ColumnNotFound(column_name.to_string()))?;
        self.set_cell_at(row, column, value)
    }

    /// Set one cell addressed by row and column index
    pub fn set_cell_at(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<Cell>,
    ) -> QuickCsvResult<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(row)
            .ok_or(QuickCsvError::IndexOutOfRange { index: row, len })?;
        let width = record.len();
        let cell = record
            .get_mut(column)
            .ok_or(QuickCsvError::ColumnOutOfRange {
                index: column,
                len: width,
            })?;
        *cell = value.into();
        self.content_changed = true;
        Ok(())
    }

    /// Remove a column from the header row and from every record
    pub fn remove_column(&mut self, name: &str) -> QuickCsvResult<()> {
        let column = self.require_column(name)?;
        self.headers.remove(column);
        for record in &mut self.records {
            if column < record.len() {
                record.remove(column);
            }
        }
        self.content_changed = true;
        Ok(())
    }

    /// Rename a column
    ///
    /// # Returns
    /// * `Err(ColumnNotFound)` if `old_name` does not resolve
    /// * `Err(DuplicateColumn)` if `new_name` is already taken
    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> QuickCsvResult<()> {
        let column = self.require_column(old_name)?;
        if self.resolve_column_index(new_name).is_some() {
            return Err(QuickCsvError::DuplicateColumn(new_name.to_string()));
        }
        self.headers[column] = new_name.to_string();
        self.content_changed = true;
        Ok(())
    }

    /// Replace every exact occurrence of `old_value` in a column
    ///
    /// # Returns
    /// The number of cells replaced
    pub fn replace_value(
        &mut self,
        column_name: &str,
        old_value: &str,
        new_value: &str,
    ) -> QuickCsvResult<usize> {
        let column = self.require_column(column_name)?;
        let mut replaced = 0;
        for record in &mut self.records {
            if let Some(cell) = record.get_mut(column) {
                if cell.matches(old_value) {
                    *cell = Cell::from(new_value);
                    replaced += 1;
                }
            }
        }
        self.content_changed = true;
        Ok(replaced)
    }

    /// Physically reorder the columns to match `new_order`
    ///
    /// `new_order` must name every current column exactly once.
    pub fn reorder_column_names<S: AsRef<str>>(&mut self, new_order: &[S]) -> QuickCsvResult<()> {
        if new_order.len() != self.headers.len() {
            return Err(QuickCsvError::HeaderLengthMismatch {
                expected: self.headers.len(),
                actual: new_order.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut permutation = Vec::with_capacity(new_order.len());
        for name in new_order {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(QuickCsvError::DuplicateColumn(name.to_string()));
            }
            permutation.push(self.require_column(name)?);
        }

        self.headers = permutation.iter().map(|&i| self.headers[i].clone()).collect();
        for record in &mut self.records {
            *record = permutation
                .iter()
                .map(|&i| record.get(i).cloned().unwrap_or_default())
                .collect();
        }
        self.content_changed = true;
        debug!(order = ?self.headers, "Reordered columns");
        Ok(())
    }

    /// Reverse the order of the records
    pub fn reverse(&mut self) {
        self.records.reverse();
        self.content_changed = true;
    }

    /// Resolve a column name or fail the way mutations do
    fn require_column(&self, name: &str) -> QuickCsvResult<usize> {
        if !self.has_headers {
            return Err(QuickCsvError::NoHeaders);
        }
        self.resolve_column_index(name)
            .ok_or_else(|| QuickCsvError::ColumnNotFound(name.to_string()))
    }
}
