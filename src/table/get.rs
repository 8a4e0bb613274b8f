//! Read access to table contents
//!
//! All methods here return owned copies.

use std::collections::HashSet;

use super::Table;
use crate::cell::{Cell, Record};
use crate::error::{QuickCsvError, QuickCsvResult};
use crate::lookup::LookupValue;

impl Table {
    /// Copy of the header names (empty without headers)
    pub fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    /// Copy of one record
    ///
    /// # Returns
    /// * `Err(IndexOutOfRange)` if `index` is not a valid row
    pub fn get_record(&self, index: usize) -> QuickCsvResult<Record> {
        self.records
            .get(index)
            .cloned()
            .ok_or(QuickCsvError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Copy of a single cell by row and column index
    pub fn get_cell(&self, row: usize, column: usize) -> QuickCsvResult<Cell> {
        let record = self.records.get(row).ok_or(QuickCsvError::IndexOutOfRange {
            index: row,
            len: self.records.len(),
        })?;
        record
            .get(column)
            .cloned()
            .ok_or(QuickCsvError::ColumnOutOfRange {
                index: column,
                len: record.len(),
            })
    }

    /// Copy of a single cell by row index and column name
    ///
    /// # Returns
    /// * `Err(ColumnNotFound)` if the name does not resolve
    pub fn get_cell_by_name(&self, row: usize, column_name: &str) -> QuickCsvResult<Cell> {
        let column = self
            .resolve_column_index(column_name)
            .ok_or_else(|| QuickCsvError::ColumnNotFound(column_name.to_string()))?;
        self.get_cell(row, column)
    }

    /// One cell per record, in row order, for the named column
    ///
    /// # Returns
    /// * `Err(NoHeaders)` if the table has no headers
    /// * `Ok(None)` if no column has that name
    pub fn get_column(&self, column_name: &str) -> QuickCsvResult<Option<Vec<Cell>>> {
        if !self.has_headers {
            return Err(QuickCsvError::NoHeaders);
        }
        Ok(self
            .resolve_column_index(column_name)
            .and_then(|idx| self.get_column_at(idx)))
    }

    /// One cell per record, in row order, for the column at `index`
    ///
    /// Returns `None` if `index` is past the last column. Records too short
    /// to hold the column contribute an absent cell.
    pub fn get_column_at(&self, index: usize) -> Option<Vec<Cell>> {
        if index >= self.column_count() {
            return None;
        }
        Some(
            self.records
                .iter()
                .map(|record| record.get(index).cloned().unwrap_or_default())
                .collect(),
        )
    }

    /// Distinct values of a column in first-seen order
    ///
    /// With a `filter`, only records whose filter column equals the filter
    /// value are considered.
    ///
    /// # Returns
    /// * `None` if the target column or the filter column does not resolve
    pub fn get_unique_column_values(
        &self,
        column_name: &str,
        filter: Option<&LookupValue>,
    ) -> Option<Vec<Cell>> {
        let column = self.resolve_column_index(column_name)?;
        let filter = match filter {
            Some(lookup) => {
                let resolved = self.resolve_lookup(lookup);
                if !resolved.is_resolved() {
                    return None;
                }
                Some(resolved)
            }
            None => None,
        };

        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in &self.records {
            if let Some(filter) = &filter {
                if !filter.matches(record) {
                    continue;
                }
            }
            let value = record.get(column).cloned().unwrap_or_default();
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        Some(values)
    }
}
