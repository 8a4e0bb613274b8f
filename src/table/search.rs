//! Record search
//!
//! Searches are linear scans in row order returning the first record on
//! which every criterion matches. A criterion whose column cannot be
//! resolved makes the whole search come back empty.

use super::Table;
use crate::cell::Record;
use crate::error::{QuickCsvError, QuickCsvResult};
use crate::lookup::{LookupIndexValue, LookupValue};

impl Table {
    /// Find the first record matching a name-based criterion
    ///
    /// # Returns
    /// * `Err(NoHeaders)` if the table has no headers
    /// * `Ok(None)` if the column does not exist or nothing matches
    pub fn search(&self, lookup: &LookupValue) -> QuickCsvResult<Option<Record>> {
        self.search_all(std::slice::from_ref(lookup))
    }

    /// Find the first record matching every name-based criterion
    pub fn search_all(&self, lookups: &[LookupValue]) -> QuickCsvResult<Option<Record>> {
        if !self.has_headers {
            return Err(QuickCsvError::NoHeaders);
        }
        let resolved: Vec<LookupIndexValue> =
            lookups.iter().map(|l| self.resolve_lookup(l)).collect();
        Ok(self.search_all_at(&resolved))
    }

    /// Find the first record matching an index-based criterion
    pub fn search_at(&self, lookup: &LookupIndexValue) -> Option<Record> {
        self.search_all_at(std::slice::from_ref(lookup))
    }

    /// Find the first record matching every index-based criterion
    pub fn search_all_at(&self, lookups: &[LookupIndexValue]) -> Option<Record> {
        self.find_record_index_all(lookups)
            .map(|idx| self.records[idx].clone())
    }

    /// Position of the first record matching a name-based criterion
    ///
    /// Returns `None` without headers, for an unknown column, or on no match.
    pub fn find_record_index_by_name(&self, lookup: &LookupValue) -> Option<usize> {
        if !self.has_headers {
            return None;
        }
        self.find_record_index(&self.resolve_lookup(lookup))
    }

    /// Position of the first record matching an index-based criterion
    pub fn find_record_index(&self, lookup: &LookupIndexValue) -> Option<usize> {
        self.find_record_index_all(std::slice::from_ref(lookup))
    }

    /// Position of the first record matching every index-based criterion
    pub fn find_record_index_all(&self, lookups: &[LookupIndexValue]) -> Option<usize> {
        if lookups.iter().any(|l| !l.is_resolved()) {
            return None;
        }
        self.records
            .iter()
            .position(|record| lookups.iter().all(|l| l.matches(record)))
    }
}
