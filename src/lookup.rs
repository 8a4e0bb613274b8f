//! Lookup criteria for searching and upserting records
//!
//! A criterion pairs a search string with a column, either by header name
//! or by resolved column index. A name that fails to resolve becomes a
//! `LookupIndexValue` without an index, which every search treats as
//! "not found" rather than as an error.

use crate::cell::Record;

/// Search criterion addressing the column by header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupValue {
    /// The string value to search for
    pub search_string: String,
    /// The name of the column to search in
    pub column_name: String,
}

impl LookupValue {
    pub fn new(search_string: impl Into<String>, column_name: impl Into<String>) -> Self {
        LookupValue {
            search_string: search_string.into(),
            column_name: column_name.into(),
        }
    }
}

/// Search criterion addressing the column by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupIndexValue {
    /// The string value to search for
    pub search_string: String,
    /// The column to search in; `None` if the column could not be resolved
    pub column_index: Option<usize>,
}

impl LookupIndexValue {
    pub fn new(search_string: impl Into<String>, column_index: usize) -> Self {
        LookupIndexValue {
            search_string: search_string.into(),
            column_index: Some(column_index),
        }
    }

    /// A criterion whose column did not resolve
    pub fn unresolved(search_string: impl Into<String>) -> Self {
        LookupIndexValue {
            search_string: search_string.into(),
            column_index: None,
        }
    }

    /// Whether the criterion points at a column
    pub fn is_resolved(&self) -> bool {
        self.column_index.is_some()
    }

    /// Test one record against this criterion.
    ///
    /// Unresolved criteria and columns past the end of the record never match.
    pub fn matches(&self, record: &Record) -> bool {
        self.column_index
            .and_then(|idx| record.get(idx))
            .map_or(false, |cell| cell.matches(&self.search_string))
    }
}
