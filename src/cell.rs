//! Cell module for quickcsv
//!
//! A cell is either text or absent. The distinction survives encoding:
//! an absent cell can be written as `"null"` while an empty text cell is
//! always written as `""`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the content of one table cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// No value at all (as produced by empty records)
    #[default]
    Null,
    /// Text content, possibly empty
    Text(String),
}

impl Cell {
    /// Returns the text content, or `None` for an absent cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Null => None,
            Cell::Text(s) => Some(s),
        }
    }

    /// Whether this cell holds no value
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Exact, ordinal comparison against a search string.
    /// An absent cell never matches.
    pub fn matches(&self, search: &str) -> bool {
        self.as_str() == Some(search)
    }
}

/// Absent cells display as an empty string
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Null, Cell::Text)
    }
}

/// Represents a row in a table
pub type Record = Vec<Cell>;

/// Build a record from string slices, every cell present
pub fn record_from<S: AsRef<str>>(values: &[S]) -> Record {
    values.iter().map(|v| Cell::from(v.as_ref())).collect()
}
