//! Error handling for quickcsv
//!
//! This module defines the error type shared by the parser and the table.
//! Only precondition violations, boundary errors and I/O failures are errors;
//! lookups that simply find nothing return `None` instead.
//!
//! The module uses thiserror to minimize boilerplate code and create
//! a consistent error handling approach throughout the codebase.

use thiserror::Error;

/// QuickCsvError represents all possible errors that can occur in quickcsv
///
/// This enum covers failures during:
/// - File I/O operations
/// - Decoding (skipping more preamble lines than the input holds)
/// - Column resolution and structural table mutation
/// - Direct row access with an invalid index
#[derive(Error, Debug)]
pub enum QuickCsvError {
    /// Error during file system operations (reading/writing files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation addresses columns by name but the table has no header row
    #[error("Table has no headers")]
    NoHeaders,

    /// Error when a referenced column doesn't exist in the header row
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Adding or renaming a column would create a duplicate header name
    #[error("Column '{0}' already exists")]
    DuplicateColumn(String),

    /// A column was added to a table with headers without giving it a name
    #[error("Table has headers, a column name must be given")]
    MissingColumnName,

    /// A new column order does not name as many columns as the header row holds
    #[error("New header length {actual} does not match current header length {expected}")]
    HeaderLengthMismatch { expected: usize, actual: usize },

    /// Row index outside the table
    #[error("Index {index} is out of range (table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Column index outside the table
    #[error("Column index {index} is out of range (row has {len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },

    /// `save` was called on a table that was never loaded from or written to a file
    #[error("Table has no target file to save to")]
    NoTargetFile,

    /// The input ended while skipping preamble lines
    #[error("Cannot skip {requested} lines, input only has {available}")]
    SkipPastEnd { requested: usize, available: usize },

    /// The requested text encoding label is not known
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),
}

/// Result type alias for operations that can produce a QuickCsvError
pub type QuickCsvResult<T> = std::result::Result<T, QuickCsvError>;
