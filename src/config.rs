//! Configuration module for quickcsv
//!
//! Loading and writing are configured entirely through explicit option
//! structs passed to each call. There is no global state and no
//! environment lookup.

use encoding_rs::Encoding;

use crate::error::{QuickCsvError, QuickCsvResult};
use crate::parser::DEFAULT_DELIMITER;

/// Options for loading a table from a file
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Whether the first decoded record holds column names
    has_headers: bool,

    /// Field delimiter
    delimiter: char,

    /// Keep existing rows and append the loaded ones
    append: bool,

    /// Text encoding of the file, UTF-8 when unset
    encoding: Option<&'static Encoding>,

    /// Raw lines to discard before parsing
    skip_lines: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            has_headers: false,
            delimiter: DEFAULT_DELIMITER,
            append: false,
            encoding: None,
            skip_lines: 0,
        }
    }
}

impl LoadOptions {
    /// Create load options with the defaults: no headers, `;`, replace, UTF-8, no skipped lines
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Select the text encoding by WHATWG label (e.g. `"latin1"`, `"utf-16le"`)
    ///
    /// # Returns
    /// * `Err(UnknownEncoding)` if the label is not recognized
    pub fn with_encoding_label(self, label: &str) -> QuickCsvResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| QuickCsvError::UnknownEncoding(label.to_string()))?;
        Ok(self.with_encoding(encoding))
    }

    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn append(&self) -> bool {
        self.append
    }

    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    pub fn skip_lines(&self) -> usize {
        self.skip_lines
    }
}

/// Options for writing a table to a file
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Field delimiter
    delimiter: char,

    /// Write absent cells as `"null"` instead of `""`
    empty_cells_as_null: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            delimiter: DEFAULT_DELIMITER,
            empty_cells_as_null: false,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_empty_cells_as_null(mut self, empty_cells_as_null: bool) -> Self {
        self.empty_cells_as_null = empty_cells_as_null;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn empty_cells_as_null(&self) -> bool {
        self.empty_cells_as_null
    }
}
