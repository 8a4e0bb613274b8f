//! Loading tables from and writing them to delimited files

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::Table;
use crate::cell::Cell;
use crate::config::{LoadOptions, WriteOptions};
use crate::error::{QuickCsvError, QuickCsvResult};
use crate::parser::{self, LINE_ENDING};

impl Table {
    /// Load a table from a file into a new table
    pub fn from_file(path: impl AsRef<Path>, options: &LoadOptions) -> QuickCsvResult<Self> {
        let mut table = Table::new(options.has_headers());
        table.load(path, options)?;
        Ok(table)
    }

    /// Load records from a delimited file
    ///
    /// A missing file leaves the table untouched. Otherwise existing records
    /// are replaced (or kept, with `append`), the first decoded record
    /// becomes the header row when `has_headers` is set, the content-changed
    /// flag is cleared and `path` is bound as the target for `save`.
    ///
    /// # Returns
    /// * `Ok(())` if the file was loaded or does not exist
    /// * `Err` if the file cannot be read or skipping lines runs past its end
    pub fn load(&mut self, path: impl AsRef<Path>, options: &LoadOptions) -> QuickCsvResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "File does not exist, nothing loaded");
            return Ok(());
        }

        let mut records = parser::decode_file(
            path,
            options.delimiter(),
            options.encoding(),
            options.skip_lines(),
        )?;

        if !options.append() {
            self.records.clear();
            self.headers.clear();
            self.has_headers = options.has_headers();
        }
        if options.has_headers() {
            self.has_headers = true;
            if !records.is_empty() {
                let header = records.remove(0);
                self.headers = header.iter().map(Cell::to_string).collect();
            }
        }

        debug!(
            path = %path.display(),
            rows = records.len(),
            append = options.append(),
            headers = self.has_headers,
            "Loaded table"
        );
        self.records.extend(records);
        self.content_changed = false;
        self.target_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the header row (if any) and every record to `path`
    ///
    /// Any existing file is overwritten. Clears the content-changed flag and
    /// binds `path` as the target for `save`.
    pub fn write(&mut self, path: impl AsRef<Path>, options: &WriteOptions) -> QuickCsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let delimiter = options.delimiter();
        let as_null = options.empty_cells_as_null();
        if self.has_headers && !self.headers.is_empty() {
            let header: Vec<Cell> = self.headers.iter().map(|h| Cell::from(h.as_str())).collect();
            write!(writer, "{}{}", parser::encode_line(&header, delimiter, as_null), LINE_ENDING)?;
        }
        for record in &self.records {
            write!(writer, "{}{}", parser::encode_line(record, delimiter, as_null), LINE_ENDING)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = self.records.len(), "Wrote table");
        self.content_changed = false;
        self.target_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the table back to the file it was loaded from or last written to
    ///
    /// # Returns
    /// * `Err(NoTargetFile)` if no file is bound
    pub fn save(&mut self, options: &WriteOptions) -> QuickCsvResult<()> {
        let path = self.target_file.clone().ok_or(QuickCsvError::NoTargetFile)?;
        self.write(path, options)
    }
}
