//! CSV codec for quickcsv
//!
//! This module converts between delimited text and records. Decoding is a
//! single-pass character state machine that tolerates:
//!
//! - Quoted cells containing delimiters and raw line breaks
//! - Quotes escaped by doubling (`"a""b"` decodes to `a"b`)
//! - Stray quotes in the middle of an unquoted cell (kept literally)
//! - Mixed `\n`, `\r\n` and bare `\r` line terminators (so `\r\r` leaves an
//!   empty row between the two lines)
//! - A final line without a terminator
//!
//! Encoding always quotes every cell, doubles embedded quotes and trims
//! surrounding whitespace.

use std::fs;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, warn};

use crate::cell::{Cell, Record};
use crate::error::{QuickCsvError, QuickCsvResult};

/// The quoting character
pub const QUOTE: char = '"';

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ';';

/// Token written for absent cells when `empty_cells_as_null` is set
pub const NULL_TOKEN: &str = "null";

/// Line terminator used when writing files
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator used when writing files
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Clean up decoded cell text before it is stored
pub fn normalize(input: &str) -> String {
    input.trim().to_string()
}

/// Per-character decoding state
struct Decoder {
    delimiter: char,
    buffer: String,
    row: Record,
    rows: Vec<Record>,
    in_quotes: bool,
    /// The current cell opened with a quote
    quoted_cell: bool,
    /// The previous character closed a quote, so a quote now is an escape
    pending_closing_quote: bool,
}

impl Decoder {
    fn new(delimiter: char) -> Self {
        Decoder {
            delimiter,
            buffer: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
            in_quotes: false,
            quoted_cell: false,
            pending_closing_quote: false,
        }
    }

    fn feed(&mut self, c: char, rest: &mut Peekable<Chars<'_>>) {
        if c == QUOTE {
            self.quote();
            return;
        }

        if self.in_quotes {
            self.pending_closing_quote = false;
            self.buffer.push(c);
            return;
        }

        self.pending_closing_quote = false;
        if c == self.delimiter {
            self.finish_cell();
        } else if c == '\n' {
            self.finish_row();
        } else if c == '\r' {
            rest.next_if_eq(&'\n');
            self.finish_row();
        } else {
            self.buffer.push(c);
        }
    }

    fn quote(&mut self) {
        if self.in_quotes {
            self.in_quotes = false;
            self.pending_closing_quote = true;
        } else if self.buffer.is_empty() || self.quoted_cell {
            if self.pending_closing_quote {
                self.pending_closing_quote = false;
                self.buffer.push(QUOTE);
            }
            self.in_quotes = true;
            self.quoted_cell = true;
        } else {
            self.buffer.push(QUOTE);
        }
    }

    fn finish_cell(&mut self) {
        self.row.push(Cell::Text(normalize(&self.buffer)));
        self.buffer.clear();
        self.quoted_cell = false;
    }

    fn finish_row(&mut self) {
        self.finish_cell();
        self.rows.push(std::mem::take(&mut self.row));
    }

    fn finish(mut self) -> Vec<Record> {
        if !self.buffer.is_empty() || !self.row.is_empty() || self.quoted_cell {
            self.finish_row();
        }
        self.rows
    }
}

/// Consume `count` raw lines. Fails if the input runs out first.
fn skip_raw_lines(chars: &mut Peekable<Chars<'_>>, count: usize) -> QuickCsvResult<()> {
    for skipped in 0..count {
        if chars.peek().is_none() {
            return Err(QuickCsvError::SkipPastEnd {
                requested: count,
                available: skipped,
            });
        }
        while let Some(c) = chars.next() {
            if c == '\n' {
                break;
            }
            if c == '\r' {
                chars.next_if_eq(&'\n');
                break;
            }
        }
    }
    Ok(())
}

/// Decode delimited text into records
///
/// # Arguments
/// * `input` - The complete text to decode
/// * `delimiter` - Field delimiter character
/// * `skip_lines` - Raw lines to discard before parsing starts
///
/// # Returns
/// * `Ok(Vec<Record>)` with one record per logical line
/// * `Err(SkipPastEnd)` if the input ends while skipping lines
pub fn decode_str(input: &str, delimiter: char, skip_lines: usize) -> QuickCsvResult<Vec<Record>> {
    let mut chars = input.chars().peekable();
    skip_raw_lines(&mut chars, skip_lines)?;

    let mut decoder = Decoder::new(delimiter);
    while let Some(c) = chars.next() {
        decoder.feed(c, &mut chars);
    }
    Ok(decoder.finish())
}

/// Decode UTF-8 delimited text from any reader
pub fn decode<R: Read>(mut reader: R, delimiter: char, skip_lines: usize) -> QuickCsvResult<Vec<Record>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode_str(&text, delimiter, skip_lines)
}

/// Decode a file in the given text encoding (UTF-8 when `None`)
///
/// A byte-order mark at the start of the file takes precedence over the
/// requested encoding.
pub fn decode_file(
    path: &Path,
    delimiter: char,
    encoding: Option<&'static Encoding>,
    skip_lines: usize,
) -> QuickCsvResult<Vec<Record>> {
    let bytes = fs::read(path)?;
    let (text, used, had_errors) = encoding.unwrap_or(UTF_8).decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = used.name(),
            "Malformed byte sequences replaced while decoding"
        );
    }

    let records = decode_str(&text, delimiter, skip_lines)?;
    debug!(
        path = %path.display(),
        encoding = used.name(),
        records = records.len(),
        skip_lines,
        "Decoded file"
    );
    Ok(records)
}

/// Encode one record as a delimited line (without line terminator)
///
/// Every cell is quoted and trimmed, embedded quotes are doubled. Absent
/// cells become `"null"` when `empty_cells_as_null` is set, otherwise `""`.
pub fn encode_line(record: &[Cell], delimiter: char, empty_cells_as_null: bool) -> String {
    let mut line = String::new();
    for (i, cell) in record.iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push(QUOTE);
        match cell {
            Cell::Text(text) => {
                for c in text.trim().chars() {
                    if c == QUOTE {
                        line.push(QUOTE);
                    }
                    line.push(c);
                }
            }
            Cell::Null if empty_cells_as_null => line.push_str(NULL_TOKEN),
            Cell::Null => {}
        }
        line.push(QUOTE);
    }
    line
}
