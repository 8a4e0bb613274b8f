//! quickcsv library crate
//!
//! This is the library component of quickcsv, an in-memory table for
//! delimited text files. The library provides:
//!
//! - A tolerant RFC4180-style decoder (quoted line breaks, doubled quotes,
//!   mixed `\n` / `\r\n` / `\r` terminators) and an always-quoting encoder
//! - A `Table` holding an optional header row and fixed-width records
//! - Header-aware column resolution and equality search by lookup criteria
//! - Upsert keyed on one column, plus row and column mutation
//! - Loading in any text encoding and writing back to the bound file
//!
//! # Example
//! ```no_run
//! # use quickcsv::config::{LoadOptions, WriteOptions};
//! # use quickcsv::lookup::LookupValue;
//! # use quickcsv::table::Table;
//! # use quickcsv::cell::record_from;
//! # fn example() -> quickcsv::error::QuickCsvResult<()> {
//! let options = LoadOptions::new().with_headers(true).with_delimiter(',');
//! let mut table = Table::from_file("people.csv", &options)?;
//!
//! table.overwrite_or_insert_record_by_name(record_from(&["Alice", "28"]), "name")?;
//! let bob = table.search(&LookupValue::new("Bob", "name"))?;
//!
//! table.save(&WriteOptions::new().with_delimiter(','))?;
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod parser;
pub mod table;
