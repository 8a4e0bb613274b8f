//! CLI argument parsing module for quickcsv
//!
//! This module handles parsing command-line arguments using the clap crate.
//! The command line is a thin front-end over the library: one input file,
//! the load options for it, and a single command to run against the table.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::lookup::LookupValue;

/// Command-line arguments for quickcsv
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Inspect, query and rewrite delimited text files"
)]
pub struct QuickCsvArgs {
    /// Input file to load
    #[clap(help = "Delimited text file to load")]
    pub file: PathBuf,

    /// Field separator of the input file
    #[clap(short = 'F', long, default_value_t = ';', help = "Field separator character")]
    pub delimiter: char,

    /// Treat the first line as column names
    #[clap(short = 'H', long, help = "First line holds column names")]
    pub headers: bool,

    /// Lines to discard before parsing starts
    #[clap(long, default_value_t = 0, help = "Number of preamble lines to skip")]
    pub skip: usize,

    /// Text encoding label, UTF-8 by default
    #[clap(long, help = "Text encoding of the input (e.g. latin1, utf-16le)")]
    pub encoding: Option<String>,

    /// Enable debug diagnostics on stderr
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// What to do with the loaded table
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the table
    Show {
        /// Print JSON instead of delimited text
        #[clap(long)]
        json: bool,
    },

    /// Print every value of one column, one per line
    Column {
        /// Column name
        name: String,
    },

    /// Print the distinct values of one column in first-seen order
    Unique {
        /// Column name
        name: String,

        /// Only consider rows where COLUMN equals VALUE
        #[clap(long = "where", value_name = "COLUMN=VALUE")]
        filter: Option<String>,
    },

    /// Print the first record matching every COLUMN=VALUE criterion
    Search {
        #[clap(required = true, value_name = "COLUMN=VALUE")]
        criteria: Vec<String>,
    },

    /// Write the table to another file
    Convert {
        /// Output path
        output: PathBuf,

        /// Field separator for the output, defaults to the input separator
        #[clap(long)]
        out_delimiter: Option<char>,

        /// Write absent cells as "null"
        #[clap(long)]
        null: bool,
    },
}

/// Parse command-line arguments into the QuickCsvArgs structure
pub fn parse_args() -> Result<QuickCsvArgs> {
    Ok(QuickCsvArgs::parse())
}

/// Parse a `COLUMN=VALUE` criterion
///
/// Only the first `=` separates column and value, so values may contain `=`.
pub fn parse_criterion(spec: &str) -> Result<LookupValue> {
    let (column, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid criterion '{}', expected COLUMN=VALUE", spec))?;
    if column.is_empty() {
        return Err(anyhow!("Invalid criterion '{}', column name is empty", spec));
    }
    Ok(LookupValue::new(value, column))
}
