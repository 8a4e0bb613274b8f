//! quickcsv - inspect, query and rewrite delimited text files
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments
//! 2. Load the input file into an in-memory table
//! 3. Run the requested command against the table
//! 4. Print results to stdout (or write the converted file)

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use quickcsv::cell::Cell;
use quickcsv::cli::{self, Command};
use quickcsv::config::{LoadOptions, WriteOptions};
use quickcsv::parser::encode_line;
use quickcsv::table::Table;

fn main() -> Result<()> {
    // Step 1: Parse command-line arguments
    let args = cli::parse_args()?;
    init_tracing(args.verbose);

    // Step 2: Load the file; the library treats a missing file as empty,
    // on the command line that is an error
    if !args.file.exists() {
        bail!("File not found: {}", args.file.display());
    }
    let mut options = LoadOptions::new()
        .with_headers(args.headers)
        .with_delimiter(args.delimiter)
        .with_skip_lines(args.skip);
    if let Some(label) = &args.encoding {
        options = options.with_encoding_label(label)?;
    }
    let mut table = Table::from_file(&args.file, &options)
        .with_context(|| format!("Failed to load file: {}", args.file.display()))?;
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Table ready"
    );

    // Step 3: Run the command
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Show { json } => {
            if json {
                print_json(&table, &mut out)?;
            } else {
                print_table(&table, args.delimiter, &mut out)?;
            }
        }
        Command::Column { name } => {
            let column = table
                .get_column(&name)?
                .with_context(|| format!("Column '{}' not found", name))?;
            for cell in column {
                writeln!(out, "{}", cell)?;
            }
        }
        Command::Unique { name, filter } => {
            let filter = filter.as_deref().map(cli::parse_criterion).transpose()?;
            let values = table
                .get_unique_column_values(&name, filter.as_ref())
                .with_context(|| format!("Column '{}' not found", name))?;
            for value in values {
                writeln!(out, "{}", value)?;
            }
        }
        Command::Search { criteria } => {
            let lookups = criteria
                .iter()
                .map(|c| cli::parse_criterion(c))
                .collect::<Result<Vec<_>>>()?;
            match table.search_all(&lookups)? {
                Some(record) => writeln!(out, "{}", encode_line(&record, args.delimiter, false))?,
                None => bail!("No matching record"),
            }
        }
        Command::Convert {
            output,
            out_delimiter,
            null,
        } => {
            let write_options = WriteOptions::new()
                .with_delimiter(out_delimiter.unwrap_or(args.delimiter))
                .with_empty_cells_as_null(null);
            table
                .write(&output, &write_options)
                .with_context(|| format!("Failed to write file: {}", output.display()))?;
        }
    }

    Ok(())
}

/// Route tracing output to stderr; `-v` raises the level to debug
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_table(table: &Table, delimiter: char, out: &mut impl Write) -> Result<()> {
    if table.has_headers() {
        let header: Vec<Cell> = table.headers().into_iter().map(Cell::from).collect();
        writeln!(out, "{}", encode_line(&header, delimiter, false))?;
    }
    for record in table {
        writeln!(out, "{}", encode_line(&record, delimiter, false))?;
    }
    Ok(())
}

/// Records as JSON objects keyed by column name, or as arrays without headers
fn print_json(table: &Table, out: &mut impl Write) -> Result<()> {
    let rows: Vec<Value> = if table.has_headers() {
        let headers = table.headers();
        table
            .iter()
            .map(|record| -> serde_json::Result<Value> {
                let object: Map<String, Value> = headers
                    .iter()
                    .zip(record)
                    .map(|(name, cell)| -> serde_json::Result<(String, Value)> {
                        Ok((name.clone(), serde_json::to_value(cell)?))
                    })
                    .collect::<serde_json::Result<_>>()?;
                Ok(Value::Object(object))
            })
            .collect::<serde_json::Result<_>>()?
    } else {
        table
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<_>>()?
    };
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
