//! Data-file loader
//!
//! The inventory export is a plain delimited text file:
//!
//! ```text
//! MotorPH Inventory Data - March 2023          <- header, skipped
//! Date Entered,Stock Label,Brand,Engine Number,Status   <- header, skipped
//! 2/1/2023,Old,Honda,142QCR-2823,On-hand
//! 2/1/2023,New,Yamaha,E3V2E-165431,Sold
//! ```
//!
//! The first [`HEADER_LINES`] lines are skipped unconditionally. Every other
//! line is split on the delimiter; lines with too few fields are skipped and
//! counted, the rest become [`InventoryItem`]s in file order.
//!
//! Quoting and escaping are not supported.

pub mod errors;

use crate::constants::{FIELD_DELIMITER, HEADER_LINES, MIN_FIELDS};
use crate::record::InventoryItem;
use errors::LoadError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Format parameters for reading a data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Lines skipped at the top of the file
    pub header_lines: usize,
    /// Field separator
    pub delimiter: char,
    /// Minimum number of fields for a line to be accepted (never below five)
    pub min_fields: usize,
}

impl LoaderConfig {
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_min_fields(mut self, min_fields: usize) -> Self {
        self.min_fields = min_fields;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            header_lines: HEADER_LINES,
            delimiter: FIELD_DELIMITER,
            min_fields: MIN_FIELDS,
        }
    }
}

/// Result of parsing a data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    /// Parsed records in file order
    pub records: Vec<InventoryItem>,
    /// Data lines dropped for having too few fields
    pub skipped: usize,
}

impl LoadedRecords {
    fn accept(&mut self, line: &str, config: &LoaderConfig, line_number: usize) {
        match InventoryItem::parse_line(line, config) {
            Some(item) => self.records.push(item),
            None => {
                trace!(line = line_number, "skipping malformed line");
                self.skipped += 1;
            }
        }
    }
}

/// Read and parse a data file
pub fn read_records(path: &Path, config: &LoaderConfig) -> Result<LoadedRecords, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut loaded = LoadedRecords::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                line: line_number + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;
        if line_number <= config.header_lines {
            continue;
        }

        // Invalid UTF-8 is replaced rather than failing the whole file
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        loaded.accept(&line, config, line_number);
    }

    debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped,
        "parsed data file"
    );
    Ok(loaded)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse data-file text already held in memory
pub fn parse_records(text: &str, config: &LoaderConfig) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();
    for (index, line) in text.lines().enumerate().skip(config.header_lines) {
        loaded.accept(line, config, index + 1);
    }
    loaded
}
