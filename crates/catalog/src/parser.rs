//! Parser for the tabular movie catalog.
//!
//! The input is a headered CSV file. Only four columns are required and the
//! rest are ignored:
//! - `title`: free text
//! - `genres`: `;`-delimited tags, may be empty
//! - `vote_average`: number in 0 - 10
//! - `runtime`: non-negative number of minutes (`120` or `120.0`)
//!
//! Structural problems (missing file, missing column, malformed CSV) fail
//! the whole load. A row whose numbers are empty, unparseable or out of
//! range is skipped with a warning and the rest of the file still loads.

use crate::error::{DataLoadError, Result};
use crate::types::{GenreSet, MovieRecord};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "genres", "vote_average", "runtime"];

const MAX_RATING: f64 = 10.0;

/// Header positions of the required columns
#[derive(Debug, Clone, Copy)]
struct Columns {
    title: usize,
    genres: usize,
    vote_average: usize,
    runtime: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, source: &str) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: name.to_string(),
                    path: source.to_string(),
                })
        };

        Ok(Self {
            title: find("title")?,
            genres: find("genres")?,
            vote_average: find("vote_average")?,
            runtime: find("runtime")?,
        })
    }
}

/// Records parsed from a catalog file
#[derive(Debug, Default)]
pub struct ParsedRows {
    pub records: Vec<MovieRecord>,
    /// Rows dropped because a cell held an unusable value
    pub skipped: usize,
}

/// Parse a catalog CSV file from disk
pub fn parse_catalog_csv(path: &Path) -> Result<ParsedRows> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::Io(e),
    })?;

    parse_catalog_reader(file, &path.display().to_string())
}

/// Parse catalog CSV from any reader.
///
/// `source` names the input in error messages.
pub fn parse_catalog_reader<R: Read>(reader: R, source: &str) -> Result<ParsedRows> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let columns = Columns::locate(reader.headers()?, source)?;
    debug!(?columns, "Located required columns in {}", source);

    let mut parsed = ParsedRows::default();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        match parse_row(&row, columns, line) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                warn!("Skipping row at line {} in {}: {}", line, source, e);
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn parse_row(row: &StringRecord, columns: Columns, line: u64) -> Result<MovieRecord> {
    let cell = |index: usize| row.get(index).unwrap_or("");

    Ok(MovieRecord::new(
        cell(columns.title),
        GenreSet::parse(cell(columns.genres)),
        parse_rating(cell(columns.vote_average), line)?,
        parse_runtime(cell(columns.runtime), line)?,
    ))
}

/// Parse `vote_average`, which must be finite and within 0 - 10
fn parse_rating(raw: &str, line: u64) -> Result<f64> {
    let value = parse_number(raw, "vote_average", line)?;
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(DataLoadError::InvalidValue {
            line,
            field: "vote_average".to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Parse `runtime` into whole minutes
fn parse_runtime(raw: &str, line: u64) -> Result<u32> {
    let value = parse_number(raw, "runtime", line)?;
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(DataLoadError::InvalidValue {
            line,
            field: "runtime".to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value.round() as u32)
}

fn parse_number(raw: &str, field: &str, line: u64) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DataLoadError::ParseError {
            line,
            field: field.to_string(),
            reason: "empty value".to_string(),
        });
    }

    let value: f64 = trimmed.parse().map_err(|e| DataLoadError::ParseError {
        line,
        field: field.to_string(),
        reason: format!("{}: {:?}", e, trimmed),
    })?;

    if !value.is_finite() {
        return Err(DataLoadError::InvalidValue {
            line,
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}
