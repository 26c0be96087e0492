//! Error types for the catalog crate.
//!
//! Every variant is fatal for catalog construction: the caller cannot
//! build a usable `Catalog` and is expected to abort startup.

use thiserror::Error;

/// Errors that can occur while loading and validating the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    /// A cell couldn't be parsed into the expected type
    #[error("Parse error at line {line} in field {field}: {reason}")]
    ParseError {
        line: u64,
        field: String,
        reason: String,
    },

    /// A cell parsed but is outside its allowed domain
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        line: u64,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
