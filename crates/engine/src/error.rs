//! Per-query outcomes that are not a successful result.
//!
//! Both variants are recoverable: the caller decides how to present them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No catalog record has this title (case-insensitive)
    #[error("Movie not found: {title}")]
    NotFound { title: String },

    /// A request parameter is outside its domain (e.g. `top_n == 0`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
