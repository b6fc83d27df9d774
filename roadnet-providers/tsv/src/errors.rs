use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading a tab-separated road listing.
///
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, Error)]
pub enum TsvProviderError {
    #[error("road listing is empty")]
    EmptyInput,
    #[error("line {line}: query must name a start and an end endpoint, found {fields} field(s)")]
    InvalidQuery { line: usize, fields: usize },
    #[error("line {line}: expected {expected} tab-separated fields but found {actual}")]
    WrongColumnCount {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("line {line}: invalid road length `{value}`: {source}")]
    InvalidLength {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: invalid road id `{value}`: {source}")]
    InvalidRoadId {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: endpoint names must not be empty")]
    EmptyEndpoint { line: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
