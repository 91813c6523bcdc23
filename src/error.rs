//! Error types for the reducer

use std::num::ParseFloatError;

/// Errors that abort a reduction run.
#[derive(Debug, thiserror::Error)]
pub enum ReduceError {
    /// A data row has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A data field is not a floating-point literal. Blank lines land here
    /// with an empty `value`.
    #[error("line {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Too few observations to estimate a standard error.
    #[error("column '{column}': need at least 2 observations, got {observations}")]
    Degenerate { column: String, observations: usize },

    #[error("reading input")]
    Read(#[source] std::io::Error),

    #[error("writing output")]
    Io(#[from] std::io::Error),
}

impl ReduceError {
    /// Malformed row: wrong field count or a non-numeric field.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ReduceError::FieldCount { .. } | ReduceError::InvalidNumber { .. }
        )
    }

    /// Statistics undefined for the amount of data ingested.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ReduceError::Degenerate { .. })
    }

    /// The consumer closed our stdout early.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ReduceError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
