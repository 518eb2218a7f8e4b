//! Error types for inetsql.

use thiserror::Error;

use inetsql_core::{InetError, ParseError, RangeError, RecordError};

/// Main error type for inetsql column functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the inet codec
    #[error(transparent)]
    Inet(#[from] InetError),

    /// Argument columns of different lengths
    #[error("{function}: argument columns differ in length ({left} vs {right})")]
    LengthMismatch {
        function: &'static str,
        left: usize,
        right: usize,
    },
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Inet(e.into())
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Inet(e.into())
    }
}

impl From<RecordError> for Error {
    fn from(e: RecordError) -> Self {
        Error::Inet(e.into())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
