//! Error types for inetsql-core.
//!
//! - [`enum@InetError`] - Main error enum that wraps all error types
//! - [`ParseError`] - Malformed inet text, with the offending input
//! - [`RangeError`] - Offset arithmetic left the address domain
//! - [`RecordError`] - A persisted record could not be decoded
//!
//! Parse and range errors are recoverable: callers decide whether a bad row
//! becomes NULL or fails the batch.

use thiserror::Error;

use crate::address::AddressFamily;

/// Main error type for inetsql-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InetError {
    /// Text could not be parsed as an inet value
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Offset arithmetic overflowed or left the family's range
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Persisted record could not be decoded
    #[error("Invalid inet record: {0}")]
    Record(#[from] RecordError),

    /// Prefix length wider than the address family
    #[error("Prefix length {prefix} is out of range for {family}")]
    InvalidPrefix { family: AddressFamily, prefix: u16 },
}

/// Malformed inet text.
///
/// Carries the full input so the message can point at what was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to convert string \"{input}\" to inet: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &[u8], kind: ParseErrorKind) -> Self {
        Self {
            input: String::from_utf8_lossy(input).into_owned(),
            kind,
        }
    }

    /// The rejected input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Reason a string was rejected by the parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("Expected an IP address")]
    NotAnAddress,

    #[error("Expected a number")]
    ExpectedNumber,

    #[error("Expected a number between 0 and 255")]
    OctetOutOfRange,

    #[error("Leading zeros are not allowed in an IPv4 octet")]
    LeadingZero,

    #[error("Expected a dot")]
    ExpectedDot,

    #[error("Expected a slash")]
    ExpectedSlash,

    #[error("Expected a number between 0 and {max}")]
    InvalidPrefix { max: u16 },

    #[error("Expected 4 or fewer hex digits")]
    QuibbleTooLong,

    #[error("Unexpected character found")]
    UnexpectedCharacter,

    #[error("Expected hex digits after a single colon")]
    MissingQuibble,

    #[error("IPv4 format can only be used for the final 2 quibbles")]
    EmbeddedIpv4NotFinal,

    #[error("Encountered more than one double-colon")]
    MultipleDoubleColons,

    #[error("Encountered more than two consecutive colons")]
    TripleColon,

    #[error("Expected 8 sets of 4 hex digits")]
    WrongQuibbleCount,

    #[error("Invalid double-colon, too many hex digits")]
    DoubleColonWithoutElision,

    #[error("Unexpected extra characters")]
    TrailingCharacters,
}

/// Offset arithmetic left the representable domain.
///
/// Results are never clamped or wrapped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// The 128-bit addition or subtraction overflowed
    #[error("Arithmetic overflow")]
    Overflow,

    /// The result does not fit in 32 bits
    #[error("Result outside IPv4 range")]
    OutsideIpv4,
}

/// Errors decoding a persisted inet record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Wrong number of bytes for a record
    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Family tag outside the known set
    #[error("unknown address family tag {0}")]
    UnknownFamily(u8),

    /// The unset family cannot be materialised
    #[error("address family is unset")]
    InvalidFamily,

    /// IPv4 key with bits above the low 32
    #[error("IPv4 key {key:#x} does not fit in 32 bits")]
    Ipv4KeyTooWide { key: u128 },

    /// Stored prefix wider than the family allows
    #[error("prefix length {prefix} is out of range for {family}")]
    PrefixTooWide { family: AddressFamily, prefix: u16 },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, InetError>;
