// error.rs - Error types for contract violations and numeric conversion.
//
// A failed match is never an error: match operations return `bool`. The
// variants here cover misuse (bad offsets, bad input bytes) and digit
// conversion failures, grouped by `ErrorKind`.

use std::fmt;

/// Broad category of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was unusable.
    InvalidArgument,
    /// An offset or range lies outside the text, is inverted, or splits a character.
    OutOfRange,
    /// A digit range could not be converted to an integer.
    NumberFormat,
    /// The caller-supplied sink failed.
    Write,
}

/// Reason a digit range could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormatError {
    /// The range holds no characters.
    Empty,
    /// The character is not a digit of the requested base.
    InvalidDigit(char),
    /// The value does not fit the target integer type.
    Overflow,
}

impl fmt::Display for NumberFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormatError::Empty => write!(f, "empty digit range"),
            NumberFormatError::InvalidDigit(ch) => write!(f, "illegal digit {:?}", ch),
            NumberFormatError::Overflow => write!(f, "value out of range for integer type"),
        }
    }
}

impl std::error::Error for NumberFormatError {}

/// Error type for matcher operations that can violate their contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid argument passed to a function.
    InvalidArgument(String),
    /// A single offset is beyond the end of the text.
    IndexOutOfRange { index: usize, length: usize },
    /// A `from..to` range is inverted or extends past the end of the text.
    RangeOutOfBounds { from: usize, to: usize, length: usize },
    /// The offset falls inside a multi-byte character.
    NotCharBoundary { offset: usize },
    /// Digit conversion failed.
    NumberFormat(NumberFormatError),
    /// The sink passed to an append operation returned an error.
    Write(fmt::Error),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            MatchError::IndexOutOfRange { index, length } => {
                write!(f, "index {} out of range for length {}", index, length)
            }
            MatchError::RangeOutOfBounds { from, to, length } => {
                write!(f, "range {}..{} out of bounds for length {}", from, to, length)
            }
            MatchError::NotCharBoundary { offset } => {
                write!(f, "offset {} is not on a character boundary", offset)
            }
            MatchError::NumberFormat(err) => write!(f, "number format error: {}", err),
            MatchError::Write(_) => write!(f, "write to sink failed"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::NumberFormat(err) => Some(err),
            MatchError::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumberFormatError> for MatchError {
    fn from(err: NumberFormatError) -> Self {
        MatchError::NumberFormat(err)
    }
}

impl From<fmt::Error> for MatchError {
    fn from(err: fmt::Error) -> Self {
        MatchError::Write(err)
    }
}

impl MatchError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MatchError::IndexOutOfRange { .. }
            | MatchError::RangeOutOfBounds { .. }
            | MatchError::NotCharBoundary { .. } => ErrorKind::OutOfRange,
            MatchError::NumberFormat(_) => ErrorKind::NumberFormat,
            MatchError::Write(_) => ErrorKind::Write,
        }
    }
}
