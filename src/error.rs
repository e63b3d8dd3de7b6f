//! Error types for the Quine-McCluskey reducer
//!
//! [`ReduceError`] is the crate-level error. The more specific error types are
//! re-exported here so callers can match on them from one place.

use std::fmt;
use std::io;

pub use crate::cover::error::TermError;
pub use crate::pla::error::{PLAError, PLAReadError, PLAWriteError};

/// The main error type for reductions
///
/// In the default (non-strict) configuration a reduction itself never fails;
/// errors come from reading input or from strict validation.
#[derive(Debug)]
pub enum ReduceError {
    /// A minterm failed validation while running in strict mode
    InvalidTerm(TermError),

    /// Reading the PLA input failed
    Read(PLAReadError),

    /// Writing the PLA output failed
    Write(PLAWriteError),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvalidTerm(err) => write!(f, "Invalid term: {}", err),
            ReduceError::Read(err) => write!(f, "{}", err),
            ReduceError::Write(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::InvalidTerm(err) => Some(err),
            ReduceError::Read(err) => Some(err),
            ReduceError::Write(err) => Some(err),
        }
    }
}

impl From<TermError> for ReduceError {
    fn from(err: TermError) -> Self {
        ReduceError::InvalidTerm(err)
    }
}

impl From<PLAReadError> for ReduceError {
    fn from(err: PLAReadError) -> Self {
        ReduceError::Read(err)
    }
}

impl From<PLAWriteError> for ReduceError {
    fn from(err: PLAWriteError) -> Self {
        ReduceError::Write(err)
    }
}

impl From<io::Error> for ReduceError {
    fn from(err: io::Error) -> Self {
        ReduceError::Read(PLAReadError::Io(err))
    }
}

impl From<ReduceError> for io::Error {
    fn from(err: ReduceError) -> Self {
        match err {
            ReduceError::InvalidTerm(e) => e.into(),
            ReduceError::Read(e) => e.into(),
            ReduceError::Write(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_term_display() {
        let err = ReduceError::from(TermError::InvalidSymbol {
            term: "01a".into(),
            character: 'a',
            position: 2,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid term"));
        assert!(msg.contains("'a'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_round_trip() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.pla");
        let err: ReduceError = io_err.into();
        assert!(matches!(err, ReduceError::Read(PLAReadError::Io(_))));

        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_header_error_maps_to_invalid_data() {
        let err: ReduceError = PLAReadError::PLA(PLAError::MissingInputDirective).into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
