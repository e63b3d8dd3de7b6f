//! Error types for term validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors produced when a term string is not well-formed
///
/// A term is well-formed for a given input width iff its length equals the
/// width and every character is one of `0`, `1` or `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// The term has the wrong number of positions
    LengthMismatch {
        /// The offending term text
        term: Arc<str>,
        /// The declared input width
        expected: usize,
        /// The actual length of the term
        actual: usize,
    },
    /// The term contains a character outside `{0, 1, -}`
    InvalidSymbol {
        /// The offending term text
        term: Arc<str>,
        /// The invalid character
        character: char,
        /// Position of the character in the term
        position: usize,
    },
}

impl TermError {
    /// The text of the rejected term
    pub fn term(&self) -> &str {
        match self {
            TermError::LengthMismatch { term, .. } | TermError::InvalidSymbol { term, .. } => term,
        }
    }
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::LengthMismatch {
                term,
                expected,
                actual,
            } => write!(
                f,
                "Term '{}' has {} positions, expected {}",
                term, actual, expected
            ),
            TermError::InvalidSymbol {
                term,
                character,
                position,
            } => write!(
                f,
                "Term '{}' has invalid symbol '{}' at position {}",
                term, character, position
            ),
        }
    }
}

impl std::error::Error for TermError {}

impl From<TermError> for io::Error {
    fn from(err: TermError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
