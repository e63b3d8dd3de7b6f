//! # Quine-McCluskey Implicant Reduction
//!
//! This crate reduces a single-output Boolean function, given as a list of
//! minterms over N inputs, to the set of implicants that survive the
//! pairwise-combination phase of the Quine-McCluskey algorithm.
//!
//! Minterms are grouped by the number of ones they contain. Terms in adjacent
//! groups that differ in exactly one position are merged into a term with a
//! don't-care (`-`) there, and the process repeats on the merged terms until
//! nothing more combines. Every term that was never absorbed into a larger one
//! is part of the result.
//!
//! There is deliberately no covering step: the output is the full set of
//! surviving implicants, not a minimum sum-of-products.
//!
//! ## Reducing minterms directly
//!
//! ```
//! let terms = qmc_logic::reduce(&["000", "001", "010", "011"], 3);
//! assert_eq!(terms.len(), 1);
//! assert_eq!(terms[0].to_string(), "0--");
//! ```
//!
//! ## PLA files
//!
//! ```
//! use qmc_logic::{PLAReader, PLATable, PLAWriter, Reducible};
//! # use std::io::Write;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let mut temp = tempfile::NamedTempFile::new()?;
//! # temp.write_all(b".i 2\n.o 1\n00 1\n01 1\n.e\n")?;
//! # temp.flush()?;
//! # let input_path = temp.path();
//! let table = PLATable::from_pla_file(input_path)?;
//! let cover = table.reduce()?;
//!
//! assert_eq!(cover.to_pla_string()?, ".i 2\n.o 1\n0- 1\n.e\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Progress is reported through the [`log`] facade: dropped rows and terms at
//! `warn`, per-pass statistics at `debug` (or `info` with
//! [`ReduceConfig::summary`]), group contents at `trace`. Nothing is printed
//! unless the application installs a logger.

pub mod cover;
pub mod error;
pub mod pla;
pub mod reduce;

pub use cover::{Cover, Symbol, Term, TermError};
pub use error::ReduceError;
pub use pla::{PLAReader, PLARow, PLATable, PLAWriter};
pub use reduce::{reduce, ImplicantAccumulator, PassStats, Reducer, Reducible, Reduction};

/// Configuration for a reduction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Fail on the first malformed minterm instead of skipping it
    pub strict: bool,
    /// Report per-pass statistics at `info` level instead of `debug`
    pub summary: bool,
}

impl ReduceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReduceConfig::new();
        assert!(!config.strict);
        assert!(!config.summary);
    }

    #[test]
    fn test_reduce_reexport() {
        let terms = reduce(&["00", "11"], 2);
        let terms: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["00", "11"]);
    }
}
