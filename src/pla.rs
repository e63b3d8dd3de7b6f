//! PLA (Programmable Logic Array) format support
//!
//! This module handles reading and writing the tabular truth-table format:
//!
//! ```text
//! .i 3
//! .o 1
//! 000 1
//! 001 1
//! 110 0
//! .e
//! ```
//!
//! [`PLATable`] is the raw, tokenized view of an input file. [`Cover`] is the
//! reduced function that gets written back in the same shape.

pub mod error;

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::cover::{Cover, Term};
pub use error::{PLAError, PLAReadError, PLAWriteError};

/// Suffix appended to the input file name to form the output file name
pub const OUTPUT_SUFFIX: &str = "_minimized.pla";

/// One `bits output` row of a PLA file, exactly as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PLARow {
    input: Arc<str>,
    output: Arc<str>,
}

impl PLARow {
    /// Create a row from its two tokens
    pub fn new(input: &str, output: &str) -> Self {
        PLARow {
            input: input.into(),
            output: output.into(),
        }
    }

    /// The input bit pattern
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output value token
    pub fn output(&self) -> &str {
        &self.output
    }

    /// True if the output token is exactly `1`
    pub fn is_minterm(&self) -> bool {
        &*self.output == "1"
    }
}

/// A tokenized PLA file
///
/// Rows are kept verbatim; nothing is validated against the declared width
/// until the table is reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PLATable {
    num_inputs: usize,
    num_outputs: usize,
    rows: Vec<PLARow>,
}

impl PLATable {
    /// Create a table from its parts
    pub fn new(num_inputs: usize, num_outputs: usize, rows: Vec<PLARow>) -> Self {
        PLATable {
            num_inputs,
            num_outputs,
            rows,
        }
    }

    /// Declared number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Declared number of outputs
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// All rows in file order
    pub fn rows(&self) -> &[PLARow] {
        &self.rows
    }

    /// Bit patterns of the rows whose output is `1`, in file order
    ///
    /// Duplicates are preserved.
    pub fn minterms(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| {
            if row.is_minterm() {
                Some(row.input())
            } else {
                debug!(
                    "Skipped term {} because output is {}",
                    row.input(),
                    row.output()
                );
                None
            }
        })
    }
}

/// Internal trait for types that can be serialized to and deserialized from PLA format
///
/// It is the basis for the public [`PLAReader`] and [`PLAWriter`] traits.
pub(crate) trait PLASerialisable: Sized {
    /// Get the number of inputs
    fn num_inputs(&self) -> usize;

    /// Get the number of outputs
    fn num_outputs(&self) -> usize;

    /// Iterate over `(input, output)` pairs to write, in order
    fn pla_rows(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &str)> + '_>;

    /// Create an instance from parsed PLA components
    fn create_from_pla_parts(num_inputs: usize, num_outputs: usize, rows: Vec<PLARow>) -> Self;
}

impl PLASerialisable for PLATable {
    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    fn pla_rows(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &str)> + '_> {
        Box::new(
            self.rows
                .iter()
                .map(|row| (Cow::Borrowed(row.input()), row.output())),
        )
    }

    fn create_from_pla_parts(num_inputs: usize, num_outputs: usize, rows: Vec<PLARow>) -> Self {
        PLATable::new(num_inputs, num_outputs, rows)
    }
}

impl PLASerialisable for Cover {
    fn num_inputs(&self) -> usize {
        Cover::num_inputs(self)
    }

    fn num_outputs(&self) -> usize {
        Cover::num_outputs(self)
    }

    fn pla_rows(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &str)> + '_> {
        Box::new(
            self.terms_iter()
                .map(|term| (Cow::Owned(term.to_string()), "1")),
        )
    }

    /// Rows with output `1` become terms; anything that is not a valid term of
    /// the declared width is dropped with a warning
    fn create_from_pla_parts(num_inputs: usize, num_outputs: usize, rows: Vec<PLARow>) -> Self {
        let terms = rows
            .iter()
            .filter(|row| row.is_minterm())
            .filter_map(|row| match Term::parse(row.input(), num_inputs) {
                Ok(term) => Some(term),
                Err(err) => {
                    warn!("Skipping invalid term: {}", err);
                    None
                }
            })
            .collect();
        Cover::from_terms(num_inputs, num_outputs, terms)
    }
}

/// Trait for types that support PLA serialization (writing)
///
/// It is automatically implemented for [`PLATable`] and [`Cover`].
pub trait PLAWriter {
    /// Write in PLA format to any `Write` implementation
    ///
    /// Both `to_pla_string` and `to_pla_file` delegate to this method.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Convert to a PLA format string
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write to a PLA file, creating or truncating it
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: PLASerialisable> PLAWriter for T {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        writeln!(writer, ".i {}", self.num_inputs())?;
        writeln!(writer, ".o {}", self.num_outputs())?;
        for (input, output) in self.pla_rows() {
            writeln!(writer, "{} {}", input, output)?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}

/// Trait for types that support PLA deserialization (reading/parsing)
///
/// Reading follows these rules:
/// - blank lines and `#` comments are skipped
/// - `.i N` and `.o M` declare the dimensions; a missing or non-numeric value
///   is an error
/// - `.e` or `.end` stops reading; other directives are ignored
/// - any other line must have exactly two whitespace-separated fields,
///   otherwise it is skipped with a warning
/// - without `.i`/`.o`, the dimensions are taken from the first row
pub trait PLAReader: Sized {
    /// Parse from any `BufRead` implementation
    ///
    /// Both `from_pla_string` and `from_pla_file` delegate to this method.
    fn from_pla_reader<R: std::io::BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{PLAReader, PLATable};
    ///
    /// let table = PLATable::from_pla_string(".i 2\n.o 1\n01 1\n10 0\n.e\n").unwrap();
    /// assert_eq!(table.num_inputs(), 2);
    /// assert_eq!(table.rows().len(), 2);
    /// assert_eq!(table.minterms().collect::<Vec<_>>(), vec!["01"]);
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(std::io::Cursor::new(s.as_bytes()))
    }

    /// Load from a PLA format file
    ///
    /// A missing or unreadable file is reported as [`PLAReadError::Io`].
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl<T: PLASerialisable> PLAReader for T {
    fn from_pla_reader<R: std::io::BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut num_outputs: Option<usize> = None;
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();

            if line.starts_with('.') {
                match parts[0] {
                    ".i" => num_inputs = Some(parse_directive(&parts, true)?),
                    ".o" => num_outputs = Some(parse_directive(&parts, false)?),
                    ".e" | ".end" => break,
                    other => debug!("Ignoring directive {}", other),
                }
                continue;
            }

            match parts.as_slice() {
                [input, output] => rows.push(PLARow::new(input, output)),
                _ => warn!(
                    "Skipping line {}: expected 2 fields, found {}",
                    idx + 1,
                    parts.len()
                ),
            }
        }

        let first = rows.first();
        let num_inputs = num_inputs
            .or_else(|| first.map(|row| row.input().chars().count()))
            .ok_or(PLAError::MissingInputDirective)?;
        let num_outputs = num_outputs
            .or_else(|| first.map(|row| row.output().chars().count()))
            .ok_or(PLAError::MissingOutputDirective)?;

        if num_outputs > 1 {
            warn!(
                "Multi-output PLA (.o {}) is not supported; only rows with output '1' are used",
                num_outputs
            );
        }

        debug!(
            "Parsed PLA with {} inputs, {} outputs, {} rows",
            num_inputs,
            num_outputs,
            rows.len()
        );

        Ok(T::create_from_pla_parts(num_inputs, num_outputs, rows))
    }
}

fn parse_directive(parts: &[&str], inputs: bool) -> Result<usize, PLAError> {
    let raw = parts.get(1).copied().unwrap_or("");
    raw.parse().map_err(|_| {
        let value: Arc<str> = raw.into();
        if inputs {
            PLAError::InvalidInputDirective { value }
        } else {
            PLAError::InvalidOutputDirective { value }
        }
    })
}

/// Derive the output file path for a given input file
///
/// A trailing `.pla` extension is replaced by `_minimized.pla`; any other file
/// name gets `_minimized.pla` appended, so the input is never overwritten.
///
/// ```
/// use std::path::Path;
/// use qmc_logic::pla::derive_output_path;
///
/// assert_eq!(derive_output_path("dir/adder.pla"), Path::new("dir/adder_minimized.pla"));
/// assert_eq!(derive_output_path("adder.txt"), Path::new("adder.txt_minimized.pla"));
/// ```
pub fn derive_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let base = if input.extension().is_some_and(|ext| ext == "pla") {
        input.file_stem()
    } else {
        input.file_name()
    };
    let mut name = base.map(OsString::from).unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_skips_comments_and_malformed_rows() {
        let pla = "# comment\n.i 2\n.o 1\n\n00 1\n01\n01 1 extra\n10 0\n.e\n11 1\n";
        let table = PLATable::from_pla_string(pla).unwrap();
        assert_eq!(table.rows(), &[PLARow::new("00", "1"), PLARow::new("10", "0")]);
        assert_eq!(table.minterms().collect::<Vec<_>>(), vec!["00"]);
    }

    #[test]
    fn test_reader_ignores_other_directives() {
        let pla = ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 1\n11 1\n.end\n";
        let table = PLATable::from_pla_string(pla).unwrap();
        assert_eq!(table.num_inputs(), 2);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_reader_rejects_bad_directives() {
        let err = PLATable::from_pla_string(".i x\n.o 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidInputDirective { ref value }) if &**value == "x"
        ));

        let err = PLATable::from_pla_string(".i 2\n.o\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidOutputDirective { ref value }) if value.is_empty()
        ));
    }

    #[test]
    fn test_reader_infers_dimensions() {
        let table = PLATable::from_pla_string("011 1\n101 1\n").unwrap();
        assert_eq!(table.num_inputs(), 3);
        assert_eq!(table.num_outputs(), 1);

        let err = PLATable::from_pla_string("# nothing here\n").unwrap_err();
        assert!(matches!(err, PLAReadError::PLA(PLAError::MissingInputDirective)));
    }

    #[test]
    fn test_writer_format() {
        let mut cover = Cover::new(3, 1);
        cover.add_term("0--".parse().unwrap()).unwrap();
        cover.add_term("110".parse().unwrap()).unwrap();
        assert_eq!(
            cover.to_pla_string().unwrap(),
            ".i 3\n.o 1\n0-- 1\n110 1\n.e\n"
        );
    }

    #[test]
    fn test_writer_empty_cover() {
        let cover = Cover::new(4, 1);
        assert_eq!(cover.to_pla_string().unwrap(), ".i 4\n.o 1\n.e\n");
    }

    #[test]
    fn test_cover_reader_drops_invalid_terms() {
        let cover = Cover::from_pla_string(".i 2\n.o 1\n0- 1\n1x 1\n11 0\n.e\n").unwrap();
        assert_eq!(cover.num_terms(), 1);
        assert_eq!(cover.terms()[0].to_string(), "0-");
    }

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path("f.pla"),
            PathBuf::from("f_minimized.pla")
        );
        assert_eq!(
            derive_output_path("/tmp/x/f.pla"),
            PathBuf::from("/tmp/x/f_minimized.pla")
        );
        assert_eq!(derive_output_path("f"), PathBuf::from("f_minimized.pla"));
    }
}
