//! Ternary terms for Quine-McCluskey reduction
//!
//! This module provides the core term-related types used throughout the crate:
//! - [`Symbol`]: One position of a term (`0`, `1` or `-`)
//! - [`Term`]: A fixed-width sequence of symbols (a cube over the input variables)

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::error::TermError;

/// A single position in a [`Term`]
///
/// The declaration order defines the total order used when sorting terms:
/// `-` < `0` < `1`, which is also the ASCII order of the printed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Don't care (`-`): the variable may take either value
    DontCare,
    /// The variable must be 0
    Zero,
    /// The variable must be 1
    One,
}

impl Symbol {
    /// Parse a single PLA character into a symbol
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            '-' => Some(Symbol::DontCare),
            _ => None,
        }
    }

    /// The PLA character for this symbol
    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::DontCare => '-',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Option<bool>> for Symbol {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => Symbol::Zero,
            Some(true) => Symbol::One,
            None => Symbol::DontCare,
        }
    }
}

impl From<Symbol> for Option<bool> {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Zero => Some(false),
            Symbol::One => Some(true),
            Symbol::DontCare => None,
        }
    }
}

/// An immutable ternary term
///
/// Terms are value objects: two terms are equal iff their symbol sequences are
/// identical, and ordering is lexicographic over [`Symbol`]'s order. Merging
/// never mutates its operands, it produces a fresh term.
///
/// # Examples
///
/// ```
/// use qmc_logic::Term;
///
/// let a: Term = "010".parse().unwrap();
/// let b: Term = "011".parse().unwrap();
///
/// let merged = a.try_merge(&b).unwrap();
/// assert_eq!(merged.to_string(), "01-");
/// assert_eq!(merged.population_count(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    symbols: Arc<[Symbol]>,
}

impl Term {
    /// Create a term from a symbol slice
    pub fn new(symbols: &[Symbol]) -> Self {
        Term {
            symbols: symbols.into(),
        }
    }

    /// Parse and validate a term against the declared input width
    ///
    /// A term is well-formed iff it is exactly `width` characters long and
    /// every character is one of `0`, `1` or `-`.
    ///
    /// ```
    /// use qmc_logic::{Term, TermError};
    ///
    /// assert!(Term::parse("0-1", 3).is_ok());
    /// assert!(matches!(Term::parse("01", 3), Err(TermError::LengthMismatch { .. })));
    /// assert!(matches!(Term::parse("0x1", 3), Err(TermError::InvalidSymbol { .. })));
    /// ```
    pub fn parse(text: &str, width: usize) -> Result<Self, TermError> {
        let actual = text.chars().count();
        if actual != width {
            return Err(TermError::LengthMismatch {
                term: text.into(),
                expected: width,
                actual,
            });
        }
        text.parse()
    }

    /// Build a term from cube-style inputs (`None` is don't care)
    pub fn from_inputs(inputs: &[Option<bool>]) -> Self {
        inputs.iter().map(|&inp| Symbol::from(inp)).collect()
    }

    /// Convert to cube-style inputs (`None` is don't care)
    pub fn to_inputs(&self) -> Vec<Option<bool>> {
        self.symbols.iter().map(|&s| s.into()).collect()
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True for the zero-width term
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols of this term
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of `1` symbols; don't-cares are not counted
    pub fn population_count(&self) -> usize {
        self.symbols.iter().filter(|&&s| s == Symbol::One).count()
    }

    /// Number of `-` symbols
    pub fn dont_care_count(&self) -> usize {
        self.symbols
            .iter()
            .filter(|&&s| s == Symbol::DontCare)
            .count()
    }

    /// Merge two terms that differ in exactly one position
    ///
    /// Returns a new term equal to both inputs except for a `-` at the
    /// differing position. Symbols are compared exactly, so `-` against `1`
    /// counts as a difference. Terms of different length, identical terms and
    /// terms differing in more than one position are not combinable.
    pub fn try_merge(&self, other: &Term) -> Option<Term> {
        if self.len() != other.len() {
            return None;
        }

        let mut differing = None;
        for (pos, (a, b)) in self.symbols.iter().zip(other.symbols.iter()).enumerate() {
            if a != b {
                if differing.is_some() {
                    return None;
                }
                differing = Some(pos);
            }
        }

        let pos = differing?;
        let mut symbols = self.symbols.to_vec();
        symbols[pos] = Symbol::DontCare;
        Some(Term::new(&symbols))
    }

    /// Check whether this term matches a fully or partially specified term
    ///
    /// Every defined position of `self` must agree with `other`; positions
    /// where `self` is `-` match anything. Terms of different width never
    /// cover each other.
    pub fn covers(&self, other: &Term) -> bool {
        self.len() == other.len()
            && self
                .symbols
                .iter()
                .zip(other.symbols.iter())
                .all(|(&a, &b)| a == Symbol::DontCare || a == b)
    }

    /// Expand every don't-care into both values
    ///
    /// Yields the `2^k` fully specified terms covered by this term (`k` being
    /// [`dont_care_count`](Self::dont_care_count)) in ascending order.
    pub fn minterms(&self) -> Minterms<'_> {
        let free: Vec<usize> = self
            .symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Symbol::DontCare)
            .map(|(pos, _)| pos)
            .collect();
        let remaining = 1u128.checked_shl(free.len() as u32).unwrap_or(0);
        Minterms {
            term: self,
            free,
            next: 0,
            remaining,
        }
    }
}

impl FromStr for Term {
    type Err = TermError;

    /// Parse a term of any width, rejecting characters outside `{0, 1, -}`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                Symbol::from_char(character).ok_or_else(|| TermError::InvalidSymbol {
                    term: s.into(),
                    character,
                    position,
                })
            })
            .collect()
    }
}

impl FromIterator<Symbol> for Term {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Term {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", self)
    }
}

/// Iterator over the minterms covered by a [`Term`]
///
/// Created by [`Term::minterms`].
pub struct Minterms<'a> {
    term: &'a Term,
    free: Vec<usize>,
    next: u128,
    remaining: u128,
}

impl Iterator for Minterms<'_> {
    type Item = Term;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let mut symbols = self.term.symbols.to_vec();
        // The last free position is the least significant bit
        for (i, &pos) in self.free.iter().rev().enumerate() {
            symbols[pos] = if (self.next >> i) & 1 == 1 {
                Symbol::One
            } else {
                Symbol::Zero
            };
        }
        self.next += 1;
        self.remaining -= 1;
        Some(Term::new(&symbols))
    }
}
