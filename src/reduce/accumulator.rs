//! Implicant accumulator
//!
//! Collects every term that survived a merge pass unabsorbed, across all
//! generations of a reduction.

use std::collections::BTreeSet;

use crate::cover::Term;

/// A deduplicating set of final implicants
///
/// Terms are kept ordered by [`Term`]'s ordering (`-` < `0` < `1` per
/// position), so [`finalize`](Self::finalize) yields the same sequence for the
/// same set regardless of insertion order.
///
/// ```
/// use qmc_logic::{ImplicantAccumulator, Term};
///
/// let mut acc = ImplicantAccumulator::new();
/// assert!(acc.add("01".parse::<Term>().unwrap()));
/// assert!(acc.add("-1".parse::<Term>().unwrap()));
/// assert!(!acc.add("01".parse::<Term>().unwrap()));
///
/// let terms: Vec<String> = acc.finalize().iter().map(|t| t.to_string()).collect();
/// assert_eq!(terms, vec!["-1", "01"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImplicantAccumulator {
    terms: BTreeSet<Term>,
}

impl ImplicantAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term; returns `false` if an identical term was already present
    pub fn add(&mut self, term: Term) -> bool {
        self.terms.insert(term)
    }

    /// True if an identical term has been added
    pub fn contains(&self, term: &Term) -> bool {
        self.terms.contains(term)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no term has been added
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// All accumulated terms in sorted order
    pub fn finalize(self) -> Vec<Term> {
        self.terms.into_iter().collect()
    }
}

impl Extend<Term> for ImplicantAccumulator {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Term {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_deduplicates() {
        let mut acc = ImplicantAccumulator::new();
        assert!(acc.is_empty());
        assert!(acc.add(term("0-")));
        assert!(!acc.add(term("0-")));
        assert_eq!(acc.len(), 1);
        assert!(acc.contains(&term("0-")));
        assert!(!acc.contains(&term("1-")));
    }

    #[test]
    fn test_finalize_is_insertion_order_independent() {
        let terms = ["1-0", "0--", "-11", "100"];

        let mut forward = ImplicantAccumulator::new();
        forward.extend(terms.iter().map(|s| term(s)));

        let mut backward = ImplicantAccumulator::new();
        backward.extend(terms.iter().rev().map(|s| term(s)));

        let expected: Vec<Term> = ["-11", "0--", "1-0", "100"].iter().map(|s| term(s)).collect();
        assert_eq!(forward.finalize(), expected);
        assert_eq!(backward.finalize(), expected);
    }
}
