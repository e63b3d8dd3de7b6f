//! Cover types for reduced Boolean functions
//!
//! A [`Cover`] is the sum-of-products form of a single-output function: a list
//! of [`Term`]s over a fixed number of inputs. Reduction produces a cover, and
//! covers are what get written back out in PLA format.

pub(crate) mod error;
mod term;

pub use error::TermError;
pub use term::{Minterms, Symbol, Term};

/// A list of implicant terms with fixed dimensions
///
/// # Examples
///
/// ```
/// use qmc_logic::{Cover, Term};
///
/// let mut cover = Cover::new(3, 1);
/// cover.add_term("0--".parse().unwrap()).unwrap();
///
/// assert_eq!(cover.num_terms(), 1);
/// assert!(cover.covers(&"011".parse::<Term>().unwrap()));
/// assert!(!cover.covers(&"111".parse::<Term>().unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    /// Number of input variables
    num_inputs: usize,
    /// Number of output variables (as declared, only one is reduced)
    num_outputs: usize,
    terms: Vec<Term>,
}

impl Cover {
    /// Create an empty cover
    pub fn new(num_inputs: usize, num_outputs: usize) -> Self {
        Cover {
            num_inputs,
            num_outputs,
            terms: Vec::new(),
        }
    }

    /// Create a cover from terms that already have the right width
    pub(crate) fn from_terms(num_inputs: usize, num_outputs: usize, terms: Vec<Term>) -> Self {
        debug_assert!(terms.iter().all(|t| t.len() == num_inputs));
        Cover {
            num_inputs,
            num_outputs,
            terms,
        }
    }

    /// Append a term, rejecting it if its width differs from the cover's
    pub fn add_term(&mut self, term: Term) -> Result<(), TermError> {
        if term.len() != self.num_inputs {
            return Err(TermError::LengthMismatch {
                term: term.to_string().into(),
                expected: self.num_inputs,
                actual: term.len(),
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Number of input variables
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of declared output variables
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Number of terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// The terms in cover order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over the terms
    pub fn terms_iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Consume the cover, returning its terms
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// True if any term of the cover covers `minterm`
    pub fn covers(&self, minterm: &Term) -> bool {
        self.terms.iter().any(|t| t.covers(minterm))
    }
}
