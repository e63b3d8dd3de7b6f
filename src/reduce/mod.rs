//! Grouping and merge engine
//!
//! This module drives the pairwise-combination phase of Quine-McCluskey:
//! minterms are grouped by population count, terms in adjacent groups that
//! differ in exactly one position are merged, and the pass is repeated on the
//! merged terms until a pass produces nothing new. Every term that is never
//! absorbed by a merge in the pass it appears in ends up in the result.
//!
//! No covering step follows: the result is the full set of surviving
//! implicants, not a minimum cover.

mod accumulator;
mod generation;
mod reducible;

pub use accumulator::ImplicantAccumulator;
pub use reducible::Reducible;

use log::{log, trace, warn, Level};

use crate::cover::{Cover, Term, TermError};
use crate::error::ReduceError;
use crate::ReduceConfig;
use generation::Generation;

/// Statistics for a single merge pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// Generation the pass ran over (0 for the input minterms)
    pub generation: usize,
    /// Number of terms in that generation
    pub terms: usize,
    /// Number of successful merges
    pub merges: usize,
    /// Number of terms that were not absorbed
    pub survivors: usize,
}

/// The outcome of a reduction
#[derive(Debug, Clone)]
pub struct Reduction {
    num_inputs: usize,
    implicants: Vec<Term>,
    rejected: Vec<TermError>,
    passes: Vec<PassStats>,
}

impl Reduction {
    /// Input width the reduction ran with
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Surviving implicants in sorted order
    pub fn implicants(&self) -> &[Term] {
        &self.implicants
    }

    /// Consume the reduction, returning the sorted implicants
    pub fn into_implicants(self) -> Vec<Term> {
        self.implicants
    }

    /// Malformed input terms that were left out of the reduction
    pub fn rejected(&self) -> &[TermError] {
        &self.rejected
    }

    /// Per-pass statistics, in execution order
    pub fn passes(&self) -> &[PassStats] {
        &self.passes
    }

    /// Number of passes that merged at least one pair
    pub fn merging_passes(&self) -> usize {
        self.passes.iter().filter(|p| p.merges > 0).count()
    }

    /// Convert into a cover with the given number of declared outputs
    pub fn into_cover(self, num_outputs: usize) -> Cover {
        Cover::from_terms(self.num_inputs, num_outputs, self.implicants)
    }
}

/// Runs reductions with a fixed configuration
///
/// # Examples
///
/// ```
/// use qmc_logic::{ReduceConfig, Reducer};
///
/// # fn main() -> Result<(), qmc_logic::ReduceError> {
/// let reducer = Reducer::new(ReduceConfig::default());
/// let reduction = reducer.run(&["000", "001", "010", "011"], 3)?;
///
/// let terms: Vec<String> = reduction.implicants().iter().map(|t| t.to_string()).collect();
/// assert_eq!(terms, vec!["0--"]);
/// assert_eq!(reduction.merging_passes(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: ReduceConfig,
}

impl Reducer {
    /// Create a reducer with the given configuration
    pub fn new(config: ReduceConfig) -> Self {
        Reducer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// Reduce raw minterm strings of width `num_inputs`
    ///
    /// Malformed strings are dropped with a warning and reported in
    /// [`Reduction::rejected`], unless the configuration is strict, in which
    /// case the first one aborts the run.
    pub fn run<S: AsRef<str>>(
        &self,
        minterms: &[S],
        num_inputs: usize,
    ) -> Result<Reduction, ReduceError> {
        let mut terms = Vec::with_capacity(minterms.len());
        let mut rejected = Vec::new();

        for raw in minterms {
            match Term::parse(raw.as_ref(), num_inputs) {
                Ok(term) => terms.push(term),
                Err(err) if self.config.strict => return Err(err.into()),
                Err(err) => {
                    warn!("Skipping invalid term: {}", err);
                    rejected.push(err);
                }
            }
        }

        let mut reduction = self.run_terms(terms, num_inputs);
        reduction.rejected = rejected;
        Ok(reduction)
    }

    /// Reduce terms that are already known to be `num_inputs` wide
    pub(crate) fn run_terms(&self, terms: Vec<Term>, num_inputs: usize) -> Reduction {
        let level = if self.config.summary {
            Level::Info
        } else {
            Level::Debug
        };

        let mut current = Generation::initial(num_inputs, terms);
        let mut accumulator = ImplicantAccumulator::new();
        let mut passes = Vec::new();

        loop {
            trace!(
                "Generation {} groups (ones, size): {:?}",
                current.index(),
                current.group_sizes()
            );

            let pass = current.merge_pass();

            let mut survivors = 0;
            for term in current.terms() {
                if !pass.absorbed.contains(term) {
                    trace!("Implicant {} survives generation {}", term, current.index());
                    accumulator.add(term.clone());
                    survivors += 1;
                }
            }

            let stats = PassStats {
                generation: current.index(),
                terms: current.num_terms(),
                merges: pass.merges,
                survivors,
            };
            log!(
                level,
                "Pass {}: {} terms, {} merges, {} survivors",
                stats.generation,
                stats.terms,
                stats.merges,
                stats.survivors
            );
            passes.push(stats);

            if pass.next.is_empty() {
                break;
            }
            current = pass.next;
        }

        log!(
            level,
            "Reduction finished after {} passes with {} implicants",
            passes.len(),
            accumulator.len()
        );

        Reduction {
            num_inputs,
            implicants: accumulator.finalize(),
            rejected: Vec::new(),
            passes,
        }
    }
}

/// Reduce a list of minterm strings with the default configuration
///
/// Malformed strings are skipped with a warning. The result is sorted.
///
/// ```
/// let terms = qmc_logic::reduce(&["00", "01"], 2);
/// assert_eq!(terms.len(), 1);
/// assert_eq!(terms[0].to_string(), "0-");
/// ```
pub fn reduce<S: AsRef<str>>(minterms: &[S], num_inputs: usize) -> Vec<Term> {
    let reducer = Reducer::default();
    let terms: Vec<Term> = minterms
        .iter()
        .filter_map(|raw| match Term::parse(raw.as_ref(), num_inputs) {
            Ok(term) => Some(term),
            Err(err) => {
                warn!("Skipping invalid term: {}", err);
                None
            }
        })
        .collect();
    reducer.run_terms(terms, num_inputs).into_implicants()
}
