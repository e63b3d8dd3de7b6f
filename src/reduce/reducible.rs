//! Reducible trait for Quine-McCluskey reduction
//!
//! This module provides the public [`Reducible`] trait, a uniform interface
//! for reducing anything that describes a single-output function into a
//! [`Cover`] of surviving implicants.

use super::Reducer;
use crate::cover::Cover;
use crate::error::ReduceError;
use crate::pla::PLATable;
use crate::ReduceConfig;

/// Public trait for types that can be reduced to a [`Cover`]
///
/// All methods take `&self` and return a new cover; the source is left
/// untouched.
///
/// ```
/// use qmc_logic::{PLAReader, PLATable, Reducible};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = PLATable::from_pla_string(".i 2\n.o 1\n00 1\n01 1\n11 0\n.e\n")?;
/// let cover = table.reduce()?;
///
/// assert_eq!(cover.num_terms(), 1);
/// assert_eq!(cover.terms()[0].to_string(), "0-");
/// # Ok(())
/// # }
/// ```
///
/// # Implementations
///
/// - **[`PLATable`]**: rows with output `1` are the minterms; malformed ones
///   are dropped unless the configuration is strict
/// - **[`Cover`]**: re-reduces the cover's own terms; a cover that is already
///   the result of a reduction comes back unchanged
pub trait Reducible {
    /// Reduce with an explicit configuration
    fn reduce_with_config(&self, config: &ReduceConfig) -> Result<Cover, ReduceError>;

    /// Reduce with the default configuration
    fn reduce(&self) -> Result<Cover, ReduceError> {
        self.reduce_with_config(&ReduceConfig::default())
    }
}

impl Reducible for PLATable {
    fn reduce_with_config(&self, config: &ReduceConfig) -> Result<Cover, ReduceError> {
        let minterms: Vec<&str> = self.minterms().collect();
        let reduction = Reducer::new(config.clone()).run(&minterms, self.num_inputs())?;
        Ok(reduction.into_cover(self.num_outputs()))
    }
}

impl Reducible for Cover {
    fn reduce_with_config(&self, config: &ReduceConfig) -> Result<Cover, ReduceError> {
        let reduction =
            Reducer::new(config.clone()).run_terms(self.terms().to_vec(), self.num_inputs());
        Ok(reduction.into_cover(self.num_outputs()))
    }
}
