//! Population-count groups for one merge generation

use std::collections::{BTreeSet, HashSet};

use crate::cover::Term;

/// The terms of one generation, grouped by population count
///
/// `groups[k]` holds the terms with exactly `k` ones. Each merge pass builds a
/// fresh generation; nothing is shared with the previous one except the terms
/// themselves, which are immutable.
#[derive(Debug, Clone)]
pub(crate) struct Generation {
    index: usize,
    groups: Vec<Vec<Term>>,
}

/// Result of one merge pass over a [`Generation`]
#[derive(Debug)]
pub(crate) struct MergePass {
    /// Merged terms, grouped for the following pass
    pub next: Generation,
    /// Terms of the current generation that took part in at least one merge
    pub absorbed: HashSet<Term>,
    /// Number of successful merges
    pub merges: usize,
}

impl Generation {
    /// Group generation-0 terms
    ///
    /// Duplicates are kept: the input is a list, not a set. Every term must be
    /// exactly `width` symbols long.
    pub(crate) fn initial(width: usize, terms: Vec<Term>) -> Self {
        let mut groups = vec![Vec::new(); width + 1];
        for term in terms {
            debug_assert_eq!(term.len(), width);
            groups[term.population_count()].push(term);
        }
        Generation { index: 0, groups }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn num_terms(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// All terms, lowest population count first
    pub(crate) fn terms(&self) -> impl Iterator<Item = &Term> {
        self.groups.iter().flatten()
    }

    /// Sizes of the non-empty groups as `(population count, size)`
    pub(crate) fn group_sizes(&self) -> Vec<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| !group.is_empty())
            .map(|(count, group)| (count, group.len()))
            .collect()
    }

    /// Try every pair across adjacent groups
    ///
    /// Merged terms are re-bucketed by their own population count and
    /// deduplicated within the next generation.
    pub(crate) fn merge_pass(&self) -> MergePass {
        let mut next: Vec<BTreeSet<Term>> = vec![BTreeSet::new(); self.groups.len()];
        let mut absorbed = HashSet::new();
        let mut merges = 0;

        for pair in self.groups.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for a in lower {
                for b in upper {
                    if let Some(merged) = a.try_merge(b) {
                        next[merged.population_count()].insert(merged);
                        absorbed.insert(a.clone());
                        absorbed.insert(b.clone());
                        merges += 1;
                    }
                }
            }
        }

        MergePass {
            next: Generation {
                index: self.index + 1,
                groups: next
                    .into_iter()
                    .map(|group| group.into_iter().collect())
                    .collect(),
            },
            absorbed,
            merges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<Term> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_initial_grouping() {
        let generation = Generation::initial(3, terms(&["000", "011", "101", "001", "001"]));
        assert_eq!(generation.index(), 0);
        assert_eq!(generation.num_terms(), 5);
        assert_eq!(generation.group_sizes(), vec![(0, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_empty_generation() {
        let generation = Generation::initial(4, Vec::new());
        assert!(generation.is_empty());
        let pass = generation.merge_pass();
        assert!(pass.next.is_empty());
        assert_eq!(pass.merges, 0);
    }

    #[test]
    fn test_merge_pass_marks_both_operands() {
        let generation = Generation::initial(2, terms(&["00", "01", "11"]));
        let pass = generation.merge_pass();

        assert_eq!(pass.merges, 2);
        assert_eq!(pass.absorbed.len(), 3);
        let next: Vec<String> = pass.next.terms().map(|t| t.to_string()).collect();
        assert_eq!(next, vec!["0-", "-1"]);
        assert_eq!(pass.next.index(), 1);
    }

    #[test]
    fn test_merge_pass_only_compares_adjacent_groups() {
        // 00 and 11 are two groups apart and differ in two positions anyway;
        // 0 ones vs 2 ones must never be compared
        let generation = Generation::initial(2, terms(&["00", "11"]));
        let pass = generation.merge_pass();
        assert_eq!(pass.merges, 0);
        assert!(pass.absorbed.is_empty());
    }

    #[test]
    fn test_next_generation_is_deduplicated() {
        let generation = Generation::initial(3, terms(&["00-", "01-", "0-0", "0-1"]));
        let pass = generation.merge_pass();
        let next: Vec<String> = pass.next.terms().map(|t| t.to_string()).collect();
        assert_eq!(next, vec!["0--"]);
        assert_eq!(pass.merges, 2);
    }
}
