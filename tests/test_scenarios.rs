//! End-to-end reduction scenarios
//!
//! Each test feeds a small PLA description through the reader, the reducer
//! and the writer, and checks the resulting implicant set.

use qmc_logic::*;

fn reduce_pla(pla: &str) -> Cover {
    PLATable::from_pla_string(pla)
        .expect("Failed to parse PLA")
        .reduce()
        .expect("Reduction failed")
}

fn term_strings(cover: &Cover) -> Vec<String> {
    cover.terms_iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_adjacent_pair_merges() {
    let cover = reduce_pla(".i 2\n.o 1\n00 1\n01 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["0-"]);
}

#[test]
fn test_distant_pair_does_not_merge() {
    let cover = reduce_pla(".i 2\n.o 1\n00 1\n11 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["00", "11"]);
}

#[test]
fn test_two_generation_merge() {
    let table = PLATable::from_pla_string(".i 3\n.o 1\n000 1\n001 1\n010 1\n011 1\n.e\n").unwrap();
    let minterms: Vec<&str> = table.minterms().collect();
    let reduction = Reducer::default().run(&minterms, 3).unwrap();

    let implicants: Vec<String> = reduction.implicants().iter().map(|t| t.to_string()).collect();
    assert_eq!(implicants, vec!["0--"]);
    assert_eq!(reduction.merging_passes(), 2);
}

#[test]
fn test_empty_function() {
    let cover = reduce_pla(".i 3\n.o 1\n000 0\n111 0\n.e\n");
    assert_eq!(cover.num_terms(), 0);
    assert_eq!(cover.to_pla_string().unwrap(), ".i 3\n.o 1\n.e\n");
}

#[test]
fn test_unmatched_term_survives() {
    let cover = reduce_pla(".i 3\n.o 1\n000 1\n001 1\n110 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["00-", "110"]);
}

#[test]
fn test_term_one_position_away_is_absorbed() {
    // 101 differs from 001 only in the first position, so both are absorbed
    let cover = reduce_pla(".i 3\n.o 1\n000 1\n001 1\n101 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["-01", "00-"]);
}

#[test]
fn test_survivors_from_different_generations() {
    // 0-- comes out of the second pass, 111 never merges
    let cover = reduce_pla(".i 3\n.o 1\n000 1\n001 1\n010 1\n011 1\n111 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["-11", "0--"]);
}

#[test]
fn test_classic_four_variable_example() {
    // f(a,b,c,d) = sum m(4, 8, 10, 11, 12, 15)
    let pla = ".i 4\n.o 1\n0100 1\n1000 1\n1010 1\n1011 1\n1100 1\n1111 1\n.e\n";
    let cover = reduce_pla(pla);
    assert_eq!(
        term_strings(&cover),
        vec!["-100", "1-00", "1-11", "10-0", "101-"]
    );
}

#[test]
fn test_output_zero_rows_are_ignored() {
    let cover = reduce_pla(".i 2\n.o 1\n00 1\n01 0\n11 1\n.e\n");
    assert_eq!(term_strings(&cover), vec!["00", "11"]);
}

#[test]
fn test_malformed_rows_degrade_gracefully() {
    let pla = ".i 3\n.o 1\n000 1\n001 1\n0011 1\n01x 1\n010\n.e\n";
    let cover = reduce_pla(pla);
    assert_eq!(term_strings(&cover), vec!["00-"]);
}

#[test]
fn test_multi_output_uses_literal_one() {
    // Only rows whose output token is exactly "1" are minterms
    let cover = reduce_pla(".i 2\n.o 2\n00 1\n01 1\n11 11\n.e\n");
    assert_eq!(cover.num_outputs(), 2);
    assert_eq!(term_strings(&cover), vec!["0-"]);
    assert_eq!(cover.to_pla_string().unwrap(), ".i 2\n.o 2\n0- 1\n.e\n");
}
