//! Linear and binary search laws and concrete probe scenarios.

use stepviz::{drain, BinarySearch, InputError, LinearSearch, Outcome, StepKind, Stepper};

#[test]
fn test_linear_search_returns_lowest_matching_index() {
    let seq = [4, 7, 2, 7, 9];
    let mut search = LinearSearch::new(&seq, 7).unwrap();
    let events = drain(&mut search);
    assert_eq!(search.outcome(), Outcome::FoundAt { index: 1 });
    // One step per element examined, stopping at the match.
    assert_eq!(events.len(), 2);
}

#[test]
fn test_linear_search_exhausts_on_miss() {
    let seq = [4, 7, 2];
    let mut search = LinearSearch::new(&seq, 5).unwrap();
    let events = drain(&mut search);
    assert_eq!(search.outcome(), Outcome::NotFound);
    assert_eq!(events.len(), 3);
}

#[test]
fn test_binary_search_probes_midpoints_3_5_4() {
    let seq = [1, 4, 7, 10, 13, 16, 19];
    let mut search = BinarySearch::new(&seq, 13).unwrap();
    let events = drain(&mut search);
    let mids: Vec<usize> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::Probe { mid, .. } => Some(mid),
            _ => None,
        })
        .collect();
    assert_eq!(mids, vec![3, 5, 4]);
    assert_eq!(search.outcome(), Outcome::FoundAt { index: 4 });
}

#[test]
fn test_binary_search_exhausts_interval_on_miss() {
    let seq = [1, 4, 7, 10, 13, 16, 19];
    let mut search = BinarySearch::new(&seq, 2).unwrap();
    drain(&mut search);
    assert_eq!(search.outcome(), Outcome::NotFound);
}

#[test]
fn test_binary_search_finds_first_and_last_positions() {
    let seq = [2, 3, 5, 8, 13];
    for (target, index) in [(2, 0), (13, 4)] {
        let mut search = BinarySearch::new(&seq, target).unwrap();
        drain(&mut search);
        assert_eq!(search.outcome(), Outcome::FoundAt { index });
    }
}

/// Sortedness is a precondition, not a checked property. On unsorted
/// input the answer may be wrong, but the run must still terminate.
#[test]
fn test_binary_search_on_unsorted_input_terminates() {
    let seq = [9, 1, 8, 2, 7];
    let mut search = BinarySearch::new(&seq, 2).unwrap();
    let events = drain(&mut search);
    assert!(events.len() <= seq.len());
    assert!(!matches!(search.outcome(), Outcome::InProgress));
}

#[test]
fn test_empty_sequence_rejected_before_running() {
    assert_eq!(
        LinearSearch::new(&[], 1).err(),
        Some(InputError::EmptySequence)
    );
    assert_eq!(
        BinarySearch::new(&[], 1).err(),
        Some(InputError::EmptySequence)
    );
}
