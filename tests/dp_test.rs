//! Bottom-up DP steppers: one step per table cell, reproducible events.

use stepviz::{drain, Factorial, Fibonacci, InputError, Knapsack, Lcs, Outcome, StepKind, Stepper};

#[test]
fn test_fibonacci_fills_one_cell_per_step() {
    let mut fib = Fibonacci::new(10).unwrap();
    let events = drain(&mut fib);
    assert_eq!(events.len(), 11);
    assert_eq!(fib.outcome(), Outcome::Value { value: 55 });
    assert_eq!(fib.table(), &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
}

#[test]
fn test_fibonacci_events_carry_their_inputs() {
    let mut fib = Fibonacci::new(5).unwrap();
    let events = drain(&mut fib);
    match &events[5].kind {
        StepKind::Fill { value, inputs, .. } => {
            assert_eq!(*value, 5);
            assert_eq!(inputs, &[3, 2]);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn test_fibonacci_largest_representable() {
    let mut fib = Fibonacci::new(93).unwrap();
    drain(&mut fib);
    assert_eq!(
        fib.outcome(),
        Outcome::Value {
            value: 12_200_160_415_121_876_738
        }
    );
    assert!(matches!(
        Fibonacci::new(94),
        Err(InputError::OutOfRange { value: 94, max: 93 })
    ));
}

#[test]
fn test_factorial() {
    let mut fact = Factorial::new(5).unwrap();
    let events = drain(&mut fact);
    assert_eq!(events.len(), 6);
    assert_eq!(fact.outcome(), Outcome::Value { value: 120 });
    assert!(matches!(
        Factorial::new(21),
        Err(InputError::OutOfRange { value: 21, max: 20 })
    ));
}

#[test]
fn test_factorial_of_zero() {
    let mut fact = Factorial::new(0).unwrap();
    assert_eq!(drain(&mut fact).len(), 1);
    assert_eq!(fact.outcome(), Outcome::Value { value: 1 });
}

#[test]
fn test_knapsack_classic_instance() {
    let mut knapsack = Knapsack::new(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7).unwrap();
    let events = drain(&mut knapsack);
    // One step per recurrence cell: 4 items by capacities 0..=7.
    assert_eq!(events.len(), 4 * 8);
    assert_eq!(knapsack.outcome(), Outcome::Value { value: 9 });
}

#[test]
fn test_knapsack_records_skip_and_take_operands() {
    let mut knapsack = Knapsack::new(vec![2], vec![10], 3).unwrap();
    let events = drain(&mut knapsack);
    // Capacity 2 is the first cell where the item fits.
    match &events[2].kind {
        StepKind::Fill { value, inputs, .. } => {
            assert_eq!(*value, 10);
            assert_eq!(inputs, &[0, 10]);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn test_knapsack_mismatched_inputs_rejected() {
    assert!(matches!(
        Knapsack::new(vec![1, 2], vec![1], 5),
        Err(InputError::LengthMismatch { expected: 2, got: 1 })
    ));
}

#[test]
fn test_knapsack_with_no_items_completes_at_zero() {
    let mut knapsack = Knapsack::new(vec![], vec![], 4).unwrap();
    assert!(drain(&mut knapsack).is_empty());
    assert_eq!(knapsack.outcome(), Outcome::Value { value: 0 });
}

#[test]
fn test_lcs_classic_instance() {
    let mut lcs = Lcs::new("ABCBDAB", "BDCABA").unwrap();
    let events = drain(&mut lcs);
    assert_eq!(events.len(), 7 * 6);
    assert_eq!(lcs.outcome(), Outcome::Value { value: 4 });
}

#[test]
fn test_lcs_with_empty_string_is_zero() {
    let mut lcs = Lcs::new("", "ABC").unwrap();
    assert!(drain(&mut lcs).is_empty());
    assert_eq!(lcs.outcome(), Outcome::Value { value: 0 });
}
