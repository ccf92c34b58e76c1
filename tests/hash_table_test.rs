//! Separate-chaining hash table scenario.

use stepviz::{drain, ChainedHashTable, HashInsert, Outcome, StepKind, Stepper};

#[test]
fn test_colliding_inserts_chain_in_insertion_order() {
    // 15, 25, 35 all hash to bucket 5 of a 10-bucket table.
    let table = ChainedHashTable::new(10).unwrap();
    let mut insert = HashInsert::new(table, vec![15, 25, 35]).unwrap();
    let events = drain(&mut insert);

    let chains: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::Bucket {
                bucket, chain_len, ..
            } => Some((bucket, chain_len)),
            _ => None,
        })
        .collect();
    assert_eq!(chains, vec![(5, 1), (5, 2), (5, 3)]);
    assert_eq!(insert.outcome(), Outcome::Done);

    let table = insert.into_table();
    assert_eq!(table.chain(5), &[15, 25, 35]);
    assert!((table.load_factor() - 0.3).abs() < f64::EPSILON);
    assert_eq!(table.max_chain_len(), 3);
}

#[test]
fn test_spread_inserts_touch_distinct_buckets() {
    let table = ChainedHashTable::new(7).unwrap();
    let mut insert = HashInsert::new(table, vec![0, 1, 2, 3]).unwrap();
    drain(&mut insert);
    let table = insert.into_table();
    assert_eq!(table.max_chain_len(), 1);
    assert_eq!(table.len(), 4);
}
