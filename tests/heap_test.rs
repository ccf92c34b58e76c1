//! Heap-order invariant after insert, extract, and build.

use stepviz::{
    drain, Heap, HeapBuild, HeapExtract, HeapInsert, HeapOrder, Outcome, StepKind, Stepper,
};

#[test]
fn test_insert_restores_min_heap_order() {
    let heap = Heap::from_unordered(vec![1, 3, 2, 7, 4], HeapOrder::Min);
    assert!(heap.is_valid());
    let mut insert = HeapInsert::new(heap, 0);
    let events = drain(&mut insert);
    let heap = insert.into_heap();
    assert!(heap.is_valid());
    assert_eq!(heap.peek(), Some(0));
    // Append first, then one comparison per level climbed.
    assert!(matches!(events[0].kind, StepKind::Append { value: 0, .. }));
    assert!(events[1..]
        .iter()
        .all(|e| matches!(e.kind, StepKind::SiftUp { .. })));
}

#[test]
fn test_insert_into_empty_heap_needs_no_sift() {
    let mut insert = HeapInsert::new(Heap::new(HeapOrder::Max), 5);
    let events = drain(&mut insert);
    assert_eq!(events.len(), 1);
    assert_eq!(insert.outcome(), Outcome::Heap { items: vec![5] });
}

#[test]
fn test_extract_removes_the_root_and_restores_order() {
    let heap = Heap::from_unordered(vec![1, 3, 2, 7, 4], HeapOrder::Min);
    let mut extract = HeapExtract::new(heap);
    let events = drain(&mut extract);
    assert!(matches!(events[0].kind, StepKind::Extract { value: 1 }));
    match extract.outcome() {
        Outcome::Extracted { value, items } => {
            assert_eq!(value, Some(1));
            assert_eq!(items.len(), 4);
            assert!(Heap::from_unordered(items, HeapOrder::Min).is_valid());
        }
        other => panic!("extract finished with {other:?}"),
    }
}

#[test]
fn test_extract_on_empty_heap_is_a_guarded_noop() {
    let mut extract = HeapExtract::new(Heap::new(HeapOrder::Min));
    let events = drain(&mut extract);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0].kind, StepKind::Underflow { .. }));
    assert_eq!(
        extract.outcome(),
        Outcome::Extracted {
            value: None,
            items: vec![]
        }
    );
}

#[test]
fn test_build_heap_orders_an_arbitrary_sequence() {
    for order in [HeapOrder::Min, HeapOrder::Max] {
        let heap = Heap::from_unordered(vec![9, 4, 7, 1, -2, 6, 5, 2, 2], order);
        let mut build = HeapBuild::new(heap);
        let events = drain(&mut build);
        assert!(events
            .iter()
            .all(|e| matches!(e.kind, StepKind::SiftDown { .. })));
        let heap = build.into_heap();
        assert!(heap.is_valid(), "{order:?} build left an invalid heap");
        assert_eq!(heap.len(), 9);
    }
}

#[test]
fn test_build_on_tiny_heaps_completes_without_events() {
    for items in [vec![], vec![3]] {
        let mut build = HeapBuild::new(Heap::from_unordered(items.clone(), HeapOrder::Min));
        assert!(drain(&mut build).is_empty());
        assert_eq!(build.outcome(), Outcome::Heap { items });
    }
}

#[test]
fn test_repeated_extracts_drain_in_priority_order() {
    let mut heap = Heap::from_unordered(vec![5, 1, 4, 2, 3], HeapOrder::Min);
    let mut build = HeapBuild::new(heap);
    drain(&mut build);
    heap = build.into_heap();

    let mut drained = Vec::new();
    for _ in 0..5 {
        let mut extract = HeapExtract::new(heap);
        drain(&mut extract);
        match extract.outcome() {
            Outcome::Extracted { value, .. } => drained.push(value.unwrap()),
            other => panic!("unexpected {other:?}"),
        }
        heap = extract.into_heap();
    }
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}
