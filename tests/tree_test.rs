//! BST traversal laws.

use stepviz::{drain, Bst, BstTraversal, Outcome, StepKind, Stepper, TraversalOrder};

const INSERTION_ORDERS: &[&[i64]] = &[
    &[8, 3, 10, 1, 6, 14, 4, 7, 13],
    &[1, 2, 3, 4, 5],
    &[5, 4, 3, 2, 1],
    &[7, 7, 3, 7],
];

fn traverse(values: &[i64], order: TraversalOrder) -> Vec<i64> {
    let bst = Bst::from_values(values);
    let mut stepper = BstTraversal::new(&bst, order);
    drain(&mut stepper);
    match stepper.outcome() {
        Outcome::Traversal { values } => values,
        other => panic!("traversal ended with {other:?}"),
    }
}

#[test]
fn test_inorder_is_always_non_decreasing() {
    for values in INSERTION_ORDERS {
        let inorder = traverse(values, TraversalOrder::Inorder);
        assert!(
            inorder.windows(2).all(|w| w[0] <= w[1]),
            "inorder of {values:?} was {inorder:?}"
        );
        assert_eq!(inorder.len(), values.len());
    }
}

#[test]
fn test_preorder_lists_root_first() {
    for values in INSERTION_ORDERS {
        let preorder = traverse(values, TraversalOrder::Preorder);
        assert_eq!(preorder[0], values[0]);
    }
}

#[test]
fn test_postorder_lists_root_last() {
    for values in INSERTION_ORDERS {
        let postorder = traverse(values, TraversalOrder::Postorder);
        assert_eq!(*postorder.last().unwrap(), values[0]);
    }
}

#[test]
fn test_level_order_groups_by_depth() {
    let bst = Bst::from_values(&[8, 3, 10, 1, 6, 14]);
    let mut stepper = BstTraversal::new(&bst, TraversalOrder::LevelOrder);
    let events = drain(&mut stepper);
    let depths: Vec<usize> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::Yield { depth, .. } => Some(depth),
            _ => None,
        })
        .collect();
    // Depths never decrease: each level is fully listed before the next.
    assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(depths[0], 0);
}

#[test]
fn test_traversal_replays_one_value_per_step() {
    let bst = Bst::from_values(&[2, 1, 3]);
    let mut stepper = BstTraversal::new(&bst, TraversalOrder::Inorder);
    let events = drain(&mut stepper);
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0].kind,
        StepKind::Yield { value: 1, depth: 1 }
    ));
}

#[test]
fn test_empty_tree_completes_immediately() {
    let bst = Bst::new();
    let mut stepper = BstTraversal::new(&bst, TraversalOrder::Inorder);
    assert!(drain(&mut stepper).is_empty());
    assert_eq!(stepper.outcome(), Outcome::Traversal { values: vec![] });
}
