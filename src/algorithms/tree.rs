//! BST traversal replay stepper.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::structures::{Bst, TraversalOrder};
use crate::stepper::Stepper;

/// Replays a traversal one element per step.
///
/// The order is computed eagerly from the tree at construction; the
/// stepping is purely animation, not an incremental traversal. An empty
/// tree completes immediately with an empty traversal.
pub struct BstTraversal {
    order: TraversalOrder,
    items: Vec<(i64, usize)>,
    pos: usize,
}

impl BstTraversal {
    pub fn new(bst: &Bst, order: TraversalOrder) -> Self {
        Self {
            order,
            items: bst.traverse(order),
            pos: 0,
        }
    }

    /// Which traversal is being replayed.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl Stepper for BstTraversal {
    fn next_event(&mut self) -> Option<StepEvent> {
        let &(value, depth) = self.items.get(self.pos)?;
        self.pos += 1;
        Some(StepEvent::new(
            StepKind::Yield { value, depth },
            format!("yield {value} (depth {depth})"),
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.pos == self.items.len() {
            Outcome::Traversal {
                values: self.items.iter().map(|&(v, _)| v).collect(),
            }
        } else {
            Outcome::InProgress
        }
    }
}
