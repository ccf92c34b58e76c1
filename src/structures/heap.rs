//! Binary heap over a sequence, min- or max-ordered.

use serde::Serialize;

/// Heap comparator direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    /// Whether `a` has strictly higher priority than `b` under this order.
    pub fn prefers(&self, a: i64, b: i64) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }
}

/// A sequence interpreted as a complete binary tree via index arithmetic:
/// parent at `(i - 1) / 2`, children at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct Heap {
    items: Vec<i64>,
    order: HeapOrder,
}

impl Heap {
    /// Create an empty heap.
    pub fn new(order: HeapOrder) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Adopt an arbitrary sequence without restoring heap order.
    ///
    /// The result may violate the heap invariant; it is the starting state
    /// for the build-heap stepper.
    pub fn from_unordered(items: Vec<i64>, order: HeapOrder) -> Self {
        Self { items, order }
    }

    /// The comparator direction.
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// The backing sequence.
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    /// The highest-priority element, if any.
    pub fn peek(&self) -> Option<i64> {
        self.items.first().copied()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the heap-order invariant holds at every parent.
    pub fn is_valid(&self) -> bool {
        (0..self.items.len()).all(|i| {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let parent_ok = |c: usize| {
                c >= self.items.len() || !self.order.prefers(self.items[c], self.items[i])
            };
            parent_ok(left) && parent_ok(right)
        })
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<i64> {
        &mut self.items
    }
}
