//! Heap operation steppers: insert, extract, build.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::structures::Heap;
use crate::stepper::Stepper;

fn parent_of(i: usize) -> usize {
    (i - 1) / 2
}

/// Pick the higher-priority child of `i`, if any children are in range.
fn choose_child(heap: &Heap, i: usize) -> Option<(usize, Option<usize>, usize)> {
    let len = heap.len();
    let left = 2 * i + 1;
    if left >= len {
        return None;
    }
    let right = 2 * i + 2;
    let (right, chosen) = if right < len {
        let items = heap.items();
        if heap.order().prefers(items[right], items[left]) {
            (Some(right), right)
        } else {
            (Some(right), left)
        }
    } else {
        (None, left)
    };
    Some((left, right, chosen))
}

/// Append then sift up; one step per parent/child comparison.
pub struct HeapInsert {
    heap: Heap,
    value: i64,
    idx: usize,
    appended: bool,
    done: bool,
}

impl HeapInsert {
    pub fn new(heap: Heap, value: i64) -> Self {
        Self {
            heap,
            value,
            idx: 0,
            appended: false,
            done: false,
        }
    }

    /// The heap in its current (possibly mid-sift) state.
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Recover the heap once stepping is finished.
    pub fn into_heap(self) -> Heap {
        self.heap
    }
}

impl Stepper for HeapInsert {
    fn next_event(&mut self) -> Option<StepEvent> {
        if !self.appended {
            self.appended = true;
            self.heap.items_mut().push(self.value);
            self.idx = self.heap.len() - 1;
            if self.idx == 0 {
                self.done = true;
            }
            return Some(StepEvent::new(
                StepKind::Append {
                    index: self.idx,
                    value: self.value,
                },
                format!("append {} at index {}", self.value, self.idx),
            ));
        }
        if self.done {
            return None;
        }
        let child = self.idx;
        let parent = parent_of(child);
        let items = self.heap.items();
        let swapped = self.heap.order().prefers(items[child], items[parent]);
        let event = StepEvent::new(
            StepKind::SiftUp {
                child,
                parent,
                swapped,
            },
            format!(
                "compare child a[{child}]={} with parent a[{parent}]={}",
                items[child], items[parent]
            ),
        );
        if swapped {
            self.heap.items_mut().swap(child, parent);
            self.idx = parent;
            if self.idx == 0 {
                self.done = true;
            }
        } else {
            self.done = true;
        }
        Some(event)
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Heap {
                items: self.heap.items().to_vec(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

enum ExtractPhase {
    Start,
    Sift,
    Done,
}

/// Remove the root: swap with the last element, pop, sift down.
///
/// One step per comparison triple. Extracting from an empty heap is a
/// guarded no-op that emits a single underflow event.
pub struct HeapExtract {
    heap: Heap,
    removed: Option<i64>,
    idx: usize,
    phase: ExtractPhase,
}

impl HeapExtract {
    pub fn new(heap: Heap) -> Self {
        Self {
            heap,
            removed: None,
            idx: 0,
            phase: ExtractPhase::Start,
        }
    }

    /// The heap in its current (possibly mid-sift) state.
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Recover the heap once stepping is finished.
    pub fn into_heap(self) -> Heap {
        self.heap
    }
}

impl Stepper for HeapExtract {
    fn next_event(&mut self) -> Option<StepEvent> {
        match self.phase {
            ExtractPhase::Start => {
                if self.heap.is_empty() {
                    self.phase = ExtractPhase::Done;
                    return Some(StepEvent::new(
                        StepKind::Underflow {
                            structure: "heap".to_string(),
                        },
                        "extract on an empty heap does nothing",
                    ));
                }
                let items = self.heap.items_mut();
                let value = items[0];
                let last = items.len() - 1;
                items.swap(0, last);
                items.pop();
                self.removed = Some(value);
                self.idx = 0;
                self.phase = ExtractPhase::Sift;
                Some(StepEvent::new(
                    StepKind::Extract { value },
                    format!("remove root {value}; last element moves to the root"),
                ))
            }
            ExtractPhase::Sift => {
                let Some((left, right, chosen)) = choose_child(&self.heap, self.idx) else {
                    self.phase = ExtractPhase::Done;
                    return None;
                };
                let parent = self.idx;
                let items = self.heap.items();
                let swapped = self.heap.order().prefers(items[chosen], items[parent]);
                let event = StepEvent::new(
                    StepKind::SiftDown {
                        parent,
                        left,
                        right,
                        chosen,
                        swapped,
                    },
                    format!(
                        "compare a[{parent}]={} with its children; best child a[{chosen}]={}",
                        items[parent], items[chosen]
                    ),
                );
                if swapped {
                    self.heap.items_mut().swap(parent, chosen);
                    self.idx = chosen;
                } else {
                    self.phase = ExtractPhase::Done;
                }
                Some(event)
            }
            ExtractPhase::Done => None,
        }
    }

    fn outcome(&self) -> Outcome {
        if matches!(self.phase, ExtractPhase::Done) {
            Outcome::Extracted {
                value: self.removed,
                items: self.heap.items().to_vec(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

/// Bottom-up build-heap: sift down every non-leaf from the last to the
/// root. One step per sift-down comparison.
pub struct HeapBuild {
    heap: Heap,
    node: Option<usize>,
    idx: usize,
    sifting: bool,
    done: bool,
}

impl HeapBuild {
    pub fn new(heap: Heap) -> Self {
        let node = (heap.len() / 2).checked_sub(1);
        Self {
            heap,
            node,
            idx: 0,
            sifting: false,
            done: node.is_none(),
        }
    }

    /// The heap in its current (possibly mid-build) state.
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Recover the heap once stepping is finished.
    pub fn into_heap(self) -> Heap {
        self.heap
    }

    fn advance_node(&mut self) {
        self.sifting = false;
        self.node = match self.node {
            Some(0) | None => {
                self.done = true;
                None
            }
            Some(n) => Some(n - 1),
        };
    }
}

impl Stepper for HeapBuild {
    fn next_event(&mut self) -> Option<StepEvent> {
        loop {
            if self.done {
                return None;
            }
            if !self.sifting {
                match self.node {
                    None => {
                        self.done = true;
                        return None;
                    }
                    Some(n) => {
                        self.idx = n;
                        self.sifting = true;
                    }
                }
            }
            let Some((left, right, chosen)) = choose_child(&self.heap, self.idx) else {
                self.advance_node();
                continue;
            };
            let parent = self.idx;
            let items = self.heap.items();
            let swapped = self.heap.order().prefers(items[chosen], items[parent]);
            let event = StepEvent::new(
                StepKind::SiftDown {
                    parent,
                    left,
                    right,
                    chosen,
                    swapped,
                },
                format!(
                    "sift down: compare a[{parent}]={} with best child a[{chosen}]={}",
                    items[parent], items[chosen]
                ),
            );
            if swapped {
                self.heap.items_mut().swap(parent, chosen);
                self.idx = chosen;
            } else {
                self.advance_node();
            }
            return Some(event);
        }
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Heap {
                items: self.heap.items().to_vec(),
            }
        } else {
            Outcome::InProgress
        }
    }
}
