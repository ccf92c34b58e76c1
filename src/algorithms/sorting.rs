//! The five sort steppers.
//!
//! Each sort works over tagged elements: every input value is paired with
//! its original index, and comparisons look only at the value. The tag
//! order of equal values is how the stability of insertion and merge sort
//! is observable from outside.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::stepper::{InputError, Stepper};

/// A value paired with its original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Keyed {
    value: i64,
    tag: usize,
}

fn keyed(seq: &[i64]) -> Vec<Keyed> {
    seq.iter()
        .enumerate()
        .map(|(tag, &value)| Keyed { value, tag })
        .collect()
}

fn values(items: &[Keyed]) -> Vec<i64> {
    items.iter().map(|k| k.value).collect()
}

fn require_non_empty(seq: &[i64]) -> Result<(), InputError> {
    if seq.is_empty() {
        Err(InputError::EmptySequence)
    } else {
        Ok(())
    }
}

/// Bubble sort: adjacent compares, shrinking passes, no early exit.
///
/// One step per comparison; each swap is its own step immediately after
/// the comparison that triggered it.
pub struct BubbleSort {
    items: Vec<Keyed>,
    pass: usize,
    j: usize,
    pending_swap: Option<(usize, usize)>,
    done: bool,
}

impl BubbleSort {
    pub fn new(seq: &[i64]) -> Result<Self, InputError> {
        require_non_empty(seq)?;
        Ok(Self {
            items: keyed(seq),
            pass: 0,
            j: 0,
            pending_swap: None,
            done: seq.len() < 2,
        })
    }

    /// The working sequence in its current order.
    pub fn sequence(&self) -> Vec<i64> {
        values(&self.items)
    }

    /// Original positions of the elements in their current order.
    pub fn tags(&self) -> Vec<usize> {
        self.items.iter().map(|k| k.tag).collect()
    }
}

impl Stepper for BubbleSort {
    fn next_event(&mut self) -> Option<StepEvent> {
        if let Some((a, b)) = self.pending_swap.take() {
            self.items.swap(a, b);
            return Some(StepEvent::new(
                StepKind::Swap { a, b },
                format!("swap a[{a}] and a[{b}]"),
            ));
        }
        if self.done {
            return None;
        }
        let n = self.items.len();
        let (a, b) = (self.j, self.j + 1);
        let event = StepEvent::new(
            StepKind::Compare { a, b },
            format!(
                "compare a[{a}]={} with a[{b}]={}",
                self.items[a].value, self.items[b].value
            ),
        );
        if self.items[a].value > self.items[b].value {
            self.pending_swap = Some((a, b));
        }
        self.j += 1;
        if self.j == n - 1 - self.pass {
            self.j = 0;
            self.pass += 1;
            if self.pass == n - 1 {
                self.done = true;
            }
        }
        Some(event)
    }

    fn outcome(&self) -> Outcome {
        if self.done && self.pending_swap.is_none() {
            Outcome::Sorted {
                sequence: self.sequence(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

/// Selection sort: find the minimum of the unsorted suffix, swap it in.
pub struct SelectionSort {
    items: Vec<Keyed>,
    i: usize,
    j: usize,
    min: usize,
    pending_swap: Option<(usize, usize)>,
    done: bool,
}

impl SelectionSort {
    pub fn new(seq: &[i64]) -> Result<Self, InputError> {
        require_non_empty(seq)?;
        Ok(Self {
            items: keyed(seq),
            i: 0,
            j: 1,
            min: 0,
            pending_swap: None,
            done: seq.len() < 2,
        })
    }

    /// The working sequence in its current order.
    pub fn sequence(&self) -> Vec<i64> {
        values(&self.items)
    }

    /// Original positions of the elements in their current order.
    pub fn tags(&self) -> Vec<usize> {
        self.items.iter().map(|k| k.tag).collect()
    }
}

impl Stepper for SelectionSort {
    fn next_event(&mut self) -> Option<StepEvent> {
        if let Some((a, b)) = self.pending_swap.take() {
            self.items.swap(a, b);
            return Some(StepEvent::new(
                StepKind::Swap { a, b },
                format!("swap a[{a}] into position {a}"),
            ));
        }
        if self.done {
            return None;
        }
        let n = self.items.len();
        let (a, b) = (self.j, self.min);
        let event = StepEvent::new(
            StepKind::Compare { a, b },
            format!(
                "compare a[{a}]={} with current minimum a[{b}]={}",
                self.items[a].value, self.items[b].value
            ),
        );
        if self.items[a].value < self.items[b].value {
            self.min = a;
        }
        self.j += 1;
        if self.j == n {
            if self.min != self.i {
                self.pending_swap = Some((self.i, self.min));
            }
            self.i += 1;
            self.min = self.i;
            self.j = self.i + 1;
            if self.i == n - 1 {
                self.done = true;
            }
        }
        Some(event)
    }

    fn outcome(&self) -> Outcome {
        if self.done && self.pending_swap.is_none() {
            Outcome::Sorted {
                sequence: self.sequence(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

enum InsertionPhase {
    Compare,
    Shift,
    Place,
}

/// Insertion sort: grow a sorted prefix, shifting greater elements right.
///
/// Stable: shifting stops at the first element not greater than the key,
/// so equal elements never pass each other.
pub struct InsertionSort {
    items: Vec<Keyed>,
    i: usize,
    j: usize,
    key: Keyed,
    phase: InsertionPhase,
    done: bool,
}

impl InsertionSort {
    pub fn new(seq: &[i64]) -> Result<Self, InputError> {
        require_non_empty(seq)?;
        let items = keyed(seq);
        let done = items.len() < 2;
        // First pass inserts items[1] into the one-element sorted prefix.
        let key = if done { items[0] } else { items[1] };
        Ok(Self {
            items,
            i: 1,
            j: 1,
            key,
            phase: InsertionPhase::Compare,
            done,
        })
    }

    /// The working sequence in its current order.
    pub fn sequence(&self) -> Vec<i64> {
        values(&self.items)
    }

    /// Original positions of the elements in their current order.
    pub fn tags(&self) -> Vec<usize> {
        self.items.iter().map(|k| k.tag).collect()
    }

    fn begin_pass(&mut self) {
        self.key = self.items[self.i];
        self.j = self.i;
        self.phase = InsertionPhase::Compare;
    }
}

impl Stepper for InsertionSort {
    fn next_event(&mut self) -> Option<StepEvent> {
        loop {
            if self.done {
                return None;
            }
            match self.phase {
                InsertionPhase::Compare => {
                    if self.j == 0 {
                        self.phase = InsertionPhase::Place;
                        continue;
                    }
                    let left = self.j - 1;
                    // The key's logical slot is j: shifts have opened that
                    // hole, so a renderer highlights where the key would land.
                    let event = StepEvent::new(
                        StepKind::Compare {
                            a: left,
                            b: self.j,
                        },
                        format!(
                            "compare a[{left}]={} with key {}",
                            self.items[left].value, self.key.value
                        ),
                    );
                    self.phase = if self.items[left].value > self.key.value {
                        InsertionPhase::Shift
                    } else {
                        InsertionPhase::Place
                    };
                    return Some(event);
                }
                InsertionPhase::Shift => {
                    let from = self.j - 1;
                    let to = self.j;
                    self.items[to] = self.items[from];
                    let value = self.items[to].value;
                    self.j -= 1;
                    self.phase = InsertionPhase::Compare;
                    return Some(StepEvent::new(
                        StepKind::Shift { from, to, value },
                        format!("shift {value} right to a[{to}]"),
                    ));
                }
                InsertionPhase::Place => {
                    let index = self.j;
                    let moved = index != self.i;
                    let value = self.key.value;
                    self.items[index] = self.key;
                    self.i += 1;
                    if self.i == self.items.len() {
                        self.done = true;
                    } else {
                        self.begin_pass();
                    }
                    if moved {
                        return Some(StepEvent::new(
                            StepKind::Place { index, value },
                            format!("place key {value} at a[{index}]"),
                        ));
                    }
                    // Key already in position: nothing observable happened.
                    continue;
                }
            }
        }
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Sorted {
                sequence: self.sequence(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

enum MergeFrame {
    Sort { low: usize, high: usize },
    Merge { low: usize, mid: usize, high: usize },
}

struct MergeState {
    low: usize,
    mid: usize,
    left: Vec<Keyed>,
    right: Vec<Keyed>,
    i: usize,
    j: usize,
    k: usize,
    compared: bool,
}

/// Merge sort with an explicit frame stack instead of recursion.
///
/// `Divide` events are informational (nothing moves); one step per merge
/// comparison, one per placement. Ties take the left run, so the sort is
/// stable.
pub struct MergeSort {
    items: Vec<Keyed>,
    stack: Vec<MergeFrame>,
    merge: Option<MergeState>,
    done: bool,
}

impl MergeSort {
    pub fn new(seq: &[i64]) -> Result<Self, InputError> {
        require_non_empty(seq)?;
        let items = keyed(seq);
        let stack = if items.len() > 1 {
            vec![MergeFrame::Sort {
                low: 0,
                high: items.len() - 1,
            }]
        } else {
            Vec::new()
        };
        Ok(Self {
            done: stack.is_empty(),
            items,
            stack,
            merge: None,
        })
    }

    /// The working sequence in its current order.
    pub fn sequence(&self) -> Vec<i64> {
        values(&self.items)
    }

    /// Original positions of the elements in their current order.
    pub fn tags(&self) -> Vec<usize> {
        self.items.iter().map(|k| k.tag).collect()
    }
}

fn merge_place(items: &mut [Keyed], state: &mut MergeState, item: Keyed) -> StepEvent {
    let index = state.k;
    items[index] = item;
    state.k += 1;
    state.compared = false;
    StepEvent::new(
        StepKind::Place {
            index,
            value: item.value,
        },
        format!("place {} at a[{index}]", item.value),
    )
}

impl Stepper for MergeSort {
    fn next_event(&mut self) -> Option<StepEvent> {
        loop {
            if let Some(state) = self.merge.as_mut() {
                if state.i < state.left.len() && state.j < state.right.len() {
                    let (li, rj) = (state.i, state.j);
                    let (a, b) = (state.low + li, state.mid + 1 + rj);
                    if !state.compared {
                        state.compared = true;
                        return Some(StepEvent::new(
                            StepKind::Compare { a, b },
                            format!(
                                "compare {} (left) with {} (right)",
                                state.left[li].value, state.right[rj].value
                            ),
                        ));
                    }
                    // Ties take the left run to preserve stability.
                    let item = if state.left[li].value <= state.right[rj].value {
                        state.i += 1;
                        state.left[li]
                    } else {
                        state.j += 1;
                        state.right[rj]
                    };
                    return Some(merge_place(&mut self.items, state, item));
                }
                if state.i < state.left.len() {
                    let item = state.left[state.i];
                    state.i += 1;
                    return Some(merge_place(&mut self.items, state, item));
                }
                if state.j < state.right.len() {
                    let item = state.right[state.j];
                    state.j += 1;
                    return Some(merge_place(&mut self.items, state, item));
                }
                self.merge = None;
                continue;
            }
            match self.stack.pop() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(MergeFrame::Sort { low, high }) => {
                    if low >= high {
                        continue;
                    }
                    let mid = (low + high) / 2;
                    self.stack.push(MergeFrame::Merge { low, mid, high });
                    self.stack.push(MergeFrame::Sort {
                        low: mid + 1,
                        high,
                    });
                    self.stack.push(MergeFrame::Sort { low, high: mid });
                    return Some(StepEvent::new(
                        StepKind::Divide { low, mid, high },
                        format!("divide [{low}, {high}] at {mid}"),
                    ));
                }
                Some(MergeFrame::Merge { low, mid, high }) => {
                    self.merge = Some(MergeState {
                        low,
                        mid,
                        left: self.items[low..=mid].to_vec(),
                        right: self.items[mid + 1..=high].to_vec(),
                        i: 0,
                        j: 0,
                        k: low,
                        compared: false,
                    });
                    continue;
                }
            }
        }
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Sorted {
                sequence: self.sequence(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

struct Partition {
    low: usize,
    high: usize,
    i: usize,
    j: usize,
}

enum PendingSwap {
    /// Mid-scan swap; scanning resumes afterwards.
    Scan(usize, usize),
    /// Pivot placement; the partition closes afterwards.
    Pivot(usize, usize),
}

/// Quick sort, Lomuto partition, last element as pivot.
///
/// Recursion is an explicit work stack of `(low, high)` ranges, keeping the
/// suspension model uniform with the iterative sorts and bounding stack
/// depth. Each partition opens with a distinguished pivot-selected event.
pub struct QuickSort {
    items: Vec<Keyed>,
    ranges: Vec<(usize, usize)>,
    part: Option<Partition>,
    pending: Option<PendingSwap>,
    done: bool,
}

impl QuickSort {
    pub fn new(seq: &[i64]) -> Result<Self, InputError> {
        require_non_empty(seq)?;
        let items = keyed(seq);
        let ranges = if items.len() > 1 {
            vec![(0, items.len() - 1)]
        } else {
            Vec::new()
        };
        Ok(Self {
            done: ranges.is_empty(),
            items,
            ranges,
            part: None,
            pending: None,
        })
    }

    /// The working sequence in its current order.
    pub fn sequence(&self) -> Vec<i64> {
        values(&self.items)
    }

    /// Original positions of the elements in their current order.
    pub fn tags(&self) -> Vec<usize> {
        self.items.iter().map(|k| k.tag).collect()
    }

    /// Close the active partition with the pivot settled at `pivot_index`,
    /// queueing both sub-ranges.
    fn close_partition(&mut self, pivot_index: usize) {
        if let Some(part) = self.part.take() {
            if pivot_index + 1 < part.high {
                self.ranges.push((pivot_index + 1, part.high));
            }
            if pivot_index > part.low {
                self.ranges.push((part.low, pivot_index - 1));
            }
        }
    }
}

impl Stepper for QuickSort {
    fn next_event(&mut self) -> Option<StepEvent> {
        loop {
            if let Some(pending) = self.pending.take() {
                let (a, b) = match pending {
                    PendingSwap::Scan(a, b) => (a, b),
                    PendingSwap::Pivot(a, b) => {
                        self.items.swap(a, b);
                        self.close_partition(a);
                        return Some(StepEvent::new(
                            StepKind::Swap { a, b },
                            format!("move pivot into place at a[{a}]"),
                        ));
                    }
                };
                self.items.swap(a, b);
                return Some(StepEvent::new(
                    StepKind::Swap { a, b },
                    format!("swap a[{a}] and a[{b}]"),
                ));
            }
            if let Some(part) = self.part.as_mut() {
                if part.j < part.high {
                    let (a, b) = (part.j, part.high);
                    let event = StepEvent::new(
                        StepKind::Compare { a, b },
                        format!(
                            "compare a[{a}]={} with pivot {}",
                            self.items[a].value, self.items[b].value
                        ),
                    );
                    if self.items[a].value <= self.items[b].value {
                        if part.i != part.j {
                            self.pending = Some(PendingSwap::Scan(part.i, part.j));
                        }
                        part.i += 1;
                    }
                    part.j += 1;
                    return Some(event);
                }
                let (i, high) = (part.i, part.high);
                if i != high {
                    self.pending = Some(PendingSwap::Pivot(i, high));
                    continue;
                }
                // Pivot already in place; no observable move.
                self.close_partition(high);
                continue;
            }
            match self.ranges.pop() {
                None => {
                    self.done = true;
                    return None;
                }
                Some((low, high)) => {
                    if low >= high {
                        continue;
                    }
                    self.part = Some(Partition {
                        low,
                        high,
                        i: low,
                        j: low,
                    });
                    return Some(StepEvent::new(
                        StepKind::PivotSelected {
                            index: high,
                            low,
                            high,
                        },
                        format!(
                            "select pivot a[{high}]={} for [{low}, {high}]",
                            self.items[high].value
                        ),
                    ));
                }
            }
        }
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Sorted {
                sequence: self.sequence(),
            }
        } else {
            Outcome::InProgress
        }
    }
}
