//! Step events: the typed, diff-like records published at every pause point.

use serde::Serialize;

/// Which run counter an event contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    /// Comparison-type events (element vs element, element vs target).
    Comparisons,
    /// Mutation-type events (swaps, shifts, placements, removals).
    Moves,
    /// Visit-type events (node finalized, character consumed, cell filled).
    Visits,
    /// Informational events that count toward no total.
    None,
}

/// One edge relaxation performed while finalizing a node in Dijkstra.
///
/// Relaxations are step-adjacent: they ride along on the finalize event
/// rather than pausing the run on their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relaxation {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
    /// Candidate distance through `from`.
    pub distance: u64,
    /// Whether the candidate improved the previous best.
    pub improved: bool,
}

/// What changed at one step boundary.
///
/// Every variant names the indices, nodes, or cells involved so a rendering
/// collaborator can redraw exactly the affected region instead of the whole
/// structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// Linear search examined one element.
    Examine { index: usize, value: i64 },
    /// Binary search evaluated the midpoint of `[low, high]`.
    Probe {
        low: usize,
        high: usize,
        mid: usize,
        value: i64,
    },
    /// Two sequence elements were compared.
    Compare { a: usize, b: usize },
    /// Two sequence elements were exchanged.
    Swap { a: usize, b: usize },
    /// An element was copied one slot over (insertion sort shift).
    Shift { from: usize, to: usize, value: i64 },
    /// A value was written into a slot (insertion place, merge write-back).
    Place { index: usize, value: i64 },
    /// Merge sort split a range. Informational only; nothing moved.
    Divide { low: usize, mid: usize, high: usize },
    /// Quick sort chose a pivot for the range `[low, high]`.
    PivotSelected { index: usize, low: usize, high: usize },
    /// A traversal reached a graph node. `discovered` lists the edges
    /// traversed for the first time while scanning its neighbors, as
    /// `(edge index, from, to)` triples.
    Visit {
        node: usize,
        discovered: Vec<(usize, usize, usize)>,
    },
    /// Dijkstra finalized a node at its shortest known distance.
    FinalizeNode {
        node: usize,
        distance: u64,
        relaxations: Vec<Relaxation>,
    },
    /// A precomputed traversal yielded its next element.
    Yield { value: i64, depth: usize },
    /// A value was appended at the end of the sequence (heap insert).
    Append { index: usize, value: i64 },
    /// The heap root was removed: root and last element exchanged, then
    /// the last slot popped.
    Extract { value: i64 },
    /// Sift-up compared a child against its parent, swapping on violation.
    SiftUp {
        child: usize,
        parent: usize,
        swapped: bool,
    },
    /// Sift-down compared a parent against its children and descended
    /// toward `chosen` when the order was violated.
    SiftDown {
        parent: usize,
        left: usize,
        right: Option<usize>,
        chosen: usize,
        swapped: bool,
    },
    /// An operation on an empty structure was skipped.
    Underflow { structure: String },
    /// A trie walk consumed one character, creating the node if absent.
    Advance { ch: char, created: bool },
    /// A trie search failed to advance on this character.
    Miss { ch: char },
    /// A dynamic-programming table cell was filled. `inputs` are the
    /// recurrence operands the value was derived from.
    Fill {
        row: usize,
        col: usize,
        value: u64,
        inputs: Vec<u64>,
    },
    /// A key was hashed into a bucket and appended to its chain.
    Bucket {
        key: i64,
        bucket: usize,
        chain_len: usize,
    },
}

impl StepKind {
    /// The counter this event accumulates into.
    pub fn counter(&self) -> Counter {
        match self {
            Self::Examine { .. }
            | Self::Probe { .. }
            | Self::Compare { .. }
            | Self::SiftUp { .. }
            | Self::SiftDown { .. } => Counter::Comparisons,
            Self::Swap { .. }
            | Self::Shift { .. }
            | Self::Place { .. }
            | Self::Append { .. }
            | Self::Extract { .. } => Counter::Moves,
            Self::Visit { .. }
            | Self::FinalizeNode { .. }
            | Self::Yield { .. }
            | Self::Advance { .. }
            | Self::Miss { .. }
            | Self::Fill { .. }
            | Self::Bucket { .. } => Counter::Visits,
            Self::Divide { .. } | Self::PivotSelected { .. } | Self::Underflow { .. } => {
                Counter::None
            }
        }
    }
}

/// An immutable snapshot of one observable unit of algorithmic progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEvent {
    pub kind: StepKind,
    /// Human-readable description, suitable for a status log.
    pub description: String,
}

impl StepEvent {
    /// Create an event from a kind and a log line.
    pub fn new(kind: StepKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// The terminal result of a run, partial until the stepper is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The stepper has not produced its last event yet.
    InProgress,
    /// The operation finished with nothing further to report.
    Done,
    /// A search located the target at this index.
    FoundAt { index: usize },
    /// A search exhausted its input without a match.
    NotFound,
    /// A sort finished with this sequence.
    Sorted { sequence: Vec<i64> },
    /// A traversal visited graph nodes in this order.
    VisitOrder { nodes: Vec<usize> },
    /// Shortest distances from `source`; `None` marks unreachable nodes.
    Distances {
        source: usize,
        distances: Vec<Option<u64>>,
    },
    /// A tree traversal yielded values in this order.
    Traversal { values: Vec<i64> },
    /// A heap operation finished with these items.
    Heap { items: Vec<i64> },
    /// A heap extract removed this value (`None` on underflow).
    Extracted { value: Option<i64>, items: Vec<i64> },
    /// Whether a trie search found the whole word.
    Present { found: bool },
    /// A computed scalar (DP recurrences).
    Value { value: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_classification() {
        assert_eq!(StepKind::Compare { a: 0, b: 1 }.counter(), Counter::Comparisons);
        assert_eq!(StepKind::Swap { a: 0, b: 1 }.counter(), Counter::Moves);
        assert_eq!(
            StepKind::Yield { value: 3, depth: 0 }.counter(),
            Counter::Visits
        );
        assert_eq!(
            StepKind::Divide {
                low: 0,
                mid: 1,
                high: 3
            }
            .counter(),
            Counter::None
        );
    }

    #[test]
    fn events_serialize_with_tagged_kind() {
        let event = StepEvent::new(StepKind::Swap { a: 0, b: 2 }, "swap a[0] and a[2]");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["type"], "swap");
        assert_eq!(json["kind"]["a"], 0);
        assert_eq!(json["description"], "swap a[0] and a[2]");
    }
}
