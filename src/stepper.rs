//! The stepper trait and input validation errors.

use thiserror::Error;

use crate::event::{Outcome, StepEvent};

/// Error rejecting malformed input before a run starts.
///
/// All validation happens at stepper construction; a constructed stepper
/// never fails mid-run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The working sequence had no elements.
    #[error("sequence is empty")]
    EmptySequence,

    /// A node id did not exist in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(usize),

    /// The graph had no nodes.
    #[error("graph is empty")]
    EmptyGraph,

    /// A trie operation was given an empty word.
    #[error("word is empty")]
    EmptyWord,

    /// A recurrence argument exceeded the largest representable input.
    #[error("value {value} out of range (max {max})")]
    OutOfRange { value: u64, max: u64 },

    /// Knapsack weights and values had different lengths.
    #[error("expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A hash table was created with zero buckets.
    #[error("bucket count must be at least 1")]
    NoBuckets,
}

/// A lazily evaluated, finite sequence of step events.
///
/// A stepper is the algorithm half of a visualization: it owns its working
/// data and advances exactly one observable step per [`next_event`] call.
/// The mutation a step describes and the event describing it are applied
/// together; there is no way to observe one without the other.
///
/// Steppers are not restartable. To run the same algorithm again, build a
/// fresh stepper from fresh input.
///
/// [`next_event`]: Stepper::next_event
pub trait Stepper {
    /// Advance one step, returning its event, or `None` once finished.
    fn next_event(&mut self) -> Option<StepEvent>;

    /// The result so far: [`Outcome::InProgress`] until the last event has
    /// been produced, then the terminal result.
    ///
    /// [`Outcome::InProgress`]: crate::Outcome::InProgress
    fn outcome(&self) -> Outcome;
}

/// Drain a stepper to completion, collecting every event.
///
/// Used by tests and by hosts that want the full script without pacing.
pub fn drain(stepper: &mut dyn Stepper) -> Vec<StepEvent> {
    let mut events = Vec::new();
    while let Some(event) = stepper.next_event() {
        events.push(event);
    }
    events
}
