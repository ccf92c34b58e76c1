//! Replaying recorded events against a mirror sequence.
//!
//! Sequence-mutating event kinds carry enough detail to reapply their
//! mutation to a copy of the original input. Replaying a run's full log in
//! order therefore reconstructs every intermediate state, which is how a
//! rendering collaborator can scrub backwards and forwards without keeping
//! whole-structure snapshots.

use crate::event::{StepEvent, StepKind};

/// Apply one event's mutation to `seq`. Non-mutating kinds are no-ops.
pub fn apply(kind: &StepKind, seq: &mut Vec<i64>) {
    match *kind {
        StepKind::Swap { a, b } => seq.swap(a, b),
        StepKind::Shift { from, to, .. } => seq[to] = seq[from],
        StepKind::Place { index, value } => seq[index] = value,
        StepKind::Append { value, .. } => seq.push(value),
        StepKind::Extract { .. } => {
            if !seq.is_empty() {
                let last = seq.len() - 1;
                seq.swap(0, last);
                seq.pop();
            }
        }
        _ => {}
    }
}

/// Replay a full event log over a copy of the original sequence.
pub fn replay(events: &[StepEvent], original: &[i64]) -> Vec<i64> {
    let mut seq = original.to_vec();
    for event in events {
        apply(&event.kind, &mut seq);
    }
    seq
}
