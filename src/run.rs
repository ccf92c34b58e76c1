//! Per-run state: lifecycle, counters, handles, and the terminal summary.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::event::{Counter, Outcome, StepKind};

/// Lifecycle of a run.
///
/// Steps are emitted only while `Running`. `Cancelled` is reachable from
/// `Running` only, at the first step boundary after the cancellation flag
/// is observed. Both terminal states return to `Idle` on explicit reset or
/// implicitly when a new run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Error returned by run control operations.
#[derive(Error, Debug)]
pub enum RunError {
    /// A run was started (or the runner reset) while another run was
    /// active. Cancel the active run first.
    #[error("a run is already active")]
    AlreadyRunning,

    /// The subscriber failed to accept an event.
    #[error("sink error: {0}")]
    Sink(#[from] anyhow::Error),
}

/// Monotonic per-run totals, shared between the runner and its handles.
#[derive(Debug, Default)]
pub struct Counters {
    comparisons: AtomicU64,
    moves: AtomicU64,
    visits: AtomicU64,
    steps: AtomicU64,
}

impl Counters {
    pub(crate) fn reset(&self) {
        self.comparisons.store(0, Ordering::SeqCst);
        self.moves.store(0, Ordering::SeqCst);
        self.visits.store(0, Ordering::SeqCst);
        self.steps.store(0, Ordering::SeqCst);
    }

    pub(crate) fn apply(&self, kind: &StepKind) {
        self.steps.fetch_add(1, Ordering::SeqCst);
        match kind.counter() {
            Counter::Comparisons => self.comparisons.fetch_add(1, Ordering::SeqCst),
            Counter::Moves => self.moves.fetch_add(1, Ordering::SeqCst),
            Counter::Visits => self.visits.fetch_add(1, Ordering::SeqCst),
            Counter::None => 0,
        };
    }

    /// A point-in-time copy of the totals.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons.load(Ordering::SeqCst),
            moves: self.moves.load(Ordering::SeqCst),
            visits: self.visits.load(Ordering::SeqCst),
            steps: self.steps.load(Ordering::SeqCst),
        }
    }
}

/// Frozen counter totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub comparisons: u64,
    pub moves: u64,
    pub visits: u64,
    pub steps: u64,
}

/// Terminal summary of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// `Completed` or `Cancelled`.
    pub state: RunState,
    /// Totals frozen at the last published step.
    pub counters: CounterSnapshot,
    /// The stepper's result; partial if the run was cancelled.
    pub outcome: Outcome,
}

/// Cloneable control surface for an in-flight run.
///
/// Lets a collaborator request cancellation and read live counters without
/// holding the runner itself.
#[derive(Debug, Clone)]
pub struct RunHandle {
    pub(crate) cancelled: Arc<AtomicBool>,
    pub(crate) counters: Arc<Counters>,
}

impl RunHandle {
    /// Request early termination. The run stops at the next step boundary;
    /// partial mutation stays visible as-is.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Live counter totals for the current or most recent run.
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_by_kind() {
        let counters = Counters::default();
        counters.apply(&StepKind::Compare { a: 0, b: 1 });
        counters.apply(&StepKind::Swap { a: 0, b: 1 });
        counters.apply(&StepKind::Visit {
            node: 0,
            discovered: vec![],
        });
        counters.apply(&StepKind::PivotSelected {
            index: 3,
            low: 0,
            high: 3,
        });

        let snap = counters.snapshot();
        assert_eq!(snap.comparisons, 1);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.visits, 1);
        // Informational events still count as steps.
        assert_eq!(snap.steps, 4);
    }

    #[test]
    fn handle_cancel_is_visible_through_clones() {
        let handle = RunHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
            counters: Arc::new(Counters::default()),
        };
        let other = handle.clone();
        other.cancel();
        assert!(handle.is_cancelled());
    }
}
