//! The driver that paces a stepper against a clock and a subscriber.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::run::{Counters, RunError, RunHandle, RunState, RunSummary};
use crate::sink::{NoopSink, StepSink};
use crate::speed::Speed;
use crate::stepper::Stepper;

/// Drives one stepper at a time: publish, pause, check cancellation.
///
/// Exactly one run may be active per runner. Starting a second run while
/// one is `Running` is rejected with [`RunError::AlreadyRunning`]; callers
/// that want to restart must cancel the active run first. Starting from a
/// terminal state implicitly returns the runner to `Idle` first.
pub struct Runner {
    sink: Arc<dyn StepSink>,
    speed: Speed,
    state: Arc<Mutex<RunState>>,
    cancelled: Arc<AtomicBool>,
    counters: Arc<Counters>,
}

impl Runner {
    /// Create a runner at the given speed with a discarding sink.
    pub fn new(speed: Speed) -> Self {
        Self {
            sink: Arc::new(NoopSink),
            speed,
            state: Arc::new(Mutex::new(RunState::Idle)),
            cancelled: Arc::new(AtomicBool::new(false)),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Set the subscriber that receives published events.
    pub fn with_sink(mut self, sink: Arc<dyn StepSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Change the speed used by subsequent runs.
    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// The speed in effect.
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// A cloneable handle for cancelling and observing the active run.
    pub fn handle(&self) -> RunHandle {
        RunHandle {
            cancelled: self.cancelled.clone(),
            counters: self.counters.clone(),
        }
    }

    /// The current lifecycle state.
    pub async fn state(&self) -> RunState {
        *self.state.lock().await
    }

    /// Return a terminal runner to `Idle`.
    ///
    /// Rejected while a run is active; cancel it first.
    pub async fn reset(&self) -> Result<(), RunError> {
        let mut state = self.state.lock().await;
        if *state == RunState::Running {
            return Err(RunError::AlreadyRunning);
        }
        *state = RunState::Idle;
        Ok(())
    }

    /// Drive `stepper` to completion or cancellation.
    ///
    /// Per step boundary: the event is counted and published, the runner
    /// sleeps for the speed-derived delay, then the cancellation flag is
    /// checked. Cancellation stops the run immediately; the stepper's
    /// partial mutation stays visible through `stepper` and the counters
    /// stay frozen at their last published values.
    pub async fn run<S: Stepper>(&self, stepper: &mut S) -> Result<RunSummary, RunError> {
        {
            let mut state = self.state.lock().await;
            if *state == RunState::Running {
                return Err(RunError::AlreadyRunning);
            }
            *state = RunState::Running;
        }
        self.cancelled.store(false, Ordering::SeqCst);
        self.counters.reset();

        let delay = self.speed.delay();
        info!(delay_ms = delay.as_millis() as u64, "starting run");

        let mut seq = 0u64;
        let final_state = loop {
            let Some(event) = stepper.next_event() else {
                break RunState::Completed;
            };
            seq += 1;
            self.counters.apply(&event.kind);
            debug!(seq, description = %event.description, "step");

            if let Err(e) = self.sink.publish(seq, &event).await {
                *self.state.lock().await = RunState::Idle;
                return Err(RunError::Sink(e));
            }

            tokio::time::sleep(delay).await;

            if self.cancelled.load(Ordering::SeqCst) {
                break RunState::Cancelled;
            }
        };

        *self.state.lock().await = final_state;
        let summary = RunSummary {
            state: final_state,
            counters: self.counters.snapshot(),
            outcome: stepper.outcome(),
        };
        info!(steps = seq, state = ?final_state, "run finished");
        Ok(summary)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}
