//! Basic usage example for the stepviz engine.
//!
//! This example demonstrates:
//! - Building a stepper for a sorting algorithm
//! - Writing a custom StepSink that renders each published event
//! - Pacing a run with a Speed setting
//! - Cancelling a run partway through with a RunHandle
//! - Reading the terminal summary (state, counters, outcome)
//!
//! Run with `RUST_LOG=stepviz=debug` to see the runner's per-step tracing
//! alongside the sink output.

use async_trait::async_trait;
use std::sync::Arc;
use stepviz::{
    BubbleSort, LinearSearch, RunHandle, RunState, Runner, Speed, StepEvent, StepSink,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A sink that prints every published event to stdout.
///
/// In a real frontend this is where each event would be turned into an
/// animation frame; here we just show the sequence number and the
/// human-readable description the stepper attached.
struct ConsoleSink;

#[async_trait]
impl StepSink for ConsoleSink {
    async fn publish(&self, seq: u64, event: &StepEvent) -> anyhow::Result<()> {
        println!("  step {seq:>3}: {}", event.description);
        Ok(())
    }
}

/// A sink that prints events and cancels the run after a fixed number.
struct ImpatientSink {
    handle: RunHandle,
    limit: u64,
}

#[async_trait]
impl StepSink for ImpatientSink {
    async fn publish(&self, seq: u64, event: &StepEvent) -> anyhow::Result<()> {
        println!("  step {seq:>3}: {}", event.description);
        if seq == self.limit {
            println!("  (requesting cancellation)");
            self.handle.cancel();
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepviz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== stepviz - Basic Example ===\n");

    // Example 1: Sort a small sequence at maximum speed and watch every
    // comparison and swap go by.
    println!("--- Example 1: Bubble sort, run to completion ---");
    let runner = Runner::new(Speed::MAX).with_sink(Arc::new(ConsoleSink));

    let mut sort = BubbleSort::new(&[5, 3, 8, 1])?;
    let summary = runner.run(&mut sort).await?;

    println!("\nState:       {:?}", summary.state);
    println!("Comparisons: {}", summary.counters.comparisons);
    println!("Moves:       {}", summary.counters.moves);
    println!("Outcome:     {:?}\n", summary.outcome);

    // Example 2: Search for a value that is not there.
    println!("--- Example 2: Linear search miss ---");
    let mut search = LinearSearch::new(&[4, 8, 15, 16, 23, 42], 7)?;
    let summary = runner.run(&mut search).await?;
    println!("\nOutcome: {:?}\n", summary.outcome);

    // Example 3: Cancel a run from inside the sink. The sort stops at the
    // next step boundary and its partial state stays visible.
    println!("--- Example 3: Cancellation mid-run ---");
    let runner = Runner::new(Speed::new(90));
    let sink = Arc::new(ImpatientSink {
        handle: runner.handle(),
        limit: 4,
    });
    let runner = runner.with_sink(sink);

    let mut sort = BubbleSort::new(&[9, 7, 5, 3, 1])?;
    let summary = runner.run(&mut sort).await?;

    assert_eq!(summary.state, RunState::Cancelled);
    println!("\nState after cancel: {:?}", summary.state);
    println!("Steps published:    {}", summary.counters.steps);
    println!("Partial sequence:   {:?}\n", sort.sequence());

    println!("=== Examples complete ===");
    Ok(())
}
