//! Subscription interface for published step events.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::event::StepEvent;

/// Receives one typed event per paused step.
///
/// This is the single seam between the engine and a rendering collaborator:
/// the runner publishes here, then sleeps, then checks for cancellation.
#[async_trait]
pub trait StepSink: Send + Sync {
    /// Accept the `seq`-th event of the current run (1-based).
    async fn publish(&self, seq: u64, event: &StepEvent) -> anyhow::Result<()>;
}

/// A sink that discards all events.
///
/// Useful for tests and for running an algorithm purely for its outcome.
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StepSink for NoopSink {
    async fn publish(&self, _seq: u64, _event: &StepEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A sink that keeps every event in memory, in publication order.
///
/// The recorded log, replayed in order, reconstructs every intermediate
/// state of the run (see [`crate::replay`]).
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<StepEvent>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything published so far.
    pub async fn events(&self) -> Vec<StepEvent> {
        self.events.lock().await.clone()
    }

    /// Number of events published so far.
    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    /// Whether nothing has been published yet.
    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }

    /// The recorded log as newline-delimited JSON, one event per line.
    pub async fn json_lines(&self) -> anyhow::Result<String> {
        let events = self.events.lock().await;
        let mut out = String::new();
        for event in events.iter() {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[async_trait]
impl StepSink for MemorySink {
    async fn publish(&self, _seq: u64, event: &StepEvent) -> anyhow::Result<()> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
