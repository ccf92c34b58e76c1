//! # Stepviz
//!
//! The animation-synchronized algorithm stepper.
//!
//! Runs classic data-structure algorithms one observable step at a time so
//! a host UI can render every intermediate state, at a user-controlled
//! speed, with cooperative cancellation. No rendering, no persistence, no
//! networking: just the engine a visualizer sits on top of.
//!
//! ## Why Stepviz?
//!
//! - **Steps, not snapshots** - every pause publishes a typed, diff-like
//!   [`StepEvent`] naming exactly the indices, nodes, or cells that changed
//! - **Algorithms are generators** - a [`Stepper`] lazily produces its
//!   finite event sequence; pacing and rendering live in the host
//! - **Observable by default** - counters, a replayable event log, and a
//!   terminal [`RunSummary`] for every run
//! - **Embeddable** - a library, not a service; runs in your process
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stepviz::{BubbleSort, MemorySink, Runner, Speed};
//!
//! let sink = Arc::new(MemorySink::new());
//! let runner = Runner::new(Speed::MAX).with_sink(sink.clone());
//!
//! let mut sort = BubbleSort::new(&[5, 3, 8, 1])?;
//! let summary = runner.run(&mut sort).await?;
//!
//! println!("{:?} in {} comparisons", summary.outcome, summary.counters.comparisons);
//! ```
//!
//! ## Cancellation
//!
//! A [`RunHandle`] cloned from the runner cancels from anywhere:
//!
//! ```rust,ignore
//! let handle = runner.handle();
//! tokio::spawn(async move { handle.cancel() });
//! ```
//!
//! The run stops at the next step boundary. Steps are atomic: a step's
//! mutation and its event are applied together, so cancellation never
//! leaves a half-applied step - only a shorter run.

pub mod algorithms;
pub mod event;
pub mod replay;
pub mod run;
pub mod runner;
pub mod sink;
pub mod speed;
pub mod stepper;
pub mod structures;

pub use algorithms::{
    Bfs, BinarySearch, BstTraversal, BubbleSort, Dfs, Dijkstra, Factorial, Fibonacci,
    HashInsert, HeapBuild, HeapExtract, HeapInsert, InsertionSort, Knapsack, Lcs, LinearSearch,
    MergeSort, QuickSort, SelectionSort, TrieInsert, TrieSearch,
};
pub use event::{Counter, Outcome, Relaxation, StepEvent, StepKind};
pub use run::{CounterSnapshot, Counters, RunError, RunHandle, RunState, RunSummary};
pub use runner::Runner;
pub use sink::{MemorySink, NoopSink, StepSink};
pub use speed::Speed;
pub use stepper::{drain, InputError, Stepper};
pub use structures::{
    Bst, ChainedHashTable, Edge, Graph, Heap, HeapOrder, LinkedList, Node, Queue, Stack,
    TraversalOrder, Trie,
};
