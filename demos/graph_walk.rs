//! Graph traversal example for the stepviz engine.
//!
//! This example demonstrates:
//! - Building a Graph from nodes and weighted edges
//! - Running BFS, DFS, and Dijkstra over the same graph
//! - Collecting the event log with a MemorySink and replaying it
//! - Exporting a run as newline-delimited JSON

use std::sync::Arc;
use stepviz::{Bfs, Dfs, Dijkstra, Graph, MemorySink, Runner, Speed, StepKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn sample_graph() -> anyhow::Result<Graph> {
    let mut graph = Graph::new();
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        graph.add_node(x, y);
    }
    for (a, b, weight) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        graph.add_edge(a, b, weight)?;
    }
    Ok(graph)
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

    println!("=== stepviz - Graph Walk Example ===\n");

    let graph = sample_graph()?;
    let sink = Arc::new(MemorySink::new());
    let runner = Runner::new(Speed::MAX).with_sink(sink.clone());

    // Example 1: Breadth-first search. Each Visit event carries the edges
    // discovered from the visited node.
    println!("--- Example 1: BFS from node 0 ---");
    let mut bfs = Bfs::new(&graph, 0)?;
    let summary = runner.run(&mut bfs).await?;
    println!("Outcome: {:?}", summary.outcome);
    for event in sink.events().await {
        if let StepKind::Visit { node, discovered } = &event.kind {
            println!("  visit {node}, discovered edges {discovered:?}");
        }
    }
    println!();

    // Example 2: Depth-first search over the same graph.
    println!("--- Example 2: DFS from node 0 ---");
    let mut dfs = Dfs::new(&graph, 0)?;
    let summary = runner.run(&mut dfs).await?;
    println!("Outcome: {:?}\n", summary.outcome);

    // Example 3: Dijkstra. Each FinalizeNode event settles one node and
    // records the relaxations performed from it.
    println!("--- Example 3: Dijkstra from node 0 ---");
    let mut dijkstra = Dijkstra::new(&graph, 0)?;
    let summary = runner.run(&mut dijkstra).await?;
    println!("Outcome: {:?}\n", summary.outcome);

    // Example 4: The recorded log serializes to one JSON object per line,
    // ready to hand to a frontend or store for later playback.
    println!("--- Example 4: Event log as JSON lines ---");
    for line in sink.json_lines().await?.lines().take(3) {
        println!("  {line}");
    }
    println!("  ...\n");

    println!("=== Examples complete ===");
    Ok(())
}
