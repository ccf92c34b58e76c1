//! BFS, DFS, and Dijkstra over small undirected graphs.

use stepviz::{drain, Bfs, Dfs, Dijkstra, Graph, InputError, Outcome, StepKind, Stepper};

/// The seven-node graph from the classroom scenario:
/// edges 0-1, 0-3, 1-2, 1-4, 2-5, 3-4, 3-6, 4-5, 4-6.
fn sample_graph() -> Graph {
    let mut g = Graph::new();
    for i in 0..7 {
        let id = g.add_node(f64::from(i) * 40.0, 0.0);
        assert_eq!(id, i as usize);
    }
    for (a, b) in [
        (0, 1),
        (0, 3),
        (1, 2),
        (1, 4),
        (2, 5),
        (3, 4),
        (3, 6),
        (4, 5),
        (4, 6),
    ] {
        g.add_edge(a, b, 1).unwrap();
    }
    g
}

#[test]
fn test_bfs_visit_order_matches_scenario() {
    let g = sample_graph();
    let mut bfs = Bfs::new(&g, 0).unwrap();
    drain(&mut bfs);
    assert_eq!(
        bfs.outcome(),
        Outcome::VisitOrder {
            nodes: vec![0, 1, 3, 2, 4, 6, 5]
        }
    );
}

#[test]
fn test_bfs_emits_one_step_per_dequeued_node() {
    let g = sample_graph();
    let mut bfs = Bfs::new(&g, 0).unwrap();
    let events = drain(&mut bfs);
    assert_eq!(events.len(), 7);
    assert!(events
        .iter()
        .all(|e| matches!(e.kind, StepKind::Visit { .. })));
}

#[test]
fn test_bfs_records_each_edge_at_most_once() {
    let g = sample_graph();
    let mut bfs = Bfs::new(&g, 0).unwrap();
    let events = drain(&mut bfs);
    let mut seen = Vec::new();
    for event in &events {
        if let StepKind::Visit { discovered, .. } = &event.kind {
            for &(edge, _, _) in discovered {
                assert!(!seen.contains(&edge), "edge {edge} recorded twice");
                seen.push(edge);
            }
        }
    }
    // Every edge of a connected graph is eventually traversed.
    assert_eq!(seen.len(), g.edges().len());
}

#[test]
fn test_dfs_visits_left_to_right() {
    let g = sample_graph();
    let mut dfs = Dfs::new(&g, 0).unwrap();
    drain(&mut dfs);
    // Neighbors are pushed in reverse adjacency order, so node 1 (the
    // first-declared neighbor of 0) is visited first, same as BFS.
    assert_eq!(
        dfs.outcome(),
        Outcome::VisitOrder {
            nodes: vec![0, 1, 2, 5, 4, 3, 6]
        }
    );
}

#[test]
fn test_dfs_skips_duplicate_pops_without_visible_steps() {
    let g = sample_graph();
    let mut dfs = Dfs::new(&g, 0).unwrap();
    let events = drain(&mut dfs);
    // One visible step per node even though nodes get pushed repeatedly.
    assert_eq!(events.len(), 7);
}

fn weighted_graph() -> Graph {
    let mut g = Graph::new();
    for _ in 0..5 {
        g.add_node(0.0, 0.0);
    }
    for (a, b, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        g.add_edge(a, b, w).unwrap();
    }
    g
}

#[test]
fn test_dijkstra_distances() {
    let g = weighted_graph();
    let mut dijkstra = Dijkstra::new(&g, 0).unwrap();
    drain(&mut dijkstra);
    assert_eq!(
        dijkstra.outcome(),
        Outcome::Distances {
            source: 0,
            distances: vec![Some(0), Some(3), Some(1), Some(4), Some(7)]
        }
    );
}

#[test]
fn test_dijkstra_finalizes_in_distance_order() {
    let g = weighted_graph();
    let mut dijkstra = Dijkstra::new(&g, 0).unwrap();
    let events = drain(&mut dijkstra);
    let finalized: Vec<(usize, u64)> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::FinalizeNode { node, distance, .. } => Some((node, distance)),
            _ => None,
        })
        .collect();
    assert_eq!(finalized, vec![(0, 0), (2, 1), (1, 3), (3, 4), (4, 7)]);
}

#[test]
fn test_dijkstra_breaks_ties_toward_lower_ids() {
    let mut g = Graph::new();
    for _ in 0..3 {
        g.add_node(0.0, 0.0);
    }
    // Declared 0-2 before 0-1; equal distances must still finalize 1 first.
    g.add_edge(0, 2, 5).unwrap();
    g.add_edge(0, 1, 5).unwrap();
    let mut dijkstra = Dijkstra::new(&g, 0).unwrap();
    let events = drain(&mut dijkstra);
    let order: Vec<usize> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::FinalizeNode { node, .. } => Some(node),
            _ => None,
        })
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_dijkstra_leaves_unreachable_nodes_unset() {
    let mut g = Graph::new();
    for _ in 0..3 {
        g.add_node(0.0, 0.0);
    }
    g.add_edge(0, 1, 2).unwrap();
    let mut dijkstra = Dijkstra::new(&g, 0).unwrap();
    drain(&mut dijkstra);
    assert_eq!(
        dijkstra.outcome(),
        Outcome::Distances {
            source: 0,
            distances: vec![Some(0), Some(2), None]
        }
    );
}

#[test]
fn test_invalid_starts_rejected() {
    let g = sample_graph();
    assert_eq!(Bfs::new(&g, 99).err(), Some(InputError::UnknownNode(99)));
    assert_eq!(
        Dijkstra::new(&Graph::new(), 0).err(),
        Some(InputError::EmptyGraph)
    );
}
