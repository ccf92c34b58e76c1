//! Graph traversal steppers: BFS, DFS, Dijkstra.

use std::collections::VecDeque;

use crate::event::{Outcome, Relaxation, StepEvent, StepKind};
use crate::stepper::{InputError, Stepper};
use crate::structures::Graph;

fn validate_start(graph: &Graph, start: usize) -> Result<(), InputError> {
    if graph.is_empty() {
        return Err(InputError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(InputError::UnknownNode(start));
    }
    Ok(())
}

/// Breadth-first traversal; one step per node dequeued.
///
/// Nodes are marked visited when enqueued, so each is dequeued exactly
/// once. Each visit event carries the edges traversed for the first time
/// while scanning that node's neighbors.
pub struct Bfs<'g> {
    graph: &'g Graph,
    queue: VecDeque<usize>,
    visited: Vec<bool>,
    edge_seen: Vec<bool>,
    order: Vec<usize>,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self, InputError> {
        validate_start(graph, start)?;
        let mut visited = vec![false; graph.len()];
        visited[start] = true;
        Ok(Self {
            graph,
            queue: VecDeque::from([start]),
            visited,
            edge_seen: vec![false; graph.edges().len()],
            order: Vec::new(),
        })
    }

    /// Nodes visited so far, in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl Stepper for Bfs<'_> {
    fn next_event(&mut self) -> Option<StepEvent> {
        let node = self.queue.pop_front()?;
        let mut discovered = Vec::new();
        for (neighbor, edge, _) in self.graph.neighbors(node) {
            if !self.edge_seen[edge] {
                self.edge_seen[edge] = true;
                discovered.push((edge, node, neighbor));
            }
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.push_back(neighbor);
            }
        }
        self.order.push(node);
        Some(StepEvent::new(
            StepKind::Visit { node, discovered },
            format!("dequeue and visit node {node}"),
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.queue.is_empty() {
            Outcome::VisitOrder {
                nodes: self.order.clone(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

/// Depth-first traversal on an explicit stack; one step per productive pop.
///
/// Neighbors are pushed in reverse adjacency order so nodes are visited
/// left to right, matching BFS on the same graph. A node may sit on the
/// stack several times; popping an already-visited node consumes no
/// visible step.
pub struct Dfs<'g> {
    graph: &'g Graph,
    stack: Vec<usize>,
    visited: Vec<bool>,
    edge_seen: Vec<bool>,
    order: Vec<usize>,
}

impl<'g> Dfs<'g> {
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self, InputError> {
        validate_start(graph, start)?;
        Ok(Self {
            graph,
            stack: vec![start],
            visited: vec![false; graph.len()],
            edge_seen: vec![false; graph.edges().len()],
            order: Vec::new(),
        })
    }

    /// Nodes visited so far, in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl Stepper for Dfs<'_> {
    fn next_event(&mut self) -> Option<StepEvent> {
        loop {
            let node = self.stack.pop()?;
            if self.visited[node] {
                continue;
            }
            self.visited[node] = true;
            let neighbors = self.graph.neighbors(node);
            let mut discovered = Vec::new();
            for &(neighbor, edge, _) in &neighbors {
                if !self.edge_seen[edge] {
                    self.edge_seen[edge] = true;
                    discovered.push((edge, node, neighbor));
                }
            }
            for &(neighbor, _, _) in neighbors.iter().rev() {
                if !self.visited[neighbor] {
                    self.stack.push(neighbor);
                }
            }
            self.order.push(node);
            return Some(StepEvent::new(
                StepKind::Visit { node, discovered },
                format!("pop and visit node {node}"),
            ));
        }
    }

    fn outcome(&self) -> Outcome {
        if self.stack.iter().all(|&n| self.visited[n]) {
            Outcome::VisitOrder {
                nodes: self.order.clone(),
            }
        } else {
            Outcome::InProgress
        }
    }
}

/// Dijkstra's shortest paths; one step per node finalized.
///
/// The minimum-distance unvisited node is selected by scanning node ids in
/// order, so ties break toward the lowest id. Edge relaxations ride on the
/// finalize event rather than pausing on their own.
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    source: usize,
    dist: Vec<Option<u64>>,
    visited: Vec<bool>,
    done: bool,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph, source: usize) -> Result<Self, InputError> {
        validate_start(graph, source)?;
        let mut dist = vec![None; graph.len()];
        dist[source] = Some(0);
        Ok(Self {
            graph,
            source,
            dist,
            visited: vec![false; graph.len()],
            done: false,
        })
    }

    /// Best known distances so far.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.dist
    }
}

impl Stepper for Dijkstra<'_> {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        // Lowest-id minimum-distance unvisited node; strict comparison
        // keeps the scan's first minimum on ties.
        let mut next: Option<(usize, u64)> = None;
        for id in 0..self.graph.len() {
            if self.visited[id] {
                continue;
            }
            if let Some(d) = self.dist[id] {
                if next.is_none_or(|(_, best)| d < best) {
                    next = Some((id, d));
                }
            }
        }
        let Some((node, distance)) = next else {
            self.done = true;
            return None;
        };
        self.visited[node] = true;

        let mut relaxations = Vec::new();
        for (neighbor, _, weight) in self.graph.neighbors(node) {
            if self.visited[neighbor] {
                continue;
            }
            let candidate = distance + weight;
            let improved = self.dist[neighbor].is_none_or(|d| candidate < d);
            if improved {
                self.dist[neighbor] = Some(candidate);
            }
            relaxations.push(Relaxation {
                from: node,
                to: neighbor,
                weight,
                distance: candidate,
                improved,
            });
        }
        Some(StepEvent::new(
            StepKind::FinalizeNode {
                node,
                distance,
                relaxations,
            },
            format!("finalize node {node} at distance {distance}"),
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.done {
            Outcome::Distances {
                source: self.source,
                distances: self.dist.clone(),
            }
        } else {
            Outcome::InProgress
        }
    }
}
