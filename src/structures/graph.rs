//! Undirected weighted graph with display positions.

use serde::Serialize;

use crate::stepper::InputError;

/// A graph node: an id plus a display position for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// An undirected weighted edge between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: u64,
}

/// A small undirected graph.
///
/// Adjacency is derived by scanning the edge list in declaration order
/// rather than kept as a precomputed adjacency list; at dozens of nodes the
/// scan is irrelevant and declaration order is exactly the neighbor
/// enumeration order the traversals promise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at a display position, returning its id.
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { id, x, y });
        id
    }

    /// Add an undirected weighted edge.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: u64) -> Result<(), InputError> {
        for id in [a, b] {
            if id >= self.nodes.len() {
                return Err(InputError::UnknownNode(id));
            }
        }
        self.edges.push(Edge { a, b, weight });
        Ok(())
    }

    /// Whether `id` names a node.
    pub fn contains(&self, id: usize) -> bool {
        id < self.nodes.len()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `node` as `(neighbor, edge index, weight)` triples, in
    /// edge-declaration order, following each edge in either direction.
    pub fn neighbors(&self, node: usize) -> Vec<(usize, usize, u64)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                if e.a == node {
                    Some((e.b, i, e.weight))
                } else if e.b == node {
                    Some((e.a, i, e.weight))
                } else {
                    None
                }
            })
            .collect()
    }
}
