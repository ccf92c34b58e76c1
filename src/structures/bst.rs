//! Binary search tree with eager traversal orders.

use serde::Serialize;

/// Which traversal order to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    Inorder,
    Preorder,
    Postorder,
    LevelOrder,
}

#[derive(Debug, Clone)]
struct BstNode {
    value: i64,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

/// An unbalanced binary search tree. Duplicates go right.
#[derive(Debug, Clone, Default)]
pub struct Bst {
    root: Option<Box<BstNode>>,
    len: usize,
}

impl Bst {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting values in order.
    pub fn from_values(values: &[i64]) -> Self {
        let mut bst = Self::new();
        for &v in values {
            bst.insert(v);
        }
        bst
    }

    /// Insert a value at its search position.
    pub fn insert(&mut self, value: i64) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if value < node.value {
                slot = &mut node.left;
            } else {
                slot = &mut node.right;
            }
        }
        *slot = Some(Box::new(BstNode {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: i64) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if value == n.value {
                return true;
            }
            node = if value < n.value {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        false
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The full traversal as `(value, depth)` pairs, computed eagerly.
    ///
    /// The traversal itself is not incremental; the stepper replays this
    /// list one element per step purely for animation.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<(i64, usize)> {
        let mut out = Vec::with_capacity(self.len);
        match order {
            TraversalOrder::Inorder => inorder(self.root.as_deref(), 0, &mut out),
            TraversalOrder::Preorder => preorder(self.root.as_deref(), 0, &mut out),
            TraversalOrder::Postorder => postorder(self.root.as_deref(), 0, &mut out),
            TraversalOrder::LevelOrder => level_order(self.root.as_deref(), &mut out),
        }
        out
    }
}

fn inorder(node: Option<&BstNode>, depth: usize, out: &mut Vec<(i64, usize)>) {
    if let Some(n) = node {
        inorder(n.left.as_deref(), depth + 1, out);
        out.push((n.value, depth));
        inorder(n.right.as_deref(), depth + 1, out);
    }
}

fn preorder(node: Option<&BstNode>, depth: usize, out: &mut Vec<(i64, usize)>) {
    if let Some(n) = node {
        out.push((n.value, depth));
        preorder(n.left.as_deref(), depth + 1, out);
        preorder(n.right.as_deref(), depth + 1, out);
    }
}

fn postorder(node: Option<&BstNode>, depth: usize, out: &mut Vec<(i64, usize)>) {
    if let Some(n) = node {
        postorder(n.left.as_deref(), depth + 1, out);
        postorder(n.right.as_deref(), depth + 1, out);
        out.push((n.value, depth));
    }
}

fn level_order(root: Option<&BstNode>, out: &mut Vec<(i64, usize)>) {
    let mut queue = std::collections::VecDeque::new();
    if let Some(n) = root {
        queue.push_back((n, 0));
    }
    while let Some((n, depth)) = queue.pop_front() {
        out.push((n.value, depth));
        if let Some(l) = n.left.as_deref() {
            queue.push_back((l, depth + 1));
        }
        if let Some(r) = n.right.as_deref() {
            queue.push_back((r, depth + 1));
        }
    }
}
