//! The in-memory structures the steppers operate on.

pub mod bst;
pub mod graph;
pub mod hash_table;
pub mod heap;
pub mod list;
pub mod trie;

pub use bst::{Bst, TraversalOrder};
pub use graph::{Edge, Graph, Node};
pub use hash_table::ChainedHashTable;
pub use heap::{Heap, HeapOrder};
pub use list::{LinkedList, Queue, Stack};
pub use trie::Trie;
