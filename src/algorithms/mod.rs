//! The stepper implementations, one module per algorithm family.

pub mod dp;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod search;
pub mod sorting;
pub mod tree;
pub mod trie;

pub use dp::{Factorial, Fibonacci, Knapsack, Lcs};
pub use graph::{Bfs, Dfs, Dijkstra};
pub use hash::HashInsert;
pub use heap::{HeapBuild, HeapExtract, HeapInsert};
pub use search::{BinarySearch, LinearSearch};
pub use sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
pub use tree::BstTraversal;
pub use trie::{TrieInsert, TrieSearch};
