//! Low-level structures the algorithms are built on.

pub mod disjoint_set;
pub mod edge_heap;
pub mod indexed_heap;

pub use disjoint_set::DisjointSets;
pub use edge_heap::EdgeMinHeap;
pub use indexed_heap::IndexedMinHeap;
