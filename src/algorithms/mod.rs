//! Spanning-tree, shortest-path and traversal algorithms.

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod traversal;

pub use dijkstra::shortest_path_tree;
pub use kruskal::minimum_spanning_forest;
pub use prim::minimum_spanning_tree;
pub use traversal::{breadth_first, depth_first};
