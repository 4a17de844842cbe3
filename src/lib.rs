//! Graph algorithms on weighted, undirected graphs.
//!
//! This crate builds adjacency lists from an edge list and computes
//! minimum spanning trees (Prim, Kruskal), shortest-path trees
//! (Dijkstra) and traversal trees (depth-first, breadth-first). It
//! compiles to WASM for the browser and works as a plain Rust library.
//!
//! Vertices are numbered from 1; 0 is the "no parent" marker in every
//! result tree.

use wasm_bindgen::prelude::*;

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod parse;
pub mod reachability;
pub mod tree;
mod wasm;

pub use config::{Algorithm, DfsRestart, EngineConfig};
pub use error::{GraphError, Result};
pub use graph::{Edge, WeightedGraph};
pub use parse::parse_edge_list;
pub use tree::{Colour, EdgeForest, ShortestPathTree, SpanningTree, TraversalTree, INFINITY};
pub use wasm::WasmGraph;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
