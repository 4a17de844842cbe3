//! Result trees returned by the algorithms.
//!
//! Every tree is a `parent[]` array of length `V + 1` where 0 means
//! "root or unreached". Distances use [`INFINITY`] for unreached vertices.

use crate::graph::Edge;
use serde::{Serialize, Serializer};

/// Distance sentinel for vertices the algorithm never reached.
pub const INFINITY: u64 = u64::MAX;

/// Per-vertex traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// Not yet discovered.
    White,
    /// Discovered, still being expanded.
    Gray,
    /// Finished.
    Black,
}

/// Unreached entries serialize as `null` rather than `u64::MAX`.
fn distances<S: Serializer>(dist: &[u64], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(dist.iter().map(|&d| (d != INFINITY).then_some(d)))
}

fn parent_edges(parent: &[usize]) -> Vec<(usize, usize)> {
    parent
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &p)| p != 0)
        .map(|(v, &p)| (p, v))
        .collect()
}

/// Prim's minimum spanning tree grown from `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub root: usize,
    pub parent: Vec<usize>,
    /// Weight of the tree edge entering each vertex; 0 at the root.
    #[serde(serialize_with = "distances")]
    pub key: Vec<u64>,
    /// Sum of tree edge weights.
    pub weight: u64,
    /// Whether every vertex of the graph joined the tree.
    pub spanning: bool,
}

impl SpanningTree {
    /// `(parent, child)` pairs of the tree.
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        parent_edges(&self.parent)
    }
}

/// Kruskal's minimum spanning forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeForest {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    pub weight: u64,
    /// Tree parent over the accepted edges; each component is rooted at
    /// its smallest vertex.
    pub parent: Vec<usize>,
    /// Union-find parent links after the last union.
    pub set_parent: Vec<usize>,
    /// Whether `V - 1` edges were accepted.
    pub spanning: bool,
}

impl EdgeForest {
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|e| (e.u, e.v)).collect()
    }
}

/// Dijkstra's shortest-path tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    pub source: usize,
    pub parent: Vec<usize>,
    #[serde(serialize_with = "distances")]
    pub dist: Vec<u64>,
}

impl ShortestPathTree {
    /// Distance from the source, `None` when unreachable.
    pub fn distance(&self, v: usize) -> Option<u64> {
        self.dist.get(v).copied().filter(|&d| d != INFINITY)
    }

    /// Vertices on the shortest path from the source to `v`, inclusive.
    ///
    /// `None` when `v` is unreached or its parent chain does not lead
    /// back to the source within `parent.len()` steps.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut path = vec![v];
        let mut x = v;
        while x != self.source {
            if path.len() > self.parent.len() {
                return None;
            }
            x = self.parent.get(x).copied().filter(|&p| p != 0)?;
            path.push(x);
        }
        path.reverse();
        Some(path)
    }

    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        parent_edges(&self.parent)
    }
}

/// Depth-first or breadth-first traversal tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalTree {
    pub start: usize,
    pub parent: Vec<usize>,
    pub colour: Vec<Colour>,
    /// Vertices in discovery order.
    pub order: Vec<usize>,
    /// Hop count from `start` (BFS) or depth in the DFS forest.
    #[serde(serialize_with = "distances")]
    pub dist: Vec<u64>,
}

impl TraversalTree {
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        parent_edges(&self.parent)
    }

    pub fn visited(&self, v: usize) -> bool {
        matches!(self.colour.get(v), Some(Colour::Black))
    }
}
