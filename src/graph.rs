//! Graph Store: adjacency lists for an undirected weighted graph.
//!
//! Vertices are 1-based (`1..=V`); index 0 is reserved as the
//! "no parent" marker used by every result tree. Each edge `(u, v)`
//! contributes one list entry under `u` and one under `v`. Entries are
//! prepended, so a vertex's neighbours come back most-recent-first.
//!
//! The graph is built once and is read-only afterwards.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Non-negative integer edge weight.
pub type Weight = u32;

/// An undirected weighted edge. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// The endpoint opposite `x`. Returns `u` when `x` is not an endpoint.
    pub fn other(&self, x: usize) -> usize {
        if x == self.u {
            self.v
        } else {
            self.u
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}--({})--{}",
            vertex_label(self.u),
            self.weight,
            vertex_label(self.v)
        )
    }
}

/// One adjacency-list entry. `next` is `None` at the end of the list.
#[derive(Debug, Clone, Copy)]
struct AdjNode {
    vert: usize,
    weight: Weight,
    next: Option<usize>,
}

/// Largest vertex count a graph may be built with. Per-vertex tables are
/// allocated up front, so the header alone decides their size.
pub const MAX_VERTICES: usize = 1 << 24;

/// Undirected weighted graph stored as per-vertex singly-linked lists
/// in a shared node arena.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    /// `heads[v]` is the first arena node of `v`'s list. `heads[0]` is unused.
    heads: Vec<Option<usize>>,
    nodes: Vec<AdjNode>,
    degrees: Vec<usize>,
}

impl WeightedGraph {
    /// Build the adjacency lists from an edge list.
    ///
    /// Every endpoint must lie in `[1, vertex_count]`, and `vertex_count`
    /// may not exceed [`MAX_VERTICES`].
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                vertex_count,
                max: MAX_VERTICES,
            });
        }

        let mut graph = Self {
            vertex_count,
            edges: Vec::with_capacity(edges.len()),
            heads: vec![None; vertex_count + 1],
            nodes: Vec::with_capacity(edges.len() * 2),
            degrees: vec![0; vertex_count + 1],
        };

        for edge in edges {
            graph.check_vertex(edge.u)?;
            graph.check_vertex(edge.v)?;
            graph.link(edge.u, edge.v, edge.weight);
            graph.link(edge.v, edge.u, edge.weight);
            graph.edges.push(edge);
        }

        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count,
            graph.edges.len()
        );
        Ok(graph)
    }

    fn link(&mut self, from: usize, to: usize, weight: Weight) {
        let id = self.nodes.len();
        self.nodes.push(AdjNode {
            vert: to,
            weight,
            next: self.heads[from],
        });
        self.heads[from] = Some(id);
        self.degrees[from] += 1;
    }

    /// Number of vertices `V`.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `E`.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All vertex indices, `1..=V`.
    pub fn vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count
    }

    pub fn check_vertex(&self, v: usize) -> Result<()> {
        if v == 0 || v > self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Length of `v`'s adjacency list.
    pub fn degree(&self, v: usize) -> usize {
        self.degrees.get(v).copied().unwrap_or(0)
    }

    /// Incident edges of `v` as `(neighbour, weight)`, most recently
    /// inserted first. An out-of-range vertex has no neighbours.
    pub fn neighbors(&self, v: usize) -> Neighbors<'_> {
        Neighbors {
            nodes: &self.nodes,
            cursor: self.heads.get(v).copied().flatten(),
        }
    }
}

/// Iterator over one adjacency list. Cheap to clone; each call to
/// [`WeightedGraph::neighbors`] starts a fresh walk.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    nodes: &'g [AdjNode],
    cursor: Option<usize>,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.cursor?];
        self.cursor = node.next;
        Some((node.vert, node.weight))
    }
}

/// Letter label for a vertex: 1 is `A`, 26 is `Z`, anything else is its
/// decimal index. Vertex 0 renders as `@`.
pub fn vertex_label(v: usize) -> String {
    if v <= 26 {
        char::from(b'@' + v as u8).to_string()
    } else {
        v.to_string()
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices() {
            write!(f, "adj[{}] ->", vertex_label(v))?;
            for (u, w) in self.neighbors(v) {
                write!(f, " |{} | {}| ->", vertex_label(u), w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// ```text
    ///   1 --2-- 2
    ///   |     / |
    ///   3   1   5
    ///   | /     |
    ///   3 --4-- 4 --2-- 5
    /// ```
    pub fn five_vertex() -> WeightedGraph {
        WeightedGraph::new(
            5,
            vec![
                Edge::new(1, 2, 2),
                Edge::new(1, 3, 3),
                Edge::new(2, 3, 1),
                Edge::new(2, 4, 5),
                Edge::new(3, 4, 4),
                Edge::new(4, 5, 2),
            ],
        )
        .unwrap()
    }

    /// Two components: {1, 2, 3} (triangle) and {4, 5}.
    pub fn two_components() -> WeightedGraph {
        WeightedGraph::new(
            5,
            vec![
                Edge::new(1, 2, 4),
                Edge::new(2, 3, 1),
                Edge::new(1, 3, 2),
                Edge::new(4, 5, 7),
            ],
        )
        .unwrap()
    }
}
