//! Min-heap of edges ordered by weight.
//!
//! Holds indices into a borrowed edge slice and is built bottom-up in
//! O(E). Only Kruskal uses it; it knows nothing about vertices.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Weight};

#[derive(Debug)]
pub struct EdgeMinHeap<'e> {
    edges: &'e [Edge],
    /// 1-based heap of indices into `edges`; `h[0]` is unused.
    h: Vec<usize>,
}

impl<'e> EdgeMinHeap<'e> {
    /// Heapify all of `edges` by sifting down every internal node
    /// from `E/2` to 1.
    pub fn new(edges: &'e [Edge]) -> Self {
        let mut h = Vec::with_capacity(edges.len() + 1);
        h.push(0);
        h.extend(0..edges.len());

        let mut heap = Self { edges, h };
        for k in (1..=heap.len() / 2).rev() {
            heap.sift_down(k);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.h.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return the lightest remaining edge.
    pub fn remove(&mut self) -> Result<Edge> {
        if self.is_empty() {
            return Err(GraphError::EmptyHeap);
        }
        let top = self.h[1];
        let last = self.h.pop().unwrap_or(top);
        if !self.is_empty() {
            self.h[1] = last;
            self.sift_down(1);
        }
        Ok(self.edges[top])
    }

    fn weight_at(&self, k: usize) -> Weight {
        self.edges[self.h[k]].weight
    }

    fn sift_down(&mut self, mut k: usize) {
        let n = self.len();
        let e = self.h[k];
        let w = self.edges[e].weight;
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.weight_at(j + 1) < self.weight_at(j) {
                j += 1;
            }
            if w <= self.weight_at(j) {
                break;
            }
            self.h[k] = self.h[j];
            k = j;
        }
        self.h[k] = e;
    }
}
