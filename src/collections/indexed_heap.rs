//! Indexed binary min-heap over vertex indices.
//!
//! The heap stores vertices; their priorities live in a table owned by
//! the caller (`dist[]` in Prim and Dijkstra). The heap borrows that
//! table mutably for its lifetime, so while the heap is alive every
//! priority write goes through [`IndexedMinHeap::push`] or
//! [`IndexedMinHeap::decrease_key`], and both restore heap order.
//!
//! Layout is 1-based: `a[1..=N]` in heap order, `pos[v] == k` iff
//! `a[k] == v`, and `pos[v] == 0` iff `v` is not in the heap.
//!
//! Invariant: `dist[a[k]] <= dist[a[2k]]` and `dist[a[k]] <= dist[a[2k+1]]`
//! whenever those children exist.

use crate::error::{GraphError, Result};
use std::fmt;

/// Min-heap of vertices keyed by an external priority table.
#[derive(Debug)]
pub struct IndexedMinHeap<'d, K> {
    /// `a[0]` is unused.
    a: Vec<usize>,
    pos: Vec<usize>,
    dist: &'d mut [K],
    capacity: usize,
}

impl<'d, K: Copy + Ord> IndexedMinHeap<'d, K> {
    /// Create an empty heap holding at most `capacity` vertices.
    ///
    /// Valid vertices are `1..dist.len()`; `dist[0]` is never read.
    pub fn new(capacity: usize, dist: &'d mut [K]) -> Self {
        let mut a = Vec::with_capacity(capacity + 1);
        a.push(0);
        Self {
            a,
            pos: vec![0; dist.len()],
            dist,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.a.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `v` is currently in the heap.
    pub fn contains(&self, v: usize) -> bool {
        self.position(v).is_some()
    }

    /// Heap position of `v` (1-based), if present.
    pub fn position(&self, v: usize) -> Option<usize> {
        match self.pos.get(v) {
            Some(&k) if k != 0 => Some(k),
            _ => None,
        }
    }

    /// Current priority of `v` in the shared table.
    pub fn priority(&self, v: usize) -> Result<K> {
        self.check_vertex(v)?;
        Ok(self.dist[v])
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v == 0 || v >= self.dist.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.dist.len().saturating_sub(1),
            });
        }
        Ok(())
    }

    /// Insert `v` using the priority already written to the table.
    pub fn insert(&mut self, v: usize) -> Result<()> {
        self.check_vertex(v)?;
        if self.contains(v) {
            return Err(GraphError::AlreadyInHeap(v));
        }
        if self.len() >= self.capacity {
            return Err(GraphError::HeapFull {
                capacity: self.capacity,
            });
        }

        self.a.push(v);
        let k = self.len();
        self.pos[v] = k;
        self.sift_up(k);
        Ok(())
    }

    /// Write `priority` for `v`, then insert it.
    pub fn push(&mut self, v: usize, priority: K) -> Result<()> {
        self.check_vertex(v)?;
        if self.contains(v) {
            return Err(GraphError::AlreadyInHeap(v));
        }
        self.dist[v] = priority;
        self.insert(v)
    }

    /// Remove and return the vertex with the smallest priority.
    pub fn remove(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(GraphError::EmptyHeap);
        }

        let v = self.a[1];
        self.pos[v] = 0;
        let last = self.a.pop().unwrap_or(v);
        if !self.is_empty() {
            self.a[1] = last;
            self.sift_down(1);
        }
        Ok(v)
    }

    /// Lower the priority of a resident vertex and move it toward the root.
    pub fn decrease_key(&mut self, v: usize, priority: K) -> Result<()> {
        self.check_vertex(v)?;
        let k = self.position(v).ok_or(GraphError::NotInHeap(v))?;
        if priority > self.dist[v] {
            return Err(GraphError::PriorityIncrease { vertex: v });
        }
        self.dist[v] = priority;
        self.sift_up(k);
        Ok(())
    }

    fn sift_up(&mut self, mut k: usize) {
        let v = self.a[k];
        while k > 1 && self.dist[v] < self.dist[self.a[k / 2]] {
            self.a[k] = self.a[k / 2];
            self.pos[self.a[k]] = k;
            k /= 2;
        }
        self.a[k] = v;
        self.pos[v] = k;
    }

    fn sift_down(&mut self, mut k: usize) {
        let n = self.len();
        let v = self.a[k];
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.dist[self.a[j + 1]] < self.dist[self.a[j]] {
                j += 1;
            }
            if self.dist[v] <= self.dist[self.a[j]] {
                break;
            }
            self.a[k] = self.a[j];
            self.pos[self.a[k]] = k;
            k = j;
        }
        self.a[k] = v;
        self.pos[v] = k;
    }

    /// The heap level by level as `(vertex, priority)` pairs, root first.
    pub fn levels(&self) -> Vec<Vec<(usize, K)>> {
        let n = self.len();
        let mut out = Vec::new();
        let mut start = 1;
        while start <= n {
            let end = (2 * start - 1).min(n);
            out.push(
                (start..=end)
                    .map(|k| (self.a[k], self.dist[self.a[k]]))
                    .collect(),
            );
            start *= 2;
        }
        out
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        let n = self.len();
        (1..=n).all(|k| {
            let v = self.a[k];
            self.pos[v] == k
                && [2 * k, 2 * k + 1]
                    .iter()
                    .filter(|&&c| c <= n)
                    .all(|&c| self.dist[v] <= self.dist[self.a[c]])
        })
    }
}

impl<K: Copy + Ord + fmt::Display> fmt::Display for IndexedMinHeap<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels() {
            let row: Vec<String> = level.iter().map(|(v, p)| format!("{}({})", v, p)).collect();
            writeln!(f, "{}", row.join("  "))?;
        }
        Ok(())
    }
}
