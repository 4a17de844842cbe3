//! Disjoint-set forest over vertices `1..=V`.
//!
//! Union by rank, **without** path compression: `find_set` only walks
//! parent links, so a find never mutates the forest and tree height is
//! bounded by `O(log V)` through the rank rule alone.
//!
//! `tree_parent[v] == 0` marks a vertex that `make_set` has not touched.

use crate::error::{GraphError, Result};

#[derive(Debug, Clone)]
pub struct DisjointSets {
    tree_parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Forest for vertices `1..=vertex_count`, all uninitialized.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            tree_parent: vec![0; vertex_count + 1],
            rank: vec![0; vertex_count + 1],
        }
    }

    /// Number of vertices the forest was sized for.
    pub fn len(&self) -> usize {
        self.tree_parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v == 0 || v > self.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.len(),
            });
        }
        Ok(())
    }

    /// Make `v` a singleton root of rank 0. Once per vertex.
    pub fn make_set(&mut self, v: usize) -> Result<()> {
        self.check_vertex(v)?;
        if self.tree_parent[v] != 0 {
            return Err(GraphError::SetAlreadyInitialized(v));
        }
        self.tree_parent[v] = v;
        self.rank[v] = 0;
        Ok(())
    }

    /// Root of the tree containing `v`.
    pub fn find_set(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        if self.tree_parent[v] == 0 {
            return Err(GraphError::SetNotInitialized(v));
        }
        let mut x = v;
        while self.tree_parent[x] != x {
            x = self.tree_parent[x];
        }
        Ok(x)
    }

    /// Merge two sets given their roots. The lower-rank root goes under
    /// the higher one; on a tie `root2` goes under `root1` and `root1`'s
    /// rank grows by one.
    pub fn union(&mut self, root1: usize, root2: usize) -> Result<()> {
        for r in [root1, root2] {
            if self.find_set(r)? != r {
                return Err(GraphError::NotARoot(r));
            }
        }
        if root1 == root2 {
            return Err(GraphError::SameSet(root1));
        }

        match self.rank[root1].cmp(&self.rank[root2]) {
            std::cmp::Ordering::Less => self.tree_parent[root1] = root2,
            std::cmp::Ordering::Greater => self.tree_parent[root2] = root1,
            std::cmp::Ordering::Equal => {
                self.tree_parent[root2] = root1;
                self.rank[root1] += 1;
            }
        }
        Ok(())
    }

    /// Raw parent links, index 0 unused.
    pub fn tree_parents(&self) -> &[usize] {
        &self.tree_parent
    }

    /// Rank of a vertex (an upper bound on its subtree height).
    pub fn rank(&self, v: usize) -> Result<u32> {
        self.check_vertex(v)?;
        Ok(self.rank[v])
    }

    /// Initialized sets, each sorted, ordered by smallest member.
    pub fn sets(&self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.tree_parent.len()];
        let mut out: Vec<Vec<usize>> = Vec::new();
        for v in 1..=self.len() {
            let Ok(root) = self.find_set(v) else {
                continue;
            };
            if slot[root] == usize::MAX {
                slot[root] = out.len();
                out.push(Vec::new());
            }
            out[slot[root]].push(v);
        }
        out
    }
}
