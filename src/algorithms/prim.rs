//! Prim's minimum spanning tree.
//!
//! Grows a tree from the start vertex. `key[v]` holds the cheapest known
//! edge from the tree to `v` and is the priority table of the indexed
//! heap. A removed vertex is finalised and never relaxed again.

use crate::collections::IndexedMinHeap;
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::tree::{SpanningTree, INFINITY};

/// Minimum spanning tree of `start`'s component.
///
/// Vertices in other components keep parent 0 and key [`INFINITY`] and
/// contribute nothing to the weight.
pub fn minimum_spanning_tree(graph: &WeightedGraph, start: usize) -> Result<SpanningTree> {
    graph.check_vertex(start)?;
    let n = graph.vertex_count();
    log::debug!("prim from {}", start);

    let mut key = vec![INFINITY; n + 1];
    let mut parent = vec![0; n + 1];
    let mut in_tree = vec![false; n + 1];
    let mut weight: u64 = 0;
    let mut reached = 0;

    {
        let mut heap = IndexedMinHeap::new(n, &mut key);
        heap.push(start, 0)?;

        while !heap.is_empty() {
            let v = heap.remove()?;
            in_tree[v] = true;
            reached += 1;
            log::trace!("prim adds {} via {}", v, parent[v]);

            for (u, w) in graph.neighbors(v) {
                let w = u64::from(w);
                if in_tree[u] {
                    continue;
                }
                let current = heap.priority(u)?;
                if w >= current {
                    continue;
                }

                parent[u] = v;
                if heap.contains(u) {
                    // Replace u's tentative edge in the running sum.
                    weight -= current;
                    heap.decrease_key(u, w)?;
                } else {
                    heap.push(u, w)?;
                }
                weight += w;
            }
        }
    }

    log::debug!("prim reached {} of {} vertices, weight {}", reached, n, weight);
    Ok(SpanningTree {
        root: start,
        parent,
        key,
        weight,
        spanning: reached == n,
    })
}
