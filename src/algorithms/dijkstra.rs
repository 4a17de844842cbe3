//! Dijkstra's shortest-path tree for non-negative weights.

use crate::collections::IndexedMinHeap;
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::tree::{ShortestPathTree, INFINITY};

/// Shortest paths from `source` to every reachable vertex.
pub fn shortest_path_tree(graph: &WeightedGraph, source: usize) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    log::debug!("dijkstra from {}", source);

    let mut dist = vec![INFINITY; n + 1];
    let mut parent = vec![0; n + 1];

    {
        let mut heap = IndexedMinHeap::new(n, &mut dist);
        heap.push(source, 0)?;

        while !heap.is_empty() {
            let v = heap.remove()?;
            let dv = heap.priority(v)?;

            for (u, w) in graph.neighbors(v) {
                let candidate = dv + u64::from(w);
                if candidate >= heap.priority(u)? {
                    continue;
                }

                parent[u] = v;
                if heap.contains(u) {
                    heap.decrease_key(u, candidate)?;
                } else {
                    heap.push(u, candidate)?;
                }
                log::trace!("relaxed {} via {} to {}", u, v, candidate);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        parent,
        dist,
    })
}
