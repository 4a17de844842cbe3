//! Reachability queries on the undirected graph.
//!
//! The run report lists the connected components computed here.

use crate::graph::WeightedGraph;
use std::collections::VecDeque;

/// All vertices reachable from `source`, including the source, in BFS order.
/// An out-of-range source reaches nothing.
pub fn reachable_from(graph: &WeightedGraph, source: usize) -> Vec<usize> {
    if graph.check_vertex(source).is_err() {
        return Vec::new();
    }

    let mut visited = vec![false; graph.vertex_count() + 1];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    queue.push_back(source);
    visited[source] = true;

    while let Some(v) = queue.pop_front() {
        result.push(v);
        for (w, _) in graph.neighbors(v) {
            if !visited[w] {
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    result
}

/// Connected components, each sorted, ordered by smallest member.
pub fn components(graph: &WeightedGraph) -> Vec<Vec<usize>> {
    let mut seen = vec![false; graph.vertex_count() + 1];
    let mut out = Vec::new();
    for v in graph.vertices() {
        if seen[v] {
            continue;
        }
        let mut comp = reachable_from(graph, v);
        for &u in &comp {
            seen[u] = true;
        }
        comp.sort_unstable();
        out.push(comp);
    }
    out
}
