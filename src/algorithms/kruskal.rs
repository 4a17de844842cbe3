//! Kruskal's minimum spanning forest.
//!
//! Edges come off an [`EdgeMinHeap`] lightest first; an edge is kept
//! when its endpoints have different set roots, otherwise it would
//! close a cycle and is dropped.

use crate::collections::{DisjointSets, EdgeMinHeap};
use crate::error::Result;
use crate::graph::{Edge, WeightedGraph};
use crate::tree::EdgeForest;
use std::collections::VecDeque;

/// Minimum spanning forest over all components.
pub fn minimum_spanning_forest(graph: &WeightedGraph) -> Result<EdgeForest> {
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    log::debug!("kruskal over {} edges", graph.edge_count());

    let mut heap = EdgeMinHeap::new(graph.edges());
    let mut sets = DisjointSets::new(n);
    for v in graph.vertices() {
        sets.make_set(v)?;
    }

    let mut edges = Vec::with_capacity(target);
    let mut weight: u64 = 0;

    while edges.len() < target && !heap.is_empty() {
        let edge = heap.remove()?;
        let u_root = sets.find_set(edge.u)?;
        let v_root = sets.find_set(edge.v)?;

        if u_root == v_root {
            log::trace!("edge {} rejected: closes a cycle", edge);
            continue;
        }

        sets.union(u_root, v_root)?;
        weight += u64::from(edge.weight);
        edges.push(edge);
        log::trace!("edge {} accepted", edge);
    }

    let spanning = edges.len() == target;
    log::debug!("kruskal accepted {} edges, weight {}", edges.len(), weight);
    Ok(EdgeForest {
        weight,
        parent: forest_parents(n, &edges),
        set_parent: sets.tree_parents().to_vec(),
        edges,
        spanning,
    })
}

/// Parent array of the accepted edges. Each tree is rooted at its
/// smallest vertex, which keeps parent 0.
fn forest_parents(n: usize, edges: &[Edge]) -> Vec<usize> {
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
    for (i, e) in edges.iter().enumerate() {
        incident[e.u].push(i);
        incident[e.v].push(i);
    }

    let mut parent = vec![0; n + 1];
    let mut seen = vec![false; n + 1];
    let mut queue = VecDeque::new();
    for root in 1..=n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        queue.push_back(root);
        while let Some(x) = queue.pop_front() {
            for &i in &incident[x] {
                let y = edges[i].other(x);
                if !seen[y] {
                    seen[y] = true;
                    parent[y] = x;
                    queue.push_back(y);
                }
            }
        }
    }
    parent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{fixtures, Edge};

    #[test]
    fn test_five_vertex_mst() {
        let g = fixtures::five_vertex();
        let f = minimum_spanning_forest(&g).unwrap();
        assert_eq!(f.weight, 9);
        assert!(f.spanning);

        let mut pairs: Vec<_> = f
            .tree_edges()
            .into_iter()
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
        // Lightest first.
        assert_eq!(f.edges[0], Edge::new(2, 3, 1));
    }

    #[test]
    fn test_disconnected_forest() {
        let g = fixtures::two_components();
        let f = minimum_spanning_forest(&g).unwrap();
        assert!(!f.spanning);
        assert_eq!(f.edges.len(), 3);
        assert_eq!(f.weight, 1 + 2 + 7);
    }

    #[test]
    fn test_self_loop_rejected() {
        let g = WeightedGraph::new(2, vec![Edge::new(1, 1, 0), Edge::new(1, 2, 5)]).unwrap();
        let f = minimum_spanning_forest(&g).unwrap();
        assert_eq!(f.edges, vec![Edge::new(1, 2, 5)]);
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::new(0, vec![]).unwrap();
        let f = minimum_spanning_forest(&g).unwrap();
        assert!(f.edges.is_empty());
        assert!(f.spanning);
    }

    fn is_accepted(f: &EdgeForest, a: usize, b: usize) -> bool {
        f.edges
            .iter()
            .any(|e| (e.u, e.v) == (a, b) || (e.u, e.v) == (b, a))
    }

    #[test]
    fn test_parent_follows_accepted_edges() {
        let g = fixtures::five_vertex();
        let f = minimum_spanning_forest(&g).unwrap();
        // Rooted at 1: 1-2, 2-3, 3-4, 4-5.
        assert_eq!(f.parent, vec![0, 0, 1, 2, 3, 4]);
        for v in g.vertices() {
            let p = f.parent[v];
            if p != 0 {
                assert!(is_accepted(&f, p, v), "parent[{}]={} is not a tree edge", v, p);
            }
        }
    }

    #[test]
    fn test_parent_roots_each_component() {
        let g = fixtures::two_components();
        let f = minimum_spanning_forest(&g).unwrap();
        assert_eq!(f.parent[1], 0);
        assert_eq!(f.parent[4], 0);
        assert_eq!(f.parent[5], 4);
        assert_eq!(f.parent.iter().skip(1).filter(|&&p| p != 0).count(), 3);
    }

    #[test]
    fn test_set_parent_shares_root() {
        let g = fixtures::five_vertex();
        let f = minimum_spanning_forest(&g).unwrap();
        let root = |mut v: usize| {
            while f.set_parent[v] != v {
                v = f.set_parent[v];
            }
            v
        };
        let r = root(1);
        assert!(g.vertices().all(|v| root(v) == r));
    }
}
