//! Depth-first and breadth-first traversal trees.
//!
//! Both use the White/Gray/Black colouring: White is undiscovered,
//! Gray is discovered but not finished, Black is finished. Each vertex
//! goes White -> Gray -> Black at most once.

use crate::config::DfsRestart;
use crate::error::Result;
use crate::graph::{Neighbors, WeightedGraph};
use crate::tree::{Colour, TraversalTree, INFINITY};
use std::collections::VecDeque;

struct Walk {
    parent: Vec<usize>,
    colour: Vec<Colour>,
    order: Vec<usize>,
    dist: Vec<u64>,
}

impl Walk {
    fn new(n: usize) -> Self {
        Self {
            parent: vec![0; n + 1],
            colour: vec![Colour::White; n + 1],
            order: Vec::with_capacity(n),
            dist: vec![INFINITY; n + 1],
        }
    }

    fn discover(&mut self, v: usize, parent: usize, dist: u64) {
        self.colour[v] = Colour::Gray;
        self.parent[v] = parent;
        self.dist[v] = dist;
        self.order.push(v);
    }

    fn finish(self, start: usize) -> TraversalTree {
        TraversalTree {
            start,
            parent: self.parent,
            colour: self.colour,
            order: self.order,
            dist: self.dist,
        }
    }
}

/// Depth-first traversal from `start`.
///
/// The driver scans vertices in increasing order and, for each one still
/// White, re-enters the visit at the vertex chosen by `restart`. With
/// [`DfsRestart::FromStart`] that is always `start`, so only its
/// component is visited.
pub fn depth_first(
    graph: &WeightedGraph,
    start: usize,
    restart: DfsRestart,
) -> Result<TraversalTree> {
    graph.check_vertex(start)?;
    log::debug!("depth-first from {} ({:?})", start, restart);

    let mut walk = Walk::new(graph.vertex_count());
    for v in graph.vertices() {
        while walk.colour[v] == Colour::White {
            let root = match restart {
                DfsRestart::FromStart => start,
                // The first tree is always rooted at the start vertex.
                DfsRestart::FromVertex if walk.colour[start] == Colour::White => start,
                DfsRestart::FromVertex => v,
            };
            if walk.colour[root] != Colour::White {
                break;
            }
            df_visit(graph, &mut walk, root);
        }
    }

    Ok(walk.finish(start))
}

/// Visit everything reachable from `root`, in the order a recursive
/// visit would, using an explicit stack of adjacency cursors.
fn df_visit(graph: &WeightedGraph, walk: &mut Walk, root: usize) {
    walk.discover(root, 0, 0);
    let mut stack: Vec<(usize, Neighbors<'_>)> = vec![(root, graph.neighbors(root))];

    while let Some(top) = stack.last_mut() {
        let u = top.0;
        let next = top.1.find(|&(x, _)| walk.colour[x] == Colour::White);
        match next {
            Some((x, _)) => {
                let depth = walk.dist[u] + 1;
                walk.discover(x, u, depth);
                log::trace!("dfs {} -> {}", u, x);
                stack.push((x, graph.neighbors(x)));
            }
            None => {
                walk.colour[u] = Colour::Black;
                stack.pop();
            }
        }
    }
}

/// Breadth-first traversal from `start`. `dist` is the hop count.
pub fn breadth_first(graph: &WeightedGraph, start: usize) -> Result<TraversalTree> {
    graph.check_vertex(start)?;
    log::debug!("breadth-first from {}", start);

    let mut walk = Walk::new(graph.vertex_count());
    let mut queue = VecDeque::new();
    walk.discover(start, 0, 0);
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.neighbors(u) {
            if walk.colour[v] == Colour::White {
                let hops = walk.dist[u] + 1;
                walk.discover(v, u, hops);
                queue.push_back(v);
            }
        }
        walk.colour[u] = Colour::Black;
    }

    Ok(walk.finish(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{fixtures, Edge};

    fn has_cycle(parent: &[usize]) -> bool {
        (1..parent.len()).any(|v| {
            let mut x = v;
            for _ in 0..parent.len() {
                x = parent[x];
                if x == 0 {
                    return false;
                }
                if x == v {
                    return true;
                }
            }
            true
        })
    }

    #[test]
    fn test_dfs_order_follows_adjacency() {
        let g = fixtures::five_vertex();
        // adj[1] = 3, 2; adj[3] = 4, 2, 1; adj[4] = 5, 3, 2
        let t = depth_first(&g, 1, DfsRestart::FromStart).unwrap();
        assert_eq!(t.order, vec![1, 3, 4, 5, 2]);
        assert_eq!(t.parent, vec![0, 0, 4, 1, 3, 4]);
        assert_eq!(t.dist[2], 3);
        assert!(g.vertices().all(|v| t.visited(v)));
        assert!(!has_cycle(&t.parent));
    }

    #[test]
    fn test_dfs_each_vertex_once() {
        let g = fixtures::five_vertex();
        let t = depth_first(&g, 3, DfsRestart::FromStart).unwrap();
        let mut seen = t.order.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.parent[3], 0);
    }

    #[test]
    fn test_dfs_from_start_stays_in_component() {
        let g = fixtures::two_components();
        let t = depth_first(&g, 1, DfsRestart::FromStart).unwrap();
        for v in [4, 5] {
            assert_eq!(t.parent[v], 0);
            assert_eq!(t.colour[v], Colour::White);
            assert_eq!(t.dist[v], INFINITY);
        }
        assert_eq!(t.order.len(), 3);
    }

    #[test]
    fn test_dfs_from_vertex_covers_forest() {
        let g = fixtures::two_components();
        let t = depth_first(&g, 1, DfsRestart::FromVertex).unwrap();
        assert_eq!(t.order, vec![1, 3, 2, 4, 5]);
        assert!(g.vertices().all(|v| t.visited(v)));
        // 4 roots the second tree.
        assert_eq!(t.parent[4], 0);
        assert_eq!(t.parent[5], 4);
        assert!(!has_cycle(&t.parent));
    }

    #[test]
    fn test_bfs_hop_distances() {
        let g = fixtures::five_vertex();
        let t = breadth_first(&g, 1).unwrap();
        assert_eq!(t.dist[1..].to_vec(), vec![0, 1, 1, 2, 3]);
        assert_eq!(t.order[0], 1);
        assert_eq!(t.parent[5], 4);
        assert!(g.vertices().all(|v| t.visited(v)));
    }

    #[test]
    fn test_bfs_unreachable() {
        let g = fixtures::two_components();
        let t = breadth_first(&g, 5).unwrap();
        assert_eq!(t.order, vec![5, 4]);
        for v in 1..=3 {
            assert_eq!(t.parent[v], 0);
            assert_eq!(t.dist[v], INFINITY);
            assert!(!t.visited(v));
        }
    }

    #[test]
    fn test_isolated_start() {
        let g = WeightedGraph::new(3, vec![Edge::new(2, 3, 1)]).unwrap();
        let t = breadth_first(&g, 1).unwrap();
        assert_eq!(t.order, vec![1]);
        let t = depth_first(&g, 1, DfsRestart::FromStart).unwrap();
        assert_eq!(t.order, vec![1]);
    }

    #[test]
    fn test_invalid_start() {
        let g = fixtures::five_vertex();
        assert!(matches!(
            breadth_first(&g, 0),
            Err(GraphError::VertexOutOfRange { vertex: 0, .. })
        ));
        assert!(depth_first(&g, 6, DfsRestart::FromStart).is_err());
    }
}
