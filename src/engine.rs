//! Config-driven runner: executes the configured algorithms against one
//! graph and collects serializable reports.

use crate::algorithms::{
    breadth_first, depth_first, minimum_spanning_forest, minimum_spanning_tree,
    shortest_path_tree,
};
use crate::config::{Algorithm, EngineConfig};
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::reachability::components;
use crate::tree::{EdgeForest, ShortestPathTree, SpanningTree, TraversalTree};
use serde::Serialize;

/// Output of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum Report {
    Prim(SpanningTree),
    Kruskal(EdgeForest),
    Dijkstra(ShortestPathTree),
    DepthFirst(TraversalTree),
    BreadthFirst(TraversalTree),
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub components: Vec<Vec<usize>>,
    pub reports: Vec<Report>,
}

/// Run a single algorithm.
pub fn run_one(
    graph: &WeightedGraph,
    config: &EngineConfig,
    algorithm: Algorithm,
) -> Result<Report> {
    let start = config.start;
    Ok(match algorithm {
        Algorithm::Prim => Report::Prim(minimum_spanning_tree(graph, start)?),
        Algorithm::Kruskal => Report::Kruskal(minimum_spanning_forest(graph)?),
        Algorithm::Dijkstra => Report::Dijkstra(shortest_path_tree(graph, start)?),
        Algorithm::DepthFirst => {
            Report::DepthFirst(depth_first(graph, start, config.dfs_restart)?)
        }
        Algorithm::BreadthFirst => Report::BreadthFirst(breadth_first(graph, start)?),
    })
}

/// Run every configured algorithm in order.
pub fn run(graph: &WeightedGraph, config: &EngineConfig) -> Result<RunReport> {
    config.validate(graph)?;
    log::debug!("running {:?} from {}", config.algorithms, config.start);

    let reports = config
        .algorithms
        .iter()
        .map(|&a| run_one(graph, config, a))
        .collect::<Result<Vec<_>>>()?;

    Ok(RunReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        components: components(graph),
        reports,
    })
}
