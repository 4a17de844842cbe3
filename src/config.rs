//! Engine configuration, read from JSON.
//!
//! ```json
//! { "start": 2, "algorithms": ["prim", "dijkstra"], "dfs_restart": "from-vertex" }
//! ```
//!
//! Every field is optional.

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;
use serde::{Deserialize, Serialize};

/// Algorithms the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Prim,
    Kruskal,
    Dijkstra,
    DepthFirst,
    BreadthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::Dijkstra,
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
    ];
}

/// Where the depth-first driver re-enters when its outer loop finds a
/// White vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DfsRestart {
    /// Always re-enter at the start vertex. After the first pass the
    /// start is no longer White, so only its component is visited.
    #[default]
    FromStart,
    /// Re-enter at the White loop vertex, covering every component.
    FromVertex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Start vertex for Prim, Dijkstra and both traversals.
    pub start: usize,
    pub algorithms: Vec<Algorithm>,
    pub dfs_restart: DfsRestart,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start: 1,
            algorithms: Algorithm::ALL.to_vec(),
            dfs_restart: DfsRestart::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the config against a concrete graph.
    pub fn validate(&self, graph: &WeightedGraph) -> Result<()> {
        let needs_start = self
            .algorithms
            .iter()
            .any(|a| *a != Algorithm::Kruskal);
        if needs_start && graph.check_vertex(self.start).is_err() {
            return Err(GraphError::Config(format!(
                "start vertex {} not in 1..={}",
                self.start,
                graph.vertex_count()
            )));
        }
        Ok(())
    }
}
