//! Browser surface.
//!
//! `WasmGraph` owns a parsed graph; each algorithm call returns a plain
//! JS object built with `serde-wasm-bindgen`. Errors become JS `Error`s.

use crate::algorithms::{
    breadth_first, depth_first, minimum_spanning_forest, minimum_spanning_tree,
    shortest_path_tree,
};
use crate::config::{DfsRestart, EngineConfig};
use crate::engine;
use crate::error::GraphError;
use crate::graph::WeightedGraph;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_error(err: GraphError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

/// Weighted undirected graph exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmGraph {
    inner: WeightedGraph,
}

#[wasm_bindgen]
impl WasmGraph {
    /// Parse the `V E` / `u v weight` edge-list text format.
    #[wasm_bindgen(js_name = fromText)]
    pub fn from_text(text: &str) -> Result<WasmGraph, JsValue> {
        let inner = text.parse::<WeightedGraph>().map_err(js_error)?;
        Ok(WasmGraph { inner })
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Adjacency lists rendered with letter labels.
    pub fn display(&self) -> String {
        self.inner.to_string()
    }

    pub fn prim(&self, start: usize) -> Result<JsValue, JsValue> {
        to_js(&minimum_spanning_tree(&self.inner, start).map_err(js_error)?)
    }

    pub fn kruskal(&self) -> Result<JsValue, JsValue> {
        to_js(&minimum_spanning_forest(&self.inner).map_err(js_error)?)
    }

    pub fn dijkstra(&self, source: usize) -> Result<JsValue, JsValue> {
        to_js(&shortest_path_tree(&self.inner, source).map_err(js_error)?)
    }

    /// Depth-first tree. `forest` restarts at every unvisited vertex.
    #[wasm_bindgen(js_name = depthFirst)]
    pub fn depth_first(&self, start: usize, forest: bool) -> Result<JsValue, JsValue> {
        let restart = if forest {
            DfsRestart::FromVertex
        } else {
            DfsRestart::FromStart
        };
        to_js(&depth_first(&self.inner, start, restart).map_err(js_error)?)
    }

    #[wasm_bindgen(js_name = breadthFirst)]
    pub fn breadth_first(&self, start: usize) -> Result<JsValue, JsValue> {
        to_js(&breadth_first(&self.inner, start).map_err(js_error)?)
    }

    /// Run the algorithms named in a JSON config; returns a JSON string.
    pub fn run(&self, config_json: &str) -> Result<String, JsValue> {
        let config = EngineConfig::from_json(config_json).map_err(js_error)?;
        let report = engine::run(&self.inner, &config).map_err(js_error)?;
        serde_json::to_string(&report).map_err(|e| js_error(e.into()))
    }
}
