//! End-to-end runs through the public API, starting from edge-list text.

use graph_lists_wasm::algorithms::{
    breadth_first, depth_first, minimum_spanning_forest, minimum_spanning_tree,
    shortest_path_tree,
};
use graph_lists_wasm::engine::{self, Report};
use graph_lists_wasm::{parse_edge_list, DfsRestart, EngineConfig, INFINITY};

const SAMPLE: &str = "5 6\n1 2 2\n1 3 3\n2 3 1\n2 4 5\n3 4 4\n4 5 2\n";

// {1, 2, 3, 4} is a square with a diagonal; {5, 6, 7} a path.
const SPLIT: &str = "7 7\n1 2 1\n2 3 2\n3 4 3\n4 1 4\n1 3 5\n5 6 1\n6 7 1\n";

#[test]
fn test_sample_mst_and_spt() {
    let g = parse_edge_list(SAMPLE).unwrap();

    let prim = minimum_spanning_tree(&g, 1).unwrap();
    let kruskal = minimum_spanning_forest(&g).unwrap();
    assert_eq!(prim.weight, 9);
    assert_eq!(kruskal.weight, 9);

    let spt = shortest_path_tree(&g, 1).unwrap();
    assert_eq!(spt.dist[1..].to_vec(), vec![0, 2, 3, 7, 9]);
}

#[test]
fn test_other_component_untouched() {
    let g = parse_edge_list(SPLIT).unwrap();
    let prim = minimum_spanning_tree(&g, 2).unwrap();
    let spt = shortest_path_tree(&g, 2).unwrap();
    let bfs = breadth_first(&g, 2).unwrap();
    let dfs = depth_first(&g, 2, DfsRestart::FromStart).unwrap();

    for v in 5..=7 {
        assert_eq!(prim.parent[v], 0);
        assert_eq!(prim.key[v], INFINITY);
        assert_eq!(spt.parent[v], 0);
        assert_eq!(spt.dist[v], INFINITY);
        assert_eq!(bfs.parent[v], 0);
        assert_eq!(bfs.dist[v], INFINITY);
        assert_eq!(dfs.parent[v], 0);
        assert_eq!(dfs.dist[v], INFINITY);
    }
    assert_eq!(prim.weight, 1 + 2 + 3);
    assert!(!prim.spanning);

    let forest = minimum_spanning_forest(&g).unwrap();
    assert_eq!(forest.edges.len(), 5);
    assert_eq!(forest.weight, 1 + 2 + 3 + 1 + 1);
}

#[test]
fn test_engine_json_report() {
    let g = parse_edge_list(SAMPLE).unwrap();
    let cfg = EngineConfig::from_json(r#"{"start": 1, "algorithms": ["dijkstra"]}"#).unwrap();
    let out = engine::run(&g, &cfg).unwrap();
    assert!(matches!(&out.reports[..], [Report::Dijkstra(t)] if t.dist[5] == 9));

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["reports"][0]["algorithm"], "dijkstra");
    assert_eq!(json["reports"][0]["dist"][4], 7);
    assert_eq!(json["components"][0].as_array().unwrap().len(), 5);
}
