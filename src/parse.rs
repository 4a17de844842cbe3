//! Edge-list text format.
//!
//! ```text
//! V E
//! u v weight     (E times)
//! ```
//!
//! Fields are separated by any run of whitespace. Blank lines are
//! skipped; anything after the `E`-th edge is ignored.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Weight, WeightedGraph, MAX_VERTICES};
use std::str::FromStr;

/// Parse an edge list into a graph.
pub fn parse_edge_list(input: &str) -> Result<WeightedGraph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line_no, header) = lines.next().ok_or_else(|| GraphError::Parse {
        line: 1,
        message: "missing `V E` header".into(),
    })?;
    let [vertex_count, edge_count] = fields::<2>(line_no, header)?;
    if vertex_count > MAX_VERTICES {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!(
                "vertex count {} exceeds the limit of {}",
                vertex_count, MAX_VERTICES
            ),
        });
    }

    let mut edges = Vec::with_capacity(edge_count.min(1 << 16));
    let mut last_line = line_no;
    for _ in 0..edge_count {
        let (line_no, line) = lines.next().ok_or_else(|| GraphError::Parse {
            line: last_line + 1,
            message: format!("expected {} edges, found {}", edge_count, edges.len()),
        })?;
        last_line = line_no;

        let [u, v, w] = fields::<3>(line_no, line)?;
        for x in [u, v] {
            if x == 0 || x > vertex_count {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("vertex {} out of range 1..={}", x, vertex_count),
                });
            }
        }
        let weight = Weight::try_from(w).map_err(|_| GraphError::Parse {
            line: line_no,
            message: format!("weight {} too large", w),
        })?;
        edges.push(Edge::new(u, v, weight));
    }

    WeightedGraph::new(vertex_count, edges)
}

fn fields<const N: usize>(line_no: usize, line: &str) -> Result<[usize; N]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != N {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!("expected {} fields, found {}", N, parts.len()),
        });
    }

    let mut out = [0usize; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|_| GraphError::Parse {
            line: line_no,
            message: format!("`{}` is not a non-negative integer", part),
        })?;
    }
    Ok(out)
}

impl FromStr for WeightedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        parse_edge_list(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "5 6\n1 2 2\n1 3 3\n2 3 1\n2 4 5\n3 4 4\n4 5 2\n";

    #[test]
    fn test_parse_sample() {
        let g = parse_edge_list(SAMPLE).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.edges()[3], Edge::new(2, 4, 5));
    }

    #[test]
    fn test_irregular_whitespace() {
        let g: WeightedGraph = "\n 3   2 \n1  2\t4\n\n2 3     9\n".parse().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges()[1], Edge::new(2, 3, 9));
    }

    #[test]
    fn test_missing_header() {
        let err = parse_edge_list("  \n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_huge_vertex_count_rejected() {
        for input in ["18446744073709551615 0\n", "1000000000000 0\n"] {
            let err = parse_edge_list(input).unwrap_err();
            assert!(matches!(err, GraphError::Parse { line: 1, .. }), "{:?}", err);
        }
        let err = parse_edge_list("\n\n16777217 0\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_too_few_edges() {
        let err = parse_edge_list("3 2\n1 2 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_bad_token() {
        let err = parse_edge_list("3 1\n1 x 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse_edge_list("3 1\n1 2 -4\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_edge_list("3 1\n1 2\n").unwrap_err();
        assert_eq!(
            err,
            GraphError::Parse {
                line: 2,
                message: "expected 3 fields, found 2".into()
            }
        );
    }

    #[test]
    fn test_vertex_out_of_range() {
        let err = parse_edge_list("3 1\n1 4 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_trailing_lines_ignored() {
        let g = parse_edge_list("2 1\n1 2 1\nnot an edge\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }
}
