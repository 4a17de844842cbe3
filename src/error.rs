//! Error types for graph construction and the low-level structures.
//!
//! Precondition violations (bad vertex, misuse of a heap or of the
//! disjoint-set forest) are reported eagerly instead of leaving a
//! structure in a corrupt state. A disconnected graph is not an error.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph store, the heaps, the disjoint-set forest
/// and the input/config collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index outside `[1, vertex_count]`.
    #[error("vertex {vertex} out of range 1..={vertex_count}")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Vertex count beyond [`crate::graph::MAX_VERTICES`].
    #[error("{vertex_count} vertices exceeds the limit of {max}")]
    TooManyVertices { vertex_count: usize, max: usize },

    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },

    #[error("remove called on an empty heap")]
    EmptyHeap,

    #[error("vertex {0} is already in the heap")]
    AlreadyInHeap(usize),

    #[error("vertex {0} is not in the heap")]
    NotInHeap(usize),

    /// `decrease_key` was handed a priority larger than the current one.
    #[error("priority of vertex {vertex} may only decrease")]
    PriorityIncrease { vertex: usize },

    #[error("make_set was never called for vertex {0}")]
    SetNotInitialized(usize),

    #[error("make_set already called for vertex {0}")]
    SetAlreadyInitialized(usize),

    /// `union` takes set roots, not arbitrary members.
    #[error("vertex {0} is not the root of its set")]
    NotARoot(usize),

    #[error("union of root {0} with itself")]
    SameSet(usize),

    /// Malformed edge-list input. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}
