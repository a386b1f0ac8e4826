use crate::graph::VertexId;
use crate::point::Point;
use thiserror::Error;

/// Why a graph mutation was rejected.
///
/// Rejections are expected during editing (clicking twice on the same spot,
/// closing an edge that already exists) and are never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex ({}, {}) already exists", .0.x, .0.y)]
    DuplicateVertex(Point),

    #[error("vertex ({}, {}) is not part of the graph", .0.x, .0.y)]
    MissingVertex(Point),

    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    #[error("edge endpoints coincide at ({}, {})", .0.x, .0.y)]
    DegenerateEdge(Point),

    #[error("edge ({}, {}) - ({}, {}) already exists", .0.x, .0.y, .1.x, .1.y)]
    DuplicateEdge(Point, Point),

    #[error("edge ({}, {}) - ({}, {}) is not part of the graph", .0.x, .0.y, .1.x, .1.y)]
    MissingEdge(Point, Point),

    #[error("no vertices to remove")]
    NoVertices,

    #[error("no edges to remove")]
    NoEdges,
}

/// Failure while loading a persisted graph snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed graph snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge {edge} references vertex index {index}, but only {count} vertices were saved")]
    IndexOutOfRange {
        edge: usize,
        index: usize,
        count: usize,
    },

    #[error("edge {edge} references ({}, {}), which is not in the vertex list", .point.x, .point.y)]
    DanglingEndpoint { edge: usize, point: Point },

    #[error("vertex {index} at ({}, {}) is a duplicate", .point.x, .point.y)]
    DuplicateVertex { index: usize, point: Point },

    #[error("edge {edge} is invalid: {source}")]
    InvalidEdge {
        edge: usize,
        #[source]
        source: GraphError,
    },
}
