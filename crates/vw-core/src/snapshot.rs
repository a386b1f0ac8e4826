//! JSON snapshot of a graph, for the session store.
//!
//! ```json
//! { "vertices": [{"x": 0, "y": 0}, {"x": 5, "y": 0}],
//!   "edges":    [{"startIndex": 0, "endIndex": 1}] }
//! ```
//!
//! Edges may also be written with explicit endpoints
//! (`{"start": {"x":..,"y":..}, "end": {..}}`); those are matched against the
//! vertex list by coordinates when loading. Saving always uses indices.

use crate::error::SnapshotError;
use crate::graph::{Graph, VertexId};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub vertices: Vec<Point>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeRecord {
    #[serde(rename_all = "camelCase")]
    Indexed { start_index: usize, end_index: usize },
    Points { start: Point, end: Point },
}

impl Graph {
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let index_of: HashMap<VertexId, usize> = self
            .vertices()
            .enumerate()
            .map(|(i, (id, _))| (id, i))
            .collect();

        let edges = self
            .edge_endpoints()
            .filter_map(|(a, b)| {
                Some(EdgeRecord::Indexed {
                    start_index: *index_of.get(&a)?,
                    end_index: *index_of.get(&b)?,
                })
            })
            .collect();

        GraphSnapshot {
            vertices: self.points(),
            edges,
        }
    }

    /// Rebuild a graph from a snapshot. Fails on the first record that would
    /// leave the graph inconsistent.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, SnapshotError> {
        let mut graph = Graph::new();
        let mut ids = Vec::with_capacity(snapshot.vertices.len());

        for (index, point) in snapshot.vertices.iter().enumerate() {
            let id = graph
                .add_vertex(*point)
                .map_err(|_| SnapshotError::DuplicateVertex {
                    index,
                    point: *point,
                })?;
            ids.push(id);
        }

        for (edge, record) in snapshot.edges.iter().enumerate() {
            let (a, b) = match *record {
                EdgeRecord::Indexed {
                    start_index,
                    end_index,
                } => {
                    let lookup = |index: usize| {
                        ids.get(index)
                            .copied()
                            .ok_or(SnapshotError::IndexOutOfRange {
                                edge,
                                index,
                                count: ids.len(),
                            })
                    };
                    (lookup(start_index)?, lookup(end_index)?)
                }
                EdgeRecord::Points { start, end } => {
                    let lookup = |point: Point| {
                        graph
                            .vertex_at(point)
                            .ok_or(SnapshotError::DanglingEndpoint { edge, point })
                    };
                    (lookup(start)?, lookup(end)?)
                }
            };
            graph
                .connect(a, b)
                .map_err(|source| SnapshotError::InvalidEdge { edge, source })?;
        }

        log::debug!(
            "loaded graph snapshot: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }
}
