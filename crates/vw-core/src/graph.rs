//! Undirected graph of road vertices and edges.
//!
//! The graph owns every vertex. Edges reference vertices by `VertexId`, so a
//! vertex dragged with `move_vertex` drags all of its edges along with it.
//! Duplicate vertices (same coordinates), duplicate edges (same unordered
//! endpoint pair), and self-loops are rejected at insertion.
//!
//! Iteration follows insertion order. `petgraph`'s stable graph reuses
//! freed slots, so the order is kept explicitly next to it.

use crate::error::GraphError;
use crate::point::{Point, Segment};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;
use smallvec::SmallVec;
use std::fmt;

/// Stable handle to a vertex. Stays valid until that vertex is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(NodeIndex);

/// Stable handle to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(EdgeIndex);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0.index())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0.index())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: StableUnGraph<Point, ()>,
    vertex_order: Vec<NodeIndex>,
    edge_order: Vec<EdgeIndex>,
    /// Bumped on every successful mutation, including vertex moves.
    revision: u64,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_order.is_empty()
    }

    /// Change counter. Anything derived from the graph can compare this
    /// against the value it was built from to decide whether to rebuild.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.vertex_order
            .iter()
            .map(|&idx| (VertexId(idx), self.graph[idx]))
    }

    pub fn points(&self) -> Vec<Point> {
        self.vertices().map(|(_, p)| p).collect()
    }

    /// Edges in insertion order, as segments built from current positions.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Segment)> + '_ {
        self.edge_order
            .iter()
            .filter_map(|&e| self.segment_of(e).map(|s| (EdgeId(e), s)))
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.edges().map(|(_, s)| s).collect()
    }

    /// Vertex-id pairs for every edge, in insertion order.
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edge_order.iter().filter_map(|&e| {
            self.graph
                .edge_endpoints(e)
                .map(|(a, b)| (VertexId(a), VertexId(b)))
        })
    }

    pub fn vertex(&self, id: VertexId) -> Option<Point> {
        self.graph.node_weight(id.0).copied()
    }

    pub fn edge(&self, id: EdgeId) -> Option<Segment> {
        self.segment_of(id.0)
    }

    /// First vertex (in insertion order) sitting exactly at `point`.
    pub fn vertex_at(&self, point: Point) -> Option<VertexId> {
        self.vertices()
            .find(|(_, p)| *p == point)
            .map(|(id, _)| id)
    }

    pub fn contains_vertex(&self, point: Point) -> bool {
        self.vertex_at(point).is_some()
    }

    pub fn contains_edge(&self, segment: &Segment) -> bool {
        self.find_edge(segment).is_some()
    }

    /// First edge (in insertion order) equal to `segment`.
    pub fn find_edge(&self, segment: &Segment) -> Option<EdgeId> {
        self.edges()
            .find(|(_, s)| s == segment)
            .map(|(id, _)| id)
    }

    /// Every edge that has `point` as one of its endpoints.
    pub fn edges_with_vertex(&self, point: Point) -> Vec<Segment> {
        self.edges()
            .filter(|(_, s)| s.includes(point))
            .map(|(_, s)| s)
            .collect()
    }

    fn segment_of(&self, e: EdgeIndex) -> Option<Segment> {
        let (a, b) = self.graph.edge_endpoints(e)?;
        Some(Segment::new(self.graph[a], self.graph[b]))
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Insert a vertex unless one already sits at the same coordinates.
    pub fn add_vertex(&mut self, point: Point) -> Result<VertexId, GraphError> {
        if self.contains_vertex(point) {
            return Err(GraphError::DuplicateVertex(point));
        }
        let idx = self.graph.add_node(point);
        self.vertex_order.push(idx);
        self.revision += 1;
        Ok(VertexId(idx))
    }

    pub fn try_add_vertex(&mut self, point: Point) -> bool {
        self.add_vertex(point).is_ok()
    }

    /// Join two existing vertices with an edge.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, GraphError> {
        let pa = self.vertex(a).ok_or(GraphError::UnknownVertex(a))?;
        let pb = self.vertex(b).ok_or(GraphError::UnknownVertex(b))?;

        let segment = Segment::new(pa, pb);
        if a == b || segment.is_degenerate() {
            return Err(GraphError::DegenerateEdge(pa));
        }
        if self.contains_edge(&segment) {
            return Err(GraphError::DuplicateEdge(pa, pb));
        }

        let e = self.graph.add_edge(a.0, b.0, ());
        self.edge_order.push(e);
        self.revision += 1;
        Ok(EdgeId(e))
    }

    /// Insert an edge given by its endpoint coordinates. Both endpoints must
    /// already be vertices of the graph.
    pub fn add_edge(&mut self, segment: Segment) -> Result<EdgeId, GraphError> {
        if segment.is_degenerate() {
            return Err(GraphError::DegenerateEdge(segment.start));
        }
        let a = self
            .vertex_at(segment.start)
            .ok_or(GraphError::MissingVertex(segment.start))?;
        let b = self
            .vertex_at(segment.end)
            .ok_or(GraphError::MissingVertex(segment.end))?;
        self.connect(a, b)
    }

    pub fn try_add_edge(&mut self, segment: Segment) -> bool {
        self.add_edge(segment).is_ok()
    }

    /// Remove the vertex at `point` together with every edge touching it.
    pub fn remove_vertex(&mut self, point: Point) -> Result<(), GraphError> {
        if self.is_empty() {
            return Err(GraphError::NoVertices);
        }
        let id = self
            .vertex_at(point)
            .ok_or(GraphError::MissingVertex(point))?;
        self.remove_vertex_by_id(id).map(|_| ())
    }

    /// Remove a vertex and its incident edges. Returns the removed position.
    pub fn remove_vertex_by_id(&mut self, id: VertexId) -> Result<Point, GraphError> {
        if self.is_empty() {
            return Err(GraphError::NoVertices);
        }
        if self.vertex(id).is_none() {
            return Err(GraphError::UnknownVertex(id));
        }

        let incident: SmallVec<[EdgeIndex; 4]> =
            self.graph.edges(id.0).map(|edge| edge.id()).collect();
        for e in &incident {
            self.graph.remove_edge(*e);
        }
        self.edge_order.retain(|e| !incident.contains(e));

        let removed = self
            .graph
            .remove_node(id.0)
            .ok_or(GraphError::UnknownVertex(id))?;
        self.vertex_order.retain(|idx| *idx != id.0);
        self.revision += 1;
        log::trace!("removed {id} and {} incident edges", incident.len());
        Ok(removed)
    }

    /// Remove the first edge equal to `segment`.
    pub fn remove_edge(&mut self, segment: &Segment) -> Result<(), GraphError> {
        if self.edge_order.is_empty() {
            return Err(GraphError::NoEdges);
        }
        let id = self
            .find_edge(segment)
            .ok_or(GraphError::MissingEdge(segment.start, segment.end))?;
        self.graph.remove_edge(id.0);
        self.edge_order.retain(|e| *e != id.0);
        self.revision += 1;
        Ok(())
    }

    /// Overwrite a vertex position in place. Edges follow automatically.
    ///
    /// Refused (returns `false`) when another vertex already sits at `to`.
    pub fn move_vertex(&mut self, id: VertexId, to: Point) -> bool {
        if self.vertex_at(to).is_some_and(|other| other != id) {
            return false;
        }
        match self.graph.node_weight_mut(id.0) {
            Some(p) if *p != to => {
                *p = to;
                self.revision += 1;
                true
            }
            Some(_) => false,
            None => false,
        }
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.graph.clear();
        self.vertex_order.clear();
        self.edge_order.clear();
        self.revision += 1;
    }
}
