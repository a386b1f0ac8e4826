//! The world derived from the editor graph: one envelope per edge, and the
//! union of those envelopes as the road border.

use crate::config::WorldConfig;
use crate::envelope::Envelope;
use crate::graph::Graph;
use crate::point::Segment;
use crate::polygon::Polygon;

/// Roads generated from a graph.
///
/// Regeneration is keyed on `Graph::revision`, so calling `generate` every
/// frame only does work after the graph actually changed.
#[derive(Debug, Clone)]
pub struct RoadSystem {
    road_width: f64,
    roundness: u32,
    envelopes: Vec<Envelope>,
    borders: Vec<Segment>,
    built_revision: Option<u64>,
}

impl RoadSystem {
    pub fn new(road_width: f64, roundness: u32) -> Self {
        Self {
            road_width,
            roundness,
            envelopes: Vec::new(),
            borders: Vec::new(),
            built_revision: None,
        }
    }

    pub fn road_width(&self) -> f64 {
        self.road_width
    }

    pub fn roundness(&self) -> u32 {
        self.roundness
    }

    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    pub fn borders(&self) -> &[Segment] {
        &self.borders
    }

    /// Rebuild if the graph changed since the last build. Returns whether a
    /// rebuild happened.
    pub fn generate(&mut self, graph: &Graph) -> bool {
        if self.built_revision == Some(graph.revision()) {
            return false;
        }
        self.rebuild(graph);
        true
    }

    /// Rebuild unconditionally.
    pub fn rebuild(&mut self, graph: &Graph) {
        self.envelopes = graph
            .segments()
            .into_iter()
            .map(|edge| Envelope::new(edge, self.road_width, self.roundness))
            .collect();

        let mut polygons: Vec<Polygon> = self
            .envelopes
            .iter()
            .map(|env| env.polygon().clone())
            .collect();
        self.borders = Polygon::union(&mut polygons);
        self.built_revision = Some(graph.revision());

        log::debug!(
            "generated {} envelopes, {} border segments (graph rev {})",
            self.envelopes.len(),
            self.borders.len(),
            graph.revision()
        );
    }

    /// Forget the last build so the next `generate` rebuilds.
    pub fn invalidate(&mut self) {
        self.built_revision = None;
    }
}

/// The virtual world. Currently just its road system.
#[derive(Debug, Clone)]
pub struct World {
    roads: RoadSystem,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            roads: RoadSystem::new(config.road_width, config.road_roundness),
        }
    }

    pub fn roads(&self) -> &RoadSystem {
        &self.roads
    }

    pub fn generate(&mut self, graph: &Graph) -> bool {
        self.roads.generate(graph)
    }

    pub fn invalidate(&mut self) {
        self.roads.invalidate();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(&WorldConfig::default())
    }
}
