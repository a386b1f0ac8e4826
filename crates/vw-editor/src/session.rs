//! One editing session: the graph being edited, the view onto it, the
//! editor state machine, and the world generated from the graph.
//!
//! The session is the single entry point for a host (the browser bridge or
//! a test): feed it input events, ask it to paint a frame, save and load
//! the graph.

use crate::graph_editor::GraphEditor;
use crate::input::InputEvent;
use crate::report::{LogReporter, Reporter, Severity};
use crate::viewport::Viewport;
use vw_core::{Graph, Point, SnapshotError, World, WorldConfig};
use vw_render::{Draw, Painter, RoadStyle};

pub struct EditorSession {
    config: WorldConfig,
    graph: Graph,
    viewport: Viewport,
    editor: GraphEditor,
    world: World,
    road_style: RoadStyle,
    reporter: Box<dyn Reporter>,
}

impl EditorSession {
    /// An empty session that reports through the `log` facade.
    pub fn new(width: f64, height: f64, config: WorldConfig) -> Self {
        Self::with_reporter(width, height, config, Box::new(LogReporter))
    }

    pub fn with_reporter(
        width: f64,
        height: f64,
        config: WorldConfig,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        let config = config.sanitized();
        Self {
            graph: Graph::new(),
            viewport: Viewport::with_config(width, height, &config),
            editor: GraphEditor::new(&config),
            world: World::new(&config),
            road_style: RoadStyle::default(),
            reporter,
            config,
        }
    }

    /// Replace the graph being edited. Selection and hover are dropped.
    #[must_use]
    pub fn with_graph(mut self, graph: Graph) -> Self {
        self.replace_graph(graph);
        self
    }

    /// The four-vertex starter layout shown on first launch.
    pub fn demo_graph() -> Graph {
        let mut graph = Graph::new();
        let ids: Vec<_> = [(200.0, 200.0), (500.0, 200.0), (400.0, 400.0), (100.0, 300.0)]
            .into_iter()
            .filter_map(|(x, y)| match graph.add_vertex(Point::new(x, y)) {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("demo vertex skipped: {err}");
                    None
                }
            })
            .collect();
        for (a, b) in [(1, 0), (1, 2), (1, 3), (2, 3)] {
            if let (Some(&a), Some(&b)) = (ids.get(a), ids.get(b))
                && let Err(err) = graph.connect(a, b)
            {
                log::warn!("demo edge skipped: {err}");
            }
        }
        graph
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn editor(&self) -> &GraphEditor {
        &self.editor
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    // ─── Input ──────────────────────────────────────────────────────────

    /// Route an event to the viewport, then to the editor. Returns whether
    /// the frame needs repainting.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let view_changed = self.viewport.handle(event);
        let edit_changed =
            self.editor
                .handle(event, &mut self.graph, &self.viewport, self.reporter.as_mut());
        view_changed || edit_changed
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    // ─── Frame ──────────────────────────────────────────────────────────

    /// Paint one frame: roads underneath, then the editable graph on top.
    pub fn frame(&mut self, painter: &mut dyn Painter) {
        painter.clear(self.viewport.width(), self.viewport.height());
        painter.set_view(&self.viewport.view_transform());

        self.world.generate(&self.graph);
        self.world.roads().draw(painter, &self.road_style);
        self.editor.display(painter, &self.graph);
    }

    // ─── Persistence ────────────────────────────────────────────────────

    /// Serialize the graph to its JSON snapshot.
    pub fn save(&mut self) -> Result<String, SnapshotError> {
        let json = self.graph.to_json()?;
        self.reporter.info(&format!(
            "graph saved: {} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        ));
        Ok(json)
    }

    /// Replace the graph with one parsed from `json`. On error the current
    /// graph is kept untouched.
    pub fn load(&mut self, json: &str) -> Result<(), SnapshotError> {
        match Graph::from_json(json) {
            Ok(graph) => {
                self.replace_graph(graph);
                self.reporter.info(&format!(
                    "graph loaded: {} vertices, {} edges",
                    self.graph.vertex_count(),
                    self.graph.edge_count()
                ));
                Ok(())
            }
            Err(err) => {
                self.reporter
                    .report(Severity::Error, &format!("loading graph failed: {err}"));
                Err(err)
            }
        }
    }

    /// Empty the graph and reset the editor.
    pub fn dispose(&mut self) {
        self.graph.clear();
        self.editor.reset();
        self.reporter.info("graph disposed");
    }

    fn replace_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.editor.reset();
        // Revisions of different graphs are unrelated.
        self.world.invalidate();
    }
}
