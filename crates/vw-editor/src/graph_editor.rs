//! Mouse-driven graph editing.
//!
//! | Input | Effect |
//! |-------|--------|
//! | **Move** | Hover the nearest vertex; while dragging, move the dragged vertex |
//! | **Left press** on a vertex | Select it (joining it to the previous selection) and start dragging |
//! | **Left press** on empty space | Add a vertex, join it to the previous selection, select it |
//! | **Right press** | Deselect; with nothing selected, remove the hovered vertex |
//! | **Release** | Stop dragging |
//!
//! The middle button and the wheel belong to the viewport and are ignored
//! here.

use crate::input::{InputEvent, PointerButton};
use crate::report::Reporter;
use crate::viewport::Viewport;
use vw_core::math::nearest_vertex;
use vw_core::{Graph, Point, Segment, VertexId, WorldConfig};
use vw_render::{Draw, GraphStyle, LineStyle, Painter};

/// Dashed line from the selection to the cursor.
pub const PREVIEW_LINE: LineStyle = LineStyle::dashed("#323232", 2.0, &[3.0, 3.0]);

/// Where the editor is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// Cursor over a vertex, nothing selected.
    Hovering(VertexId),
    /// A vertex is selected; the cursor may be over another (or the same)
    /// vertex.
    Selecting {
        selected: VertexId,
        hovered: Option<VertexId>,
    },
    /// The selected vertex follows the cursor. It counts as hovered.
    Dragging { selected: VertexId },
}

impl EditorState {
    fn from_parts(selected: Option<VertexId>, hovered: Option<VertexId>) -> Self {
        match (selected, hovered) {
            (Some(selected), hovered) => Self::Selecting { selected, hovered },
            (None, Some(hovered)) => Self::Hovering(hovered),
            (None, None) => Self::Idle,
        }
    }

    pub fn selected(&self) -> Option<VertexId> {
        match *self {
            Self::Selecting { selected, .. } | Self::Dragging { selected } => Some(selected),
            Self::Idle | Self::Hovering(_) => None,
        }
    }

    pub fn hovered(&self) -> Option<VertexId> {
        match *self {
            Self::Hovering(hovered) => Some(hovered),
            Self::Selecting { hovered, .. } => hovered,
            Self::Dragging { selected } => Some(selected),
            Self::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GraphEditor {
    state: EditorState,
    /// Last cursor position in world space.
    mouse: Option<Point>,
    /// Hover radius in screen pixels.
    hover_threshold: f64,
    graph_style: GraphStyle,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new(&WorldConfig::default())
    }
}

impl GraphEditor {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            state: EditorState::Idle,
            mouse: None,
            hover_threshold: config.hover_threshold,
            graph_style: GraphStyle::default(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn mouse(&self) -> Option<Point> {
        self.mouse
    }

    pub fn selected(&self) -> Option<VertexId> {
        self.state.selected()
    }

    pub fn hovered(&self) -> Option<VertexId> {
        self.state.hovered()
    }

    /// Forget selection, hover and cursor.
    pub fn reset(&mut self) {
        self.state = EditorState::Idle;
        self.mouse = None;
    }

    /// Dispatch an input event. Returns whether anything visible changed.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        graph: &mut Graph,
        viewport: &Viewport,
        reporter: &mut dyn Reporter,
    ) -> bool {
        let before = (self.state, graph.revision());
        if let Some(screen) = event.position() {
            self.mouse = Some(viewport.world_point(screen, true));
        }

        match *event {
            InputEvent::PointerMove { .. } => {
                self.handle_pointer_move(graph, viewport);
                // The preview line follows the cursor.
                if self.state.selected().is_some() {
                    return true;
                }
            }
            InputEvent::PointerDown { button, .. } => {
                if !self.state.is_dragging() {
                    self.refresh_hover(graph, viewport);
                }
                match button {
                    PointerButton::Primary => self.handle_primary_down(graph, reporter),
                    PointerButton::Secondary => self.handle_secondary_down(graph, reporter),
                    PointerButton::Middle | PointerButton::Other(_) => {}
                }
            }
            InputEvent::PointerUp { .. } => self.handle_pointer_up(),
            InputEvent::Wheel { .. } => {}
        }

        if before.0 != self.state {
            log::trace!("editor {:?} -> {:?}", before.0, self.state);
        }
        before != (self.state, graph.revision())
    }

    fn handle_pointer_move(&mut self, graph: &mut Graph, viewport: &Viewport) {
        let Some(mouse) = self.mouse else {
            return;
        };
        if let EditorState::Dragging { selected } = self.state {
            if graph.vertex(selected).is_some() {
                graph.move_vertex(selected, mouse);
            } else {
                self.state = EditorState::Idle;
            }
            return;
        }
        self.refresh_hover(graph, viewport);
    }

    fn refresh_hover(&mut self, graph: &Graph, viewport: &Viewport) {
        let hovered = self.mouse.and_then(|mouse| {
            let threshold = self.hover_threshold * viewport.zoom();
            nearest_vertex(mouse, graph.vertices(), threshold).map(|(id, _)| id)
        });
        let selected = self.state.selected().filter(|id| graph.vertex(*id).is_some());
        self.state = EditorState::from_parts(selected, hovered);
    }

    fn handle_primary_down(&mut self, graph: &mut Graph, reporter: &mut dyn Reporter) {
        if let Some(hovered) = self.state.hovered() {
            self.select(hovered, graph, reporter);
            self.state = EditorState::Dragging { selected: hovered };
            return;
        }

        let Some(mouse) = self.mouse else {
            return;
        };
        let added = match graph.add_vertex(mouse) {
            Ok(id) => {
                reporter.info(&format!("vertex added at ({}, {})", mouse.x, mouse.y));
                Some(id)
            }
            Err(err) => {
                reporter.failure("adding vertex failed", &err);
                graph.vertex_at(mouse)
            }
        };
        if let Some(id) = added {
            self.select(id, graph, reporter);
            self.state = EditorState::Selecting {
                selected: id,
                hovered: Some(id),
            };
        }
    }

    /// Make `id` the selection, first joining it to the previous one.
    fn select(&mut self, id: VertexId, graph: &mut Graph, reporter: &mut dyn Reporter) {
        let Some(previous) = self.state.selected() else {
            return;
        };
        if previous == id {
            return;
        }
        match graph.connect(previous, id) {
            Ok(edge) => reporter.info(&format!("edge {edge} added ({previous} - {id})")),
            Err(err) => reporter.failure("adding edge failed", &err),
        }
    }

    fn handle_secondary_down(&mut self, graph: &mut Graph, reporter: &mut dyn Reporter) {
        match self.state {
            EditorState::Dragging { selected } => {
                self.state = EditorState::Hovering(selected);
            }
            EditorState::Selecting { hovered, .. } => {
                self.state = EditorState::from_parts(None, hovered);
            }
            EditorState::Hovering(hovered) => {
                match graph.remove_vertex_by_id(hovered) {
                    Ok(at) => reporter.info(&format!("vertex removed at ({}, {})", at.x, at.y)),
                    Err(err) => reporter.failure("removing vertex failed", &err),
                }
                self.state = EditorState::Idle;
            }
            EditorState::Idle => {}
        }
    }

    fn handle_pointer_up(&mut self) {
        if let EditorState::Dragging { selected } = self.state {
            self.state = EditorState::Selecting {
                selected,
                hovered: Some(selected),
            };
        }
    }

    // ─── Display ────────────────────────────────────────────────────────

    /// Draw the graph plus the selection, hover and preview overlays.
    pub fn display(&self, painter: &mut dyn Painter, graph: &Graph) {
        graph.draw(painter, &self.graph_style);

        let vertex_style = self.graph_style.vertex;
        let selected = self.state.selected().and_then(|id| graph.vertex(id));
        let hovered = self.state.hovered().and_then(|id| graph.vertex(id));

        if self.state.selected().is_some() && self.state.selected() == self.state.hovered() {
            if let Some(point) = selected {
                point.draw(painter, &vertex_style.selected().highlighted());
            }
            return;
        }

        if let Some(point) = selected {
            if let Some(target) = hovered.or(self.mouse) {
                Segment::new(point, target).draw(painter, &PREVIEW_LINE);
            }
            point.draw(painter, &vertex_style.selected());
        }
        if let Some(point) = hovered {
            point.draw(painter, &vertex_style.highlighted());
        }
    }
}
