//! Integration tests: graph editor state machine (vw-editor).
//!
//! Drives `GraphEditor` with raw input events against a real `Graph` and
//! `Viewport`, checking states, graph mutations, reports and the overlay
//! it paints.

use pretty_assertions::assert_eq;
use vw_core::{Graph, Point, Segment, VertexId};
use vw_editor::{EditorState, GraphEditor, InputEvent, RecordingReporter, Severity, Viewport};
use vw_render::{DisplayList, DrawOp};

const PRIMARY: i16 = 0;
const MIDDLE: i16 = 1;
const SECONDARY: i16 = 2;

/// Editor, graph and viewport wired together. At zoom 1 with no pan, world
/// and screen coordinates coincide.
struct Rig {
    graph: Graph,
    viewport: Viewport,
    editor: GraphEditor,
    reports: RecordingReporter,
}

impl Rig {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            graph: Graph::new(),
            viewport: Viewport::new(800.0, 600.0),
            editor: GraphEditor::default(),
            reports: RecordingReporter::new(),
        }
    }

    fn with_vertices(points: &[(f64, f64)]) -> (Self, Vec<VertexId>) {
        let mut rig = Self::new();
        let ids = points
            .iter()
            .map(|&(x, y)| rig.graph.add_vertex(Point::new(x, y)).unwrap())
            .collect();
        (rig, ids)
    }

    fn send(&mut self, event: InputEvent) -> bool {
        self.viewport.handle(&event);
        self.editor
            .handle(&event, &mut self.graph, &self.viewport, &mut self.reports)
    }

    fn move_to(&mut self, x: f64, y: f64) -> bool {
        self.send(InputEvent::from_pointer_move(x, y))
    }

    fn press(&mut self, x: f64, y: f64, button: i16) -> bool {
        self.send(InputEvent::from_pointer_down(x, y, button))
    }

    fn release(&mut self, x: f64, y: f64, button: i16) -> bool {
        self.send(InputEvent::from_pointer_up(x, y, button))
    }

    fn click(&mut self, x: f64, y: f64) {
        self.move_to(x, y);
        self.press(x, y, PRIMARY);
        self.release(x, y, PRIMARY);
    }

    fn overlay(&self) -> DisplayList {
        let mut list = DisplayList::new();
        self.editor.display(&mut list, &self.graph);
        list
    }
}

// ─── Hover ──────────────────────────────────────────────────────────────

#[test]
fn hover_needs_the_cursor_within_threshold() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0)]);

    rig.move_to(105.0, 100.0);
    assert_eq!(rig.editor.state(), EditorState::Hovering(ids[0]));

    rig.move_to(120.0, 100.0);
    assert_eq!(rig.editor.state(), EditorState::Idle);
}

#[test]
fn hover_threshold_scales_with_zoom() {
    let (mut rig, ids) = Rig::with_vertices(&[(400.0, 300.0)]);

    // Zoom 1: 14 world units away.
    rig.move_to(414.0, 300.0);
    assert_eq!(rig.editor.state(), EditorState::Idle);

    for _ in 0..10 {
        rig.send(InputEvent::from_wheel(100.0));
    }
    assert!((rig.viewport.zoom() - 2.0).abs() < 1e-9);

    // Zoom 2: 7 screen pixels are 14 world units, inside the 20 unit radius.
    rig.move_to(407.0, 300.0);
    assert_eq!(rig.editor.state(), EditorState::Hovering(ids[0]));
}

#[test]
fn nearest_vertex_wins() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0), (108.0, 100.0)]);
    rig.move_to(105.0, 100.0);
    assert_eq!(rig.editor.hovered(), Some(ids[1]));
}

// ─── Adding and joining ────────────────────────────────────────────────

#[test]
fn clicks_on_empty_space_build_a_path() {
    let mut rig = Rig::new();
    rig.click(100.0, 100.0);
    rig.click(200.0, 100.0);
    rig.click(300.0, 100.0);

    assert_eq!(rig.graph.vertex_count(), 3);
    assert_eq!(
        rig.graph.segments(),
        vec![
            Segment::new(Point::new(100.0, 100.0), Point::new(200.0, 100.0)),
            Segment::new(Point::new(200.0, 100.0), Point::new(300.0, 100.0)),
        ]
    );
    let last = rig.graph.vertex_at(Point::new(300.0, 100.0));
    assert_eq!(rig.editor.selected(), last);
    assert_eq!(rig.reports.count(Severity::Error), 0);
}

#[test]
fn clicking_a_vertex_joins_it_to_the_selection_and_drags_it() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0), (300.0, 100.0)]);
    let (a, b) = (ids[0], ids[1]);

    rig.move_to(100.0, 100.0);
    rig.press(100.0, 100.0, PRIMARY);
    assert_eq!(rig.editor.state(), EditorState::Dragging { selected: a });
    rig.release(100.0, 100.0, PRIMARY);
    assert_eq!(
        rig.editor.state(),
        EditorState::Selecting {
            selected: a,
            hovered: Some(a),
        }
    );

    rig.move_to(300.0, 102.0);
    assert_eq!(
        rig.editor.state(),
        EditorState::Selecting {
            selected: a,
            hovered: Some(b),
        }
    );
    rig.press(300.0, 102.0, PRIMARY);
    assert_eq!(rig.editor.state(), EditorState::Dragging { selected: b });
    assert_eq!(rig.graph.edge_count(), 1);

    rig.move_to(350.0, 150.0);
    assert_eq!(rig.graph.vertex(b), Some(Point::new(350.0, 150.0)));
    assert_eq!(
        rig.graph.segments(),
        vec![Segment::new(Point::new(100.0, 100.0), Point::new(350.0, 150.0))]
    );

    rig.release(350.0, 150.0, PRIMARY);
    assert_eq!(rig.editor.selected(), Some(b));
    assert!(!rig.editor.state().is_dragging());
}

#[test]
fn fast_drag_never_loses_the_vertex() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0), (130.0, 100.0)]);

    rig.move_to(100.0, 100.0);
    rig.press(100.0, 100.0, PRIMARY);
    rig.move_to(700.0, 500.0);
    rig.move_to(131.0, 100.0);

    assert_eq!(rig.graph.vertex(ids[0]), Some(Point::new(131.0, 100.0)));
    assert_eq!(rig.graph.vertex(ids[1]), Some(Point::new(130.0, 100.0)));
    assert_eq!(rig.editor.hovered(), Some(ids[0]));
}

#[test]
fn duplicate_edge_is_rejected_and_reported() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0), (300.0, 100.0)]);
    rig.graph.connect(ids[0], ids[1]).unwrap();

    rig.click(100.0, 100.0);
    rig.click(300.0, 100.0);

    assert_eq!(rig.graph.edge_count(), 1);
    assert_eq!(rig.reports.count(Severity::Error), 1);
    assert_eq!(rig.editor.selected(), Some(ids[1]));
}

// ─── Removing ──────────────────────────────────────────────────────────

#[test]
fn right_click_deselects_before_it_removes() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0), (300.0, 100.0)]);
    rig.graph.connect(ids[0], ids[1]).unwrap();
    rig.click(300.0, 100.0);

    rig.press(300.0, 100.0, SECONDARY);
    assert_eq!(rig.editor.state(), EditorState::Hovering(ids[1]));
    assert_eq!(rig.graph.vertex_count(), 2);

    rig.press(300.0, 100.0, SECONDARY);
    assert_eq!(rig.editor.state(), EditorState::Idle);
    assert_eq!(rig.graph.points(), vec![Point::new(100.0, 100.0)]);
    assert_eq!(rig.graph.edge_count(), 0);
}

#[test]
fn right_click_while_dragging_only_deselects() {
    let (mut rig, ids) = Rig::with_vertices(&[(100.0, 100.0)]);
    rig.move_to(100.0, 100.0);
    rig.press(100.0, 100.0, PRIMARY);
    rig.press(100.0, 100.0, SECONDARY);

    assert_eq!(rig.editor.state(), EditorState::Hovering(ids[0]));
    assert_eq!(rig.graph.vertex_count(), 1);
}

#[test]
fn right_click_on_nothing_is_a_no_op() {
    let mut rig = Rig::new();
    assert!(!rig.press(10.0, 10.0, SECONDARY));
    assert!(rig.reports.entries().is_empty());
}

// ─── Viewport interplay ────────────────────────────────────────────────

#[test]
fn panning_keeps_the_cursor_on_the_same_world_point() {
    let (mut rig, ids) = Rig::with_vertices(&[(400.0, 300.0)]);

    rig.press(400.0, 300.0, MIDDLE);
    assert_eq!(rig.graph.vertex_count(), 1, "middle press never edits");
    rig.move_to(450.0, 300.0);

    // The scene moved with the cursor, so the cursor is still on the vertex.
    assert_eq!(rig.editor.mouse(), Some(Point::new(400.0, 300.0)));
    assert_eq!(rig.editor.state(), EditorState::Hovering(ids[0]));

    rig.release(450.0, 300.0, MIDDLE);
    assert_eq!(rig.viewport.offset(), Point::new(-350.0, -300.0));
}

// ─── Overlay ───────────────────────────────────────────────────────────

fn dashed_lines(list: &DisplayList) -> Vec<Segment> {
    list.lines()
        .filter(|(_, _, style)| style.is_dashed())
        .map(|(a, b, _)| Segment::new(a, b))
        .collect()
}

#[test]
fn preview_line_runs_to_the_cursor() {
    let mut rig = Rig::new();
    rig.click(100.0, 100.0);
    rig.move_to(250.0, 250.0);

    let list = rig.overlay();
    assert_eq!(
        dashed_lines(&list),
        vec![Segment::new(Point::new(100.0, 100.0), Point::new(250.0, 250.0))]
    );
    let rings: Vec<&str> = list.rings().map(|(_, _, l)| l.color).collect();
    assert_eq!(rings, vec!["orange"]);
}

#[test]
fn preview_line_snaps_to_the_hovered_vertex() {
    let (mut rig, _) = Rig::with_vertices(&[(300.0, 100.0)]);
    rig.click(100.0, 100.0);
    rig.move_to(305.0, 100.0);

    let list = rig.overlay();
    assert_eq!(
        dashed_lines(&list),
        vec![Segment::new(Point::new(100.0, 100.0), Point::new(300.0, 100.0))]
    );
    let rings: Vec<(Point, &str)> = list.rings().map(|(c, _, l)| (c, l.color)).collect();
    assert_eq!(
        rings,
        vec![
            (Point::new(100.0, 100.0), "orange"),
            (Point::new(300.0, 100.0), "yellow"),
        ]
    );
}

#[test]
fn hovering_the_selection_draws_it_once_without_preview() {
    let mut rig = Rig::new();
    rig.click(100.0, 100.0);

    let list = rig.overlay();
    assert!(dashed_lines(&list).is_empty());
    let rings: Vec<&str> = list.rings().map(|(_, _, l)| l.color).collect();
    assert_eq!(rings, vec!["orange", "yellow"]);
    // One vertex from the graph pass, one redrawn by the overlay.
    let dots = list
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
        .count();
    assert_eq!(dots, 2);
}

#[test]
fn idle_editor_draws_just_the_graph() {
    let (mut rig, _) = Rig::with_vertices(&[(100.0, 100.0), (300.0, 100.0)]);
    rig.move_to(500.0, 500.0);
    let list = rig.overlay();
    assert_eq!(list.len(), 2);
    assert_eq!(list.rings().count(), 0);
}
