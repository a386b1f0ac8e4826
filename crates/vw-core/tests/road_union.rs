//! Integration tests: envelopes and their union as road borders.

use std::f64::consts::PI;
use vw_core::math::distance;
use vw_core::{Envelope, Graph, Point, Polygon, RoadSystem, Segment, World, WorldConfig};

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn close(a: Point, b: Point) -> bool {
    distance(a, b) < EPS
}

fn same_segment(a: &Segment, b: &Segment) -> bool {
    (close(a.start, b.start) && close(a.end, b.end))
        || (close(a.start, b.end) && close(a.end, b.start))
}

fn point_segment_distance(point: Point, s: &Segment) -> f64 {
    let d = s.end - s.start;
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == 0.0 {
        return distance(point, s.start);
    }
    let t = (((point.x - s.start.x) * d.x + (point.y - s.start.y) * d.y) / len2).clamp(0.0, 1.0);
    distance(point, s.start + d * t)
}

/// The four-vertex layout the editor seeds itself with.
fn demo_graph() -> Graph {
    let mut g = Graph::new();
    let v1 = g.add_vertex(p(200.0, 200.0)).unwrap();
    let v2 = g.add_vertex(p(500.0, 200.0)).unwrap();
    let v3 = g.add_vertex(p(400.0, 400.0)).unwrap();
    let v4 = g.add_vertex(p(100.0, 300.0)).unwrap();
    g.connect(v2, v1).unwrap();
    g.connect(v2, v3).unwrap();
    g.connect(v2, v4).unwrap();
    g.connect(v3, v4).unwrap();
    g
}

fn l_shape_envelopes() -> Vec<Polygon> {
    vec![
        Envelope::new(Segment::new(p(0.0, 0.0), p(10.0, 0.0)), 4.0, 1).into_polygon(),
        Envelope::new(Segment::new(p(10.0, 0.0), p(10.0, 10.0)), 4.0, 1).into_polygon(),
    ]
}

#[test]
fn l_shaped_road_has_an_l_shaped_border() {
    let mut polys = l_shape_envelopes();
    let border = Polygon::union(&mut polys);

    let expected = [
        Segment::new(p(0.0, 2.0), p(0.0, -2.0)),
        Segment::new(p(0.0, -2.0), p(10.0, -2.0)),
        Segment::new(p(10.0, -2.0), p(10.0, 0.0)),
        Segment::new(p(8.0, 2.0), p(0.0, 2.0)),
        Segment::new(p(10.0, 0.0), p(12.0, 0.0)),
        Segment::new(p(12.0, 0.0), p(12.0, 10.0)),
        Segment::new(p(12.0, 10.0), p(8.0, 10.0)),
        Segment::new(p(8.0, 10.0), p(8.0, 2.0)),
    ];
    assert_eq!(border.len(), expected.len(), "border: {border:?}");
    for want in &expected {
        assert!(
            border.iter().any(|got| same_segment(got, want)),
            "missing {want:?} in {border:?}"
        );
    }
}

#[test]
fn union_does_not_depend_on_polygon_order() {
    let mut forward = l_shape_envelopes();
    let mut reversed = l_shape_envelopes();
    reversed.reverse();

    let a = Polygon::union(&mut forward);
    let b = Polygon::union(&mut reversed);
    assert_eq!(a.len(), b.len());
    for s in &a {
        assert!(b.iter().any(|t| same_segment(s, t)), "{s:?} only in one order");
    }
}

#[test]
fn single_envelope_border_is_its_outline() {
    let env = Envelope::new(Segment::new(p(0.0, 0.0), p(50.0, 20.0)), 10.0, 6);
    let mut polys = vec![env.polygon().clone()];
    let border = Polygon::union(&mut polys);
    assert_eq!(border, env.polygon().segments().to_vec());
}

#[test]
fn border_never_cuts_into_a_road() {
    let config = WorldConfig::default();
    let mut roads = RoadSystem::new(config.road_width, config.road_roundness);
    let graph = demo_graph();
    assert!(roads.generate(&graph));

    // Every envelope contains the disc of this radius around its skeleton.
    let radius = config.road_width / 2.0;
    let inner = radius * (PI / (2.0 * f64::from(config.road_roundness))).cos();

    assert!(!roads.borders().is_empty());
    for border in roads.borders() {
        let mid = border.midpoint();
        for skeleton in graph.segments() {
            let d = point_segment_distance(mid, &skeleton);
            assert!(
                d >= inner - 1e-6,
                "border piece {border:?} lies {d} from {skeleton:?}"
            );
        }
    }
}

#[test]
fn world_follows_graph_edits() {
    let mut graph = demo_graph();
    let mut world = World::new(&WorldConfig::default());
    world.generate(&graph);
    assert_eq!(world.roads().envelopes().len(), 4);

    graph.remove_vertex(p(500.0, 200.0)).unwrap();
    assert!(world.generate(&graph));
    assert_eq!(world.roads().envelopes().len(), 1);
    assert_eq!(
        world.roads().borders(),
        world.roads().envelopes()[0].polygon().segments()
    );
}

#[test]
fn straight_path_border_stays_outside_both_envelopes() {
    let skeletons = [
        Segment::new(p(0.0, 0.0), p(100.0, 0.0)),
        Segment::new(p(100.0, 0.0), p(200.0, 0.0)),
    ];
    let mut polys: Vec<Polygon> = skeletons
        .iter()
        .map(|s| Envelope::new(*s, 20.0, 4).into_polygon())
        .collect();
    let border = Polygon::union(&mut polys);
    assert!(!border.is_empty());

    // Slightly thinner copies sit strictly inside the roads; no border piece
    // may reach into them.
    for skeleton in &skeletons {
        let core = Envelope::new(*skeleton, 18.0, 4);
        for s in &border {
            assert!(
                !core.polygon().contains_segment(s),
                "{s:?} cuts into the road around {skeleton:?}"
            );
        }
    }
}
