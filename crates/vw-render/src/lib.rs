pub mod draw;
pub mod paint;
pub mod style;

pub use draw::Draw;
pub use paint::{Color, DisplayList, DrawOp, LineStyle, Painter, SegmentStyle, ViewTransform};
pub use style::{GraphStyle, PointStyle, PolygonStyle, RoadStyle};
