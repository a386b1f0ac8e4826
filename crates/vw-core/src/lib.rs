pub mod config;
pub mod envelope;
pub mod error;
pub mod graph;
pub mod math;
pub mod point;
pub mod polygon;
pub mod snapshot;
pub mod world;

pub use config::WorldConfig;
pub use envelope::Envelope;
pub use error::{GraphError, SnapshotError};
pub use graph::{EdgeId, Graph, VertexId};
pub use point::{Point, Segment};
pub use polygon::Polygon;
pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use world::{RoadSystem, World};
