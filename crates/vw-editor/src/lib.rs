pub mod graph_editor;
pub mod input;
pub mod report;
pub mod session;
pub mod viewport;

pub use graph_editor::{EditorState, GraphEditor};
pub use input::{InputEvent, PointerButton};
pub use report::{LogReporter, RecordingReporter, Reporter, Severity};
pub use session::EditorSession;
pub use viewport::{Drag, Viewport};
