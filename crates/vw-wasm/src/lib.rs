//! WASM bridge for VW: exposes the editing session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the canvas
//! and the animation loop; it forwards mouse events to `WorldCanvas` and
//! calls `render` once per frame.

mod console;
mod render2d;
mod storage;

use render2d::CanvasPainter;
use vw_core::{Graph, WorldConfig};
use vw_editor::{EditorSession, InputEvent};
use vw_render::DisplayList;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The main WASM-facing canvas controller.
///
/// All interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct WorldCanvas {
    session: EditorSession,
}

#[wasm_bindgen]
impl WorldCanvas {
    /// Create a canvas controller with default settings. The graph is
    /// restored from session storage when one was saved, otherwise the demo
    /// layout is used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self::build(width, height, WorldConfig::default())
    }

    /// Like `new`, with a JSON `WorldConfig` (camelCase keys, all optional).
    pub fn with_config(width: f64, height: f64, config_json: &str) -> Result<WorldCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = WorldConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
        Ok(Self::build(width, height, config))
    }

    fn build(width: f64, height: f64, config: WorldConfig) -> Self {
        let graph = stored_graph().unwrap_or_else(EditorSession::demo_graph);
        Self {
            session: EditorSession::new(width, height, config).with_graph(graph),
        }
    }

    // ─── Input ──────────────────────────────────────────────────────────

    /// Handle a mouse-down. `button` is the DOM `MouseEvent.button` code.
    /// Returns true if the canvas needs repainting.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64, button: i16) -> bool {
        self.session
            .handle(&InputEvent::from_pointer_down(x, y, button))
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.handle(&InputEvent::from_pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64, button: i16) -> bool {
        self.session
            .handle(&InputEvent::from_pointer_up(x, y, button))
    }

    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        self.session.handle(&InputEvent::from_wheel(delta_y))
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize(width, height);
    }

    // ─── Rendering ──────────────────────────────────────────────────────

    /// Paint one frame to a Canvas2D context.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) {
        let mut painter = CanvasPainter::new(ctx);
        self.session.frame(&mut painter);
    }

    /// The next frame as a JSON array of draw operations.
    pub fn display_list_json(&mut self) -> String {
        let mut list = DisplayList::new();
        self.session.frame(&mut list);
        serde_json::to_string(list.ops()).unwrap_or_else(|_| "[]".to_string())
    }

    // ─── Persistence ────────────────────────────────────────────────────

    /// Save the graph to session storage. Returns true on success.
    pub fn save(&mut self) -> bool {
        match self.session.save() {
            Ok(json) => storage::write(storage::GRAPH_KEY, &json),
            Err(e) => {
                log::error!("saving graph failed: {e}");
                false
            }
        }
    }

    /// Reload the graph from session storage. Returns true if a saved
    /// graph was found and loaded.
    pub fn load(&mut self) -> bool {
        storage::read(storage::GRAPH_KEY).is_some_and(|json| self.session.load(&json).is_ok())
    }

    /// The graph as a JSON snapshot, or an empty string on failure.
    pub fn snapshot_json(&mut self) -> String {
        self.session.save().unwrap_or_default()
    }

    /// Replace the graph from a JSON snapshot. Returns false (and keeps the
    /// current graph) if the snapshot is invalid.
    pub fn set_snapshot_json(&mut self, json: &str) -> bool {
        self.session.load(json).is_ok()
    }

    /// Empty the graph.
    pub fn dispose(&mut self) {
        self.session.dispose();
    }

    pub fn vertex_count(&self) -> usize {
        self.session.graph().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.session.graph().edge_count()
    }
}

fn stored_graph() -> Option<Graph> {
    let json = storage::read(storage::GRAPH_KEY)?;
    match Graph::from_json(&json) {
        Ok(graph) => Some(graph),
        Err(e) => {
            log::warn!("ignoring stored graph: {e}");
            None
        }
    }
}

// ─── Page helpers ────────────────────────────────────────────────────────

/// Route `log` output to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    console::install(log::LevelFilter::Info);
}

/// Keep the browser context menu off the canvas so the right button can
/// deselect and delete.
#[wasm_bindgen]
pub fn install_context_menu_guard(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let guard = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
    });
    canvas.add_event_listener_with_callback("contextmenu", guard.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    guard.forget();
    Ok(())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("VW WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
