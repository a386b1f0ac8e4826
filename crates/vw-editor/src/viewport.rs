//! Pan and zoom over the world.
//!
//! Screen → world: `(screen - center) * zoom - offset`. A pan in progress is
//! kept in `drag.offset` and only folded into `offset` when the button is
//! released, so an interrupted pan never corrupts the committed offset.

use crate::input::{InputEvent, PointerButton};
use vw_core::{Point, WorldConfig};
use vw_render::ViewTransform;

/// Middle-button pan in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drag {
    pub start: Point,
    pub end: Point,
    pub offset: Point,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    width: f64,
    height: f64,
    center: Point,
    offset: Point,
    drag: Drag,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, &WorldConfig::default())
    }

    /// Centered on the canvas, with world origin at the top-left corner.
    pub fn with_config(width: f64, height: f64, config: &WorldConfig) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            center,
            offset: -center,
            drag: Drag::default(),
            zoom: config.min_zoom.max(1.0).min(config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Committed pan offset (excludes a pan in progress).
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn drag(&self) -> &Drag {
        &self.drag
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_panning(&self) -> bool {
        self.drag.active
    }

    // ─── Coordinate transforms ──────────────────────────────────────────

    /// Map a screen point to world space. With `subtract_drag`, a pan in
    /// progress is taken into account as well.
    pub fn world_point(&self, screen: Point, subtract_drag: bool) -> Point {
        let view = if subtract_drag {
            self.view_transform()
        } else {
            ViewTransform {
                offset: self.offset,
                ..self.view_transform()
            }
        };
        view.to_world(screen)
    }

    /// Offset the scene is currently drawn with, live pan included.
    pub fn offset_point(&self) -> Point {
        self.offset + self.drag.offset
    }

    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            center: self.center,
            zoom: self.zoom,
            offset: self.offset_point(),
        }
    }

    // ─── Event handlers ─────────────────────────────────────────────────

    /// Dispatch an input event. Returns whether the view changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { button, .. } => match event.position() {
                Some(screen) => self.handle_pointer_down(button, screen),
                None => false,
            },
            InputEvent::PointerMove { .. } => match event.position() {
                Some(screen) => self.handle_pointer_move(screen),
                None => false,
            },
            InputEvent::PointerUp { .. } => self.handle_pointer_up(),
            InputEvent::Wheel { delta_y } => self.handle_wheel(delta_y),
        }
    }

    /// Middle button starts a pan unless one is already running.
    pub fn handle_pointer_down(&mut self, button: PointerButton, screen: Point) -> bool {
        if button != PointerButton::Middle || self.drag.active {
            return false;
        }
        self.drag.start = screen;
        self.drag.active = true;
        true
    }

    pub fn handle_pointer_move(&mut self, screen: Point) -> bool {
        if !self.drag.active {
            return false;
        }
        self.drag.end = screen;
        self.drag.offset = self.drag.end - self.drag.start;
        true
    }

    /// Commit a pan in progress.
    pub fn handle_pointer_up(&mut self) -> bool {
        if !self.drag.active {
            return false;
        }
        self.offset = self.offset + self.drag.offset;
        self.drag = Drag::default();
        log::trace!("pan committed, offset ({}, {})", self.offset.x, self.offset.y);
        true
    }

    /// Step the zoom by the sign of `delta_y`, clamped to the configured
    /// range.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        if delta_y == 0.0 || delta_y.is_nan() {
            return false;
        }
        let previous = self.zoom;
        let zoomed = self.zoom + delta_y.signum() * self.zoom_step;
        self.zoom = zoomed.clamp(self.min_zoom, self.max_zoom);
        self.zoom != previous
    }

    /// Follow a canvas resize. The committed offset is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && height.is_finite()) {
            return;
        }
        self.width = width;
        self.height = height;
        self.center = Point::new(width / 2.0, height / 2.0);
    }
}
