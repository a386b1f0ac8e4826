//! Canvas2D painter.
//!
//! Implements `Painter` on top of an HTML `<canvas>` via
//! `CanvasRenderingContext2d`. Every shape call saves and restores the
//! context state, so styles never leak from one call into the next.

use std::f64::consts::TAU;
use vw_core::Point;
use vw_render::{Color, LineStyle, Painter, ViewTransform};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn apply_line(&self, line: &LineStyle) {
        self.ctx.set_stroke_style_str(line.color);
        self.ctx.set_line_width(line.width);
        let dash = js_sys::Array::new();
        for len in line.dash {
            dash.push(&JsValue::from_f64(*len));
        }
        let _ = self.ctx.set_line_dash(&dash);
    }
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_view(&mut self, view: &ViewTransform) {
        let scale = view.scale();
        let _ = self.ctx.translate(view.center.x, view.center.y);
        let _ = self.ctx.scale(scale, scale);
        let _ = self.ctx.translate(view.offset.x, view.offset.y);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, line: &LineStyle) {
        self.ctx.save();
        self.apply_line(line);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Point, to: Point, line: &LineStyle) {
        self.ctx.save();
        self.apply_line(line);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: &LineStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        self.ctx.set_fill_style_str(fill);
        self.apply_line(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.stroke();
        self.ctx.restore();
    }
}
