use fieldguide_core::{GradientStop, Painter, Rgba, Viewport};
use glam::Vec2;
use gloo_events::EventListener;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::FrameLoop;

pub mod constellation;
pub mod sparks;
pub mod trail;

/// An overlay canvas and its 2D context. The canvas is removed from the
/// page when the surface is dropped.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = context_2d(&canvas);
        Self { canvas, ctx }
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Painter for this frame, or `None` while the context is unavailable
    /// (the caller skips the frame).
    pub fn painter(&mut self) -> Option<CanvasPainter<'_>> {
        if self.ctx.is_none() {
            self.ctx = context_2d(&self.canvas);
        }
        self.ctx.as_ref().map(|ctx| CanvasPainter { ctx })
    }

    /// Match the backing store and CSS box to `size`. Untouched when already
    /// equal, since resizing clears the canvas.
    pub fn set_size(&self, size: Viewport) {
        let w = size.width.max(1.0) as u32;
        let h = size.height.max(1.0) as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            let style = self.canvas.style();
            _ = style.set_property("width", &format!("{}px", w));
            _ = style.set_property("height", &format!("{}px", h));
        }
    }

    pub fn set_style(&self, property: &str, value: &str) {
        _ = self.canvas.style().set_property(property, value);
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

pub struct CanvasPainter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, size: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn set_line_caps_round(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if self.ctx.arc(x, y, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

/// A mounted effect layer. Dropping it stops the frame loop, detaches the
/// listeners and, once the last reference to the layer goes, removes its
/// canvas.
pub struct MountedLayer {
    pub name: &'static str,
    pub frame: FrameLoop,
    pub listeners: Vec<EventListener>,
}

impl Drop for MountedLayer {
    fn drop(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        log::info!("[{}] unmounted", self.name);
    }
}
