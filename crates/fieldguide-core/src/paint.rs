//! Drawing seam between the simulations and a 2D surface.
//!
//! Renderers describe a frame as a sequence of [`Painter`] calls. The web
//! front-end implements the trait over `CanvasRenderingContext2d`; tests
//! implement it with a recorder.

use glam::Vec2;
use serde::Deserialize;
use std::fmt;

use crate::host::Viewport;

/// 8-bit RGB with a floating alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// Channel-wise linear interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// How an overlay composites over page content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Screen,
}

impl BlendMode {
    /// CSS `mix-blend-mode` value.
    pub fn css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Screen => "screen",
        }
    }
}

pub trait Painter {
    /// Clear the whole surface.
    fn clear(&mut self, size: Viewport);

    fn set_line_caps_round(&mut self);

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Fill a circle of `radius` with a radial gradient running from the
    /// centre (offset 0) to the rim (offset 1).
    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
}
