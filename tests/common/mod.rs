// Shared doubles for the host-side tests.
#![allow(dead_code)]

use fieldguide_core::{GradientStop, Host, HostEvent, Painter, Rgba, SurfaceSpec, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Viewport),
    RoundCaps,
    Segment {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Glow {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
}

impl RecordingPainter {
    pub fn segments(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Segment { .. }))
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count()
    }

    pub fn glows(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Glow { .. }))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, size: Viewport) {
        self.ops.push(Op::Clear(size));
    }

    fn set_line_caps_round(&mut self) {
        self.ops.push(Op::RoundCaps);
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(Op::Segment {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.ops.push(Op::Glow {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }
}

/// Host that hands out numbered surfaces and records subscriptions.
pub struct FakeHost {
    pub viewport: Viewport,
    pub specs: Vec<SurfaceSpec>,
    pub subscriptions: Vec<HostEvent>,
    pub fail_surfaces: bool,
}

impl FakeHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            specs: Vec::new(),
            subscriptions: Vec::new(),
            fail_surfaces: false,
        }
    }
}

impl Host for FakeHost {
    type Surface = usize;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Option<usize> {
        if self.fail_surfaces {
            return None;
        }
        self.specs.push(spec.clone());
        Some(self.specs.len() - 1)
    }

    fn subscribe(&mut self, event: HostEvent) {
        self.subscriptions.push(event);
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
