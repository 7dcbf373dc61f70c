//! Ember cursor trail: a bounded pointer history drawn as a tapering,
//! three-layer streak with a heat-reactive glow at the pointer.

use glam::Vec2;
use std::collections::VecDeque;

use crate::config::TrailConfig;
use crate::host::{Host, HostEvent, SurfaceSpec, Viewport, TRAIL_Z};
use crate::motion::MotionPreference;
use crate::paint::{BlendMode, GradientStop, Painter, Rgba};

/// Oldest-first pointer history with FIFO eviction.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Vec2> + '_ {
        self.points.iter()
    }

    /// Consecutive point pairs, oldest first.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Distance between the two newest points, 0 with fewer than two.
    pub fn last_step(&self) -> f32 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        self.points[n - 1].distance(self.points[n - 2])
    }
}

/// Normalise a per-frame travel distance into [0, 1].
pub fn heat_from_distance(distance: f32, scale: f32) -> f32 {
    let h = distance / scale;
    if h.is_nan() {
        0.0
    } else {
        h.clamp(0.0, 1.0)
    }
}

/// Glow and core appearance for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatStyle {
    pub glow_radius: f32,
    pub glow_stops: [GradientStop; 4],
    pub core_radius: f32,
    pub core_color: Rgba,
}

impl HeatStyle {
    pub fn at(heat: f32, config: &TrailConfig) -> Self {
        let h = if heat.is_nan() { 0.0 } else { heat.clamp(0.0, 1.0) };
        let (idle, hot) = (&config.idle, &config.hot);
        let lerp = |a: f32, b: f32| a + (b - a) * h;
        Self {
            glow_radius: lerp(idle.glow_radius, hot.glow_radius),
            glow_stops: [
                GradientStop::new(0.0, idle.glow[0].lerp(hot.glow[0], h)),
                GradientStop::new(0.3, idle.glow[1].lerp(hot.glow[1], h)),
                GradientStop::new(0.6, idle.glow[2].lerp(hot.glow[2], h)),
                GradientStop::new(1.0, config.glow_rim),
            ],
            core_radius: lerp(idle.core_radius, hot.core_radius),
            core_color: idle.core.lerp(hot.core, h),
        }
    }
}

pub struct CursorTrail {
    buffer: TrailBuffer,
    pointer: Option<Vec2>,
    viewport: Viewport,
    config: TrailConfig,
}

pub fn surface_spec(viewport: Viewport, config: &TrailConfig) -> SurfaceSpec {
    SurfaceSpec {
        name: "cursor-trail",
        size: viewport,
        z_index: TRAIL_Z,
        blend: BlendMode::Screen,
        opacity: config.opacity,
        initial_opacity: config.opacity,
    }
}

impl CursorTrail {
    pub fn new(config: TrailConfig, viewport: Viewport) -> Self {
        Self {
            buffer: TrailBuffer::new(config.capacity),
            pointer: None,
            viewport,
            config,
        }
    }

    /// Record the latest pointer position; sampled on the next tick.
    pub fn set_pointer(&mut self, position: Vec2) {
        if position.is_finite() {
            self.pointer = Some(position);
        } else {
            log::debug!("dropping non-finite pointer sample {:?}", position);
        }
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    #[inline]
    pub fn buffer(&self) -> &TrailBuffer {
        &self.buffer
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Append the latest pointer position to the trail. Nothing is appended
    /// until the pointer has moved at least once.
    pub fn sample(&mut self) {
        if let Some(p) = self.pointer {
            self.buffer.push(p);
        }
    }

    pub fn heat(&self) -> f32 {
        heat_from_distance(self.buffer.last_step(), self.config.heat_scale)
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.viewport);
        self.draw_streak(painter);
        if let Some(pos) = self.pointer {
            let style = HeatStyle::at(self.heat(), &self.config);
            painter.fill_radial_glow(pos, style.glow_radius, &style.glow_stops);
            painter.fill_circle(pos, style.core_radius, style.core_color);
        }
    }

    fn draw_streak<P: Painter + ?Sized>(&self, painter: &mut P) {
        let n = self.buffer.len();
        if n <= 2 {
            return;
        }
        painter.set_line_caps_round();
        for layer in &self.config.layers {
            let offset = Vec2::from(layer.offset);
            for (i, (from, to)) in self.buffer.segments().enumerate() {
                let progress = (i + 1) as f32 / n as f32;
                let shift = offset * (1.0 - progress);
                let color = Rgba::rgb(layer.color, progress * self.config.max_opacity);
                painter.stroke_segment(from + shift, to + shift, color, progress * layer.max_width);
            }
        }
    }

    /// One frame: sample the pointer, then repaint.
    pub fn tick<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.sample();
        self.draw(painter);
    }
}

pub struct MountedTrail<S> {
    pub surface: S,
    pub trail: CursorTrail,
}

/// Mount the trail overlay. Under reduced motion nothing is created and no
/// listener is attached.
pub fn mount<H: Host>(
    host: &mut H,
    config: TrailConfig,
    motion: MotionPreference,
) -> Option<MountedTrail<H::Surface>> {
    if motion.is_reduced() {
        log::debug!("cursor trail skipped: reduced motion");
        return None;
    }
    let viewport = host.viewport();
    let surface = host.create_surface(&surface_spec(viewport, &config))?;
    host.subscribe(HostEvent::PointerMove);
    host.subscribe(HostEvent::Resize);
    Some(MountedTrail {
        surface,
        trail: CursorTrail::new(config, viewport),
    })
}
