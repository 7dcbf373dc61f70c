//! Short-lived ember sparks thrown from a clicked element.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::config::SparkConfig;
use crate::host::{Host, HostEvent, SurfaceSpec, Viewport, SPARKS_Z};
use crate::motion::MotionPreference;
use crate::paint::{BlendMode, Painter, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub origin: Vec2,
    /// Total displacement over the spark's lifetime.
    pub travel: Vec2,
    pub color: [u8; 3],
    pub age: Duration,
}

impl Spark {
    /// Life fraction in [0, 1].
    pub fn progress(&self, lifetime: Duration) -> f32 {
        if lifetime.is_zero() {
            return 1.0;
        }
        (self.age.as_secs_f32() / lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position(&self, lifetime: Duration) -> Vec2 {
        self.origin + self.travel * ease_out(self.progress(lifetime))
    }
}

#[inline]
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub struct SparkField {
    sparks: Vec<Spark>,
    viewport: Viewport,
    config: SparkConfig,
}

pub fn surface_spec(viewport: Viewport) -> SurfaceSpec {
    SurfaceSpec {
        name: "sparks",
        size: viewport,
        z_index: SPARKS_Z,
        blend: BlendMode::Normal,
        opacity: 1.0,
        initial_opacity: 1.0,
    }
}

impl SparkField {
    pub fn new(config: SparkConfig, viewport: Viewport) -> Self {
        Self {
            sparks: Vec::new(),
            viewport,
            config,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn is_idle(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn lifetime(&self) -> Duration {
        Duration::from_millis(self.config.lifetime_ms)
    }

    /// Throw one burst of sparks around `center`.
    pub fn burst<R: Rng + ?Sized>(&mut self, center: Vec2, rng: &mut R) {
        let [spread_x, spread_y] = self.config.spread;
        let [rise_min, rise_max] = self.config.rise;
        for _ in 0..self.config.per_burst {
            let origin = center
                + Vec2::new(
                    (rng.gen::<f32>() - 0.5) * spread_x,
                    (rng.gen::<f32>() - 0.5) * spread_y,
                );
            let travel = Vec2::new(
                (rng.gen::<f32>() - 0.5) * self.config.travel_x,
                -(rise_min + rng.gen::<f32>() * (rise_max - rise_min)),
            );
            let color = *self.config.colors.choose(rng).unwrap_or(&[255, 69, 0]);
            self.sparks.push(Spark {
                origin,
                travel,
                color,
                age: Duration::ZERO,
            });
        }
    }

    /// Age every spark by `dt` and drop the expired ones.
    pub fn step(&mut self, dt: Duration) {
        let lifetime = self.lifetime();
        for s in &mut self.sparks {
            s.age += dt;
        }
        self.sparks.retain(|s| s.age < lifetime);
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.viewport);
        let lifetime = self.lifetime();
        for s in &self.sparks {
            let t = s.progress(lifetime);
            let alpha = 1.0 - t;
            let pos = s.position(lifetime);
            let radius = self.config.radius * (1.0 - 0.5 * t);
            painter.fill_circle(pos, radius * 3.0, Rgba::rgb(s.color, alpha * 0.25));
            painter.fill_circle(pos, radius, Rgba::rgb(s.color, alpha));
        }
    }

    pub fn tick<P: Painter + ?Sized>(&mut self, dt: Duration, painter: &mut P) {
        self.step(dt);
        self.draw(painter);
    }
}

pub struct MountedSparks<S> {
    pub surface: S,
    pub field: SparkField,
}

/// Mount the spark overlay; skipped entirely under reduced motion.
pub fn mount<H: Host>(
    host: &mut H,
    config: SparkConfig,
    motion: MotionPreference,
) -> Option<MountedSparks<H::Surface>> {
    if motion.is_reduced() {
        return None;
    }
    let viewport = host.viewport();
    let surface = host.create_surface(&surface_spec(viewport))?;
    host.subscribe(HostEvent::Click);
    host.subscribe(HostEvent::Resize);
    Some(MountedSparks {
        surface,
        field: SparkField::new(config, viewport),
    })
}
