//! Drifting star field with proximity edges, drawn behind the page content.

use rand::Rng;
use std::time::Duration;

use crate::config::ConstellationConfig;
use crate::host::{Host, HostEvent, SurfaceSpec, Viewport, CONSTELLATION_Z};
use crate::motion::MotionPreference;
use crate::paint::{BlendMode, Painter};
use crate::particle::Particle;

pub struct Constellation {
    particles: Vec<Particle>,
    bounds: Viewport,
    config: ConstellationConfig,
    motion: MotionPreference,
}

/// Surface covering the viewport width and a multiple of its height.
pub fn surface_size(viewport: Viewport, config: &ConstellationConfig) -> Viewport {
    Viewport::new(viewport.width, viewport.height * config.height_multiplier)
}

pub fn surface_spec(viewport: Viewport, config: &ConstellationConfig) -> SurfaceSpec {
    SurfaceSpec {
        name: "constellation",
        size: surface_size(viewport, config),
        z_index: CONSTELLATION_Z,
        blend: BlendMode::Normal,
        opacity: config.opacity,
        initial_opacity: 0.0,
    }
}

impl Constellation {
    pub fn new<R: Rng + ?Sized>(
        config: ConstellationConfig,
        viewport: Viewport,
        motion: MotionPreference,
        rng: &mut R,
    ) -> Self {
        let bounds = surface_size(viewport, &config);
        let speed = if motion.allows_motion() {
            config.drift_speed
        } else {
            0.0
        };
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, bounds, speed))
            .collect();
        Self {
            particles,
            bounds,
            config,
            motion,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    /// Adopt a new viewport. Particles keep their positions; any left outside
    /// drift back in through the normal edge bounce.
    pub fn resize(&mut self, viewport: Viewport) {
        self.bounds = surface_size(viewport, &self.config);
    }

    pub fn step(&mut self) {
        if self.motion.is_reduced() {
            return;
        }
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.step(bounds);
        }
    }

    /// Visit every unordered pair exactly once with its distance.
    pub fn for_each_pair(&self, mut f: impl FnMut(usize, usize, f32)) {
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                f(i, j, a.position.distance(b.position));
            }
        }
    }

    /// Visit every pair closer than the connection distance.
    pub fn for_each_connection(&self, mut f: impl FnMut(&Particle, &Particle)) {
        let limit = self.config.connection_distance;
        self.for_each_pair(|i, j, dist| {
            if dist < limit {
                f(&self.particles[i], &self.particles[j]);
            }
        });
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.bounds);
        let line = self.config.line_color;
        let width = self.config.line_width;
        self.for_each_connection(|a, b| {
            painter.stroke_segment(a.position, b.position, line, width);
        });
        for p in &self.particles {
            painter.fill_circle(p.position, self.config.star_radius, self.config.star_color);
        }
    }

    /// One frame: advance, then repaint.
    pub fn tick<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.step();
        self.draw(painter);
    }

    /// Vertical translation for the given page scroll, px.
    pub fn parallax_offset(&self, scroll_y: f64) -> f64 {
        if self.motion.is_reduced() {
            0.0
        } else {
            scroll_y * self.config.parallax as f64
        }
    }

    /// Layer opacity a given time after mount: hidden until the reveal delay
    /// has passed, then the configured opacity (the fade itself is a CSS
    /// transition).
    pub fn presented_opacity(&self, since_mount: Duration) -> f32 {
        if since_mount >= Duration::from_millis(self.config.reveal_delay_ms) {
            self.config.opacity
        } else {
            0.0
        }
    }
}

pub struct MountedConstellation<S> {
    pub surface: S,
    pub constellation: Constellation,
}

/// Create the background surface and star field and subscribe to resizes.
pub fn mount<H: Host, R: Rng + ?Sized>(
    host: &mut H,
    config: ConstellationConfig,
    motion: MotionPreference,
    rng: &mut R,
) -> Option<MountedConstellation<H::Surface>> {
    let viewport = host.viewport();
    let surface = host.create_surface(&surface_spec(viewport, &config))?;
    host.subscribe(HostEvent::Resize);
    let constellation = Constellation::new(config, viewport, motion, rng);
    log::debug!(
        "constellation mounted: {} stars over {}x{}",
        constellation.particles.len(),
        constellation.bounds.width,
        constellation.bounds.height
    );
    Some(MountedConstellation {
        surface,
        constellation,
    })
}
