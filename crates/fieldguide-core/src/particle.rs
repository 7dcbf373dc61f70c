use glam::Vec2;
use rand::Rng;

use crate::host::Viewport;

/// A constellation star: position and per-frame velocity in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    pub const fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Uniform position over `bounds`, velocity in `±max_speed` per axis.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport, max_speed: f32) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.width.max(0.0),
            rng.gen::<f32>() * bounds.height.max(0.0),
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
        );
        Self { position, velocity }
    }

    /// Advance one frame and bounce off the edges of `bounds`.
    ///
    /// The velocity is pointed back inside rather than negated, so a
    /// particle left outside after a shrink keeps heading home instead of
    /// flipping every frame.
    pub fn step(&mut self, bounds: Viewport) {
        self.position += self.velocity;
        if self.position.x < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y.abs();
        }
    }
}
