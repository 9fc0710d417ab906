//! A single drifting particle.

use rand::Rng;

/// A single animated point. Radius and opacity are fixed for the particle's
/// lifetime; velocity magnitude is fixed at creation and only its sign flips
/// when a wall is hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Randomly initialize a particle somewhere on a `width` x `height`
    /// surface. Both dimensions must be positive; the field never spawns
    /// particles on a degenerate surface.
    pub fn random(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            vx: rng.gen_range(-0.25..0.25),
            vy: rng.gen_range(-0.25..0.25),
            radius: rng.gen_range(0.5..2.5),
            opacity: rng.gen_range(0.1..0.6),
        }
    }

    /// Move one step and reflect off the surface walls. The velocity sign
    /// flips on the step that crosses a bound; the position is not clamped,
    /// so a particle may overshoot by at most one velocity step before the
    /// next advance brings it back inside.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}
