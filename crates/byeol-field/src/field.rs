//! The particle field: ownership, per-frame stepping, and the pairwise
//! constellation pass.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::particle::Particle;
use crate::surface::Surface;

/// Surface area, in square units, per spawned particle.
pub const AREA_PER_PARTICLE: f32 = 15_000.0;
/// Hard cap on the particle count regardless of surface size.
pub const MAX_PARTICLES: usize = 80;
/// Maximum distance at which two particles are linked by a line.
pub const LINK_DISTANCE: f32 = 150.0;
/// Link opacity at distance zero; fades linearly to zero at [`LINK_DISTANCE`].
pub const LINK_MAX_OPACITY: f32 = 0.15;

/// Opacity of the link between two particles `distance` apart, if they are
/// close enough to link at all.
pub fn link_opacity(distance: f32) -> Option<f32> {
    (distance < LINK_DISTANCE).then(|| (1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY)
}

/// A field of drifting particles on a `width` x `height` surface.
///
/// The field exclusively owns its particle collection. The whole set is
/// created at construction and replaced wholesale on resize; no particle is
/// individually destroyed or respawned in between.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    /// Optional cap on how many particles are updated and drawn per frame.
    /// Never shrinks the stored collection.
    render_cap: Option<usize>,
    rng: ChaCha8Rng,
}

impl ParticleField {
    /// Create a field seeded from the system clock.
    pub fn new(width: f32, height: f32) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(width, height, seed)
    }

    /// Create a deterministic field. Two fields built with the same seed and
    /// dimensions hold identical particles.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            render_cap: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        field.initialize(width, height);
        field
    }

    /// Particle count for a surface: density-proportional to area, with a
    /// hard cap and no floor. Degenerate surfaces get zero particles.
    pub fn count_for(width: f32, height: f32) -> usize {
        let area = width * height;
        if !(area > 0.0) {
            return 0;
        }
        ((area / AREA_PER_PARTICLE) as usize).min(MAX_PARTICLES)
    }

    /// (Re)populate the particle set for the given dimensions. Discards the
    /// old set entirely; each new particle is independently randomized.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let count = Self::count_for(width, height);
        self.particles = (0..count)
            .map(|_| Particle::random(width, height, &mut self.rng))
            .collect();
    }

    /// Full reset for new dimensions. A same-size call still re-randomizes
    /// every particle; this is a reset, not a no-op.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// Limit how many particles are updated and drawn each frame (used on
    /// narrow viewports). The stored collection is untouched, so lifting the
    /// cap brings the hidden particles back exactly where they were.
    pub fn set_render_cap(&mut self, cap: Option<usize>) {
        self.render_cap = cap;
    }

    fn rendered(&self) -> usize {
        self.render_cap
            .map_or(self.particles.len(), |cap| cap.min(self.particles.len()))
    }

    /// Advance and draw one frame: clear, step and draw each particle, then
    /// run the pairwise link pass. The scan is O(n²) with n <= 80, so one
    /// tick is trivially bounded.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        surface.clear();

        let n = self.rendered();
        for p in &mut self.particles[..n] {
            p.advance(self.width, self.height);
            surface.fill_circle(p.x, p.y, p.radius, p.opacity);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(opacity) = link_opacity(distance) {
                    surface.line(a.x, a.y, b.x, b.y, opacity);
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current surface dimensions.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
