//! Constellation particle field simulation.
//!
//! A set of point particles drifts across a 2-D surface, reflecting off the
//! walls. Every frame each particle is drawn as a filled circle and every
//! pair of particles closer than [`LINK_DISTANCE`] is joined by a line whose
//! opacity fades linearly with distance. The simulation knows nothing about
//! terminals or colors: it emits geometry and per-primitive opacity through
//! the [`Surface`] trait and the host resolves colors when it paints.

mod field;
mod particle;
mod surface;

pub use field::{
    AREA_PER_PARTICLE, LINK_DISTANCE, LINK_MAX_OPACITY, MAX_PARTICLES, ParticleField, link_opacity,
};
pub use particle::Particle;
pub use surface::Surface;
