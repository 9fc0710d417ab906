//! Drawing surface abstraction.

/// A frame's drawing target.
///
/// [`ParticleField::tick`](crate::ParticleField::tick) clears the surface and
/// then emits filled circles and line segments with per-primitive opacity.
/// Implementations resolve the actual color from the active theme when the
/// primitives are painted, so a theme change shows up on the next frame
/// without touching particle state.
pub trait Surface {
    /// Discard everything drawn for the previous frame.
    fn clear(&mut self);

    /// A particle body: filled circle at (`x`, `y`).
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, opacity: f32);

    /// A constellation link between two particles.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, opacity: f32);
}
