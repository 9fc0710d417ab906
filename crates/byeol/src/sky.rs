//! Canvas-backed drawing surface for the particle field.

use byeol_core::Rgb;
use byeol_field::Surface;
use ratatui::widgets::canvas::{Context, Line, Points};

/// Simulation units per terminal column.
pub const UNITS_PER_COL: f32 = 10.0;
/// Simulation units per terminal row. Together with [`UNITS_PER_COL`] this
/// puts one braille dot at five units on both axes, so distances stay
/// isotropic and circles stay round.
pub const UNITS_PER_ROW: f32 = 20.0;

/// One recorded frame of field geometry.
///
/// The field is ticked before the terminal draw closure runs (the canvas
/// paint closure only gets `Fn` access), so the frame is recorded here and
/// replayed afterwards with whatever color the theme resolves to at paint
/// time.
#[derive(Debug, Default)]
pub struct SkyFrame {
    circles: Vec<(f32, f32, f32, f32)>,
    lines: Vec<(f32, f32, f32, f32, f32)>,
}

impl Surface for SkyFrame {
    fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, opacity: f32) {
        self.circles.push((x, y, radius, opacity));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, opacity: f32) {
        self.lines.push((x1, y1, x2, y2, opacity));
    }
}

impl SkyFrame {
    /// Paint the recorded frame onto a canvas context. `height` flips the y
    /// axis: the simulation points y down, the canvas points y up.
    pub fn paint(&self, ctx: &mut Context<'_>, color: Rgb, height: f32) {
        for &(x1, y1, x2, y2, opacity) in &self.lines {
            ctx.draw(&Line {
                x1: x1 as f64,
                y1: (height - y1) as f64,
                x2: x2 as f64,
                y2: (height - y2) as f64,
                color: color.to_color(opacity),
            });
        }
        // Particle bodies go on top of the links. Radii (0.5..2.5 units) sit
        // below the five-unit dot pitch, so each circle collapses to a single
        // braille dot.
        ctx.layer();
        for &(x, y, _radius, opacity) in &self.circles {
            ctx.draw(&Points {
                coords: &[(x as f64, (height - y) as f64)],
                color: color.to_color(opacity),
            });
        }
    }
}
