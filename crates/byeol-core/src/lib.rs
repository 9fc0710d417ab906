//! Shared types for the byeol screensaver.

mod color;
mod theme;

pub use color::{Rgb, hsl_to_rgb};
pub use theme::Theme;
