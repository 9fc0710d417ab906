//! Color themes for the screensaver.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Color theme for the particle sky. The selected theme is the single
/// persisted user preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Violet,
    Rose,
    Cyan,
    Emerald,
    Amber,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Violet,
        Theme::Rose,
        Theme::Cyan,
        Theme::Emerald,
        Theme::Amber,
    ];

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Theme::Violet => Theme::Rose,
            Theme::Rose => Theme::Cyan,
            Theme::Cyan => Theme::Emerald,
            Theme::Emerald => Theme::Amber,
            Theme::Amber => Theme::Violet,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Violet => "violet",
            Theme::Rose => "rose",
            Theme::Cyan => "cyan",
            Theme::Emerald => "emerald",
            Theme::Amber => "amber",
        }
    }

    /// Particle color as comma-separated channel numbers. This is the format
    /// the drawing layer interpolates into its fill and stroke colors.
    pub fn particle_triplet(self) -> &'static str {
        match self {
            Theme::Violet => "139, 92, 246",
            Theme::Rose => "236, 72, 153",
            Theme::Cyan => "6, 182, 212",
            Theme::Emerald => "16, 185, 129",
            Theme::Amber => "245, 158, 11",
        }
    }

    /// Parsed particle color. Falls back to the violet default if a triplet
    /// is ever malformed.
    pub fn particle_color(self) -> Rgb {
        Rgb::from_triplet(self.particle_triplet()).unwrap_or(Rgb::new(139, 92, 246))
    }

    /// Accent color for UI text, full brightness.
    pub fn accent(self) -> Color {
        let c = self.particle_color();
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_violet() {
        assert_eq!(Theme::default(), Theme::Violet);
        assert_eq!(Theme::default().particle_color(), Rgb::new(139, 92, 246));
    }

    #[test]
    fn cycle_visits_every_theme_once() {
        let mut seen = Vec::new();
        let mut theme = Theme::default();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::default());
        for t in Theme::ALL {
            assert!(seen.contains(&t), "{} missing from cycle", t.name());
        }
    }

    #[test]
    fn every_triplet_parses() {
        for t in Theme::ALL {
            assert!(
                Rgb::from_triplet(t.particle_triplet()).is_some(),
                "{} triplet should parse",
                t.name()
            );
        }
    }
}
