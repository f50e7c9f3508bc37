//! Landing pads: fixed rectangles that pay a bonus when touched down on

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Display colour of a pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadColor {
    Green,
    Yellow,
    Blue,
}

/// Axis-aligned pad rectangle. Containment uses open intervals, so a point
/// exactly on an edge is outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPad {
    pub min: Vec2,
    pub max: Vec2,
    pub bonus: u32,
    pub color: PadColor,
}

impl LandingPad {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32, bonus: u32, color: PadColor) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
            bonus,
            color,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.min.x && x < self.max.x && y > self.min.y && y < self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Ute Lander: five pads, outer ones pay the most
pub const LANDER_PADS: [LandingPad; 5] = [
    LandingPad::new(48.0, 345.0, 98.0, 350.0, 250, PadColor::Green),
    LandingPad::new(320.0, 495.0, 420.0, 500.0, 50, PadColor::Yellow),
    LandingPad::new(500.0, 595.0, 600.0, 600.0, 150, PadColor::Blue),
    LandingPad::new(650.0, 395.0, 750.0, 400.0, 50, PadColor::Yellow),
    LandingPad::new(1000.0, 595.0, 1050.0, 600.0, 250, PadColor::Green),
];

/// Cptn. Ruby: a single pad under the spawn point
pub const JUMPER_PADS: [LandingPad; 1] =
    [LandingPad::new(320.0, 495.0, 420.0, 500.0, 100, PadColor::Yellow)];

/// First pad containing the point
pub fn pad_at(pads: &[LandingPad], x: f32, y: f32) -> Option<&LandingPad> {
    pads.iter().find(|p| p.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_bonuses() {
        let bonuses: Vec<u32> = LANDER_PADS.iter().map(|p| p.bonus).collect();
        assert_eq!(bonuses, vec![250, 50, 150, 50, 250]);
    }

    #[test]
    fn test_pad_at() {
        assert_eq!(pad_at(&LANDER_PADS, 70.0, 348.0).map(|p| p.bonus), Some(250));
        assert_eq!(pad_at(&LANDER_PADS, 550.0, 599.0).map(|p| p.bonus), Some(150));
        assert!(pad_at(&LANDER_PADS, 200.0, 348.0).is_none());
    }

    #[test]
    fn test_edges_are_outside() {
        let pad = LANDER_PADS[0];
        assert!(!pad.contains(48.0, 347.0));
        assert!(!pad.contains(70.0, 350.0));
        assert!(pad.contains(48.5, 345.5));
    }
}
