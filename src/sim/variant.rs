//! The two games share one simulation; this is where they differ.

use serde::{Deserialize, Serialize};

use super::pads::{JUMPER_PADS, LANDER_PADS, LandingPad};
use crate::levels;

/// How the thrust key changes velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustMode {
    /// Add a fraction of the heading vector every frame (rocket)
    Accelerate,
    /// Replace velocity with the heading vector (jump)
    Impulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Ute Lander: rotate, burn fuel, touch down gently on a pad
    #[default]
    Lander,
    /// Cptn. Ruby: jump'n'run take on the same physics, with gems
    Jumper,
}

impl Variant {
    pub fn title(self) -> &'static str {
        match self {
            Variant::Lander => "Ute Lander",
            Variant::Jumper => "Cptn. Ruby",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lander" | "ute" | "ute-lander" => Some(Variant::Lander),
            "jumper" | "ruby" | "cptn-ruby" => Some(Variant::Jumper),
            _ => None,
        }
    }

    /// Embedded level text
    pub fn level_source(self) -> &'static str {
        match self {
            Variant::Lander => levels::UTE_LANDER,
            Variant::Jumper => levels::CPTN_RUBY,
        }
    }

    /// File name under `assets/levels/`
    pub fn level_file(self) -> &'static str {
        match self {
            Variant::Lander => "ute_lander.txt",
            Variant::Jumper => "cptn_ruby.txt",
        }
    }

    pub fn pads(self) -> &'static [LandingPad] {
        match self {
            Variant::Lander => &LANDER_PADS,
            Variant::Jumper => &JUMPER_PADS,
        }
    }

    pub fn thrust_mode(self) -> ThrustMode {
        match self {
            Variant::Lander => ThrustMode::Accelerate,
            Variant::Jumper => ThrustMode::Impulse,
        }
    }

    /// Left/right turn the craft (lander) or only flip the sprite (jumper)
    pub fn rotates(self) -> bool {
        self == Variant::Lander
    }

    /// Touch-down velocity and angle are only judged in the lander
    pub fn checks_landing_quality(self) -> bool {
        self == Variant::Lander
    }

    pub fn has_collectibles(self) -> bool {
        self == Variant::Jumper
    }

    /// Menu, scoreboard and instructions screens
    pub fn has_menus(self) -> bool {
        self == Variant::Lander
    }

    /// Lander hulls are also probed one pixel either side before moving;
    /// the jumper only checks up and down, so it slides along walls
    pub fn probes_sides(self) -> bool {
        self == Variant::Lander
    }

    /// Extra upward/sideways step applied while rising
    pub fn rise_bonus(self) -> f32 {
        match self {
            Variant::Lander => 0.1,
            Variant::Jumper => 0.01,
        }
    }

    pub fn drift_bonus(self) -> f32 {
        match self {
            Variant::Lander => 0.0,
            Variant::Jumper => 0.01,
        }
    }
}
