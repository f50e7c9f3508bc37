//! Ute Lander - two small tile-map arcade games
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (map, player physics, screens)
//! - `scoreboard`: In-memory list of finished sessions
//! - `ui`: Text layout for HUD and menu screens
//! - `input`: Browser key mapping (held arrows, one-shot presses)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Sound cues (WebAudio on wasm32)
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod input;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{AssetLoadError, GameError, LevelLoadError};
pub use scoreboard::{ScoreEntry, Scoreboard};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Viewport size in pixels
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 640.0;

    /// One simulation step; the web loop runs a fixed 60 steps a second
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Max steps per animation frame (prevents spiral of death)
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Logical cell edge used for collision
    pub const TILE_SIZE: f32 = 50.0;
    /// Drawn tile edge (5px overlap in all four directions)
    pub const TILE_DRAW_SIZE: f32 = 60.0;
    pub const TILE_DRAW_OVERLAP: f32 = 5.0;

    /// Where the player appears on (re)spawn
    pub const SPAWN_X: f32 = 400.0;
    pub const SPAWN_Y: f32 = 100.0;

    /// Fuel at the start of a session
    pub const START_FUEL: u32 = 100;

    /// Added to vy every frame
    pub const GRAVITY: f32 = 0.01;
    /// Lander thrust divisor (unit thrust vector / 20)
    pub const THRUST_DIVISOR: f32 = 20.0;

    /// Distance from the player's foot point to its head probe
    pub const HULL_HEIGHT: f32 = 45.0;

    /// Frames a landing/crash result stays on screen before respawn
    pub const SETTLE_FRAMES: u32 = 150;

    /// Landing quality limits (exclusive)
    pub const MAX_LANDING_VY: f32 = 1.5;
    pub const MAX_LANDING_VX: f32 = 0.5;
    pub const MAX_LANDING_ANGLE: f32 = 10.0;

    /// Half extent of the box used to pick up gems
    pub const PICKUP_RANGE: f32 = 50.0;
}

/// Built-in level files, embedded so the web build needs no file access
pub mod levels {
    pub const UTE_LANDER: &str = include_str!("../assets/levels/ute_lander.txt");
    pub const CPTN_RUBY: &str = include_str!("../assets/levels/cptn_ruby.txt");
}

/// Unit vector for an angle in degrees
#[inline]
pub fn direction_deg(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Rotate `point` around `center` by `degrees` (clockwise on screen, y down)
#[inline]
pub fn rotate_about(point: Vec2, center: Vec2, degrees: f32) -> Vec2 {
    let rot = direction_deg(degrees);
    let d = point - center;
    center + Vec2::new(d.x * rot.x - d.y * rot.y, d.x * rot.y + d.y * rot.x)
}
