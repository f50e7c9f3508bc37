//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - No rendering or platform dependencies

pub mod camera;
pub mod map;
pub mod pads;
pub mod player;
pub mod session;
pub mod tick;
pub mod variant;

pub use camera::camera_offset;
pub use map::{Collectible, Tile, TileMap};
pub use pads::{JUMPER_PADS, LANDER_PADS, LandingPad, PadColor, pad_at};
pub use player::{Facing, Player, PlayerPhase, RotationIntent, SpriteFrame};
pub use session::{Flow, Key, Screen, Session};
pub use tick::{GameEvent, TickInput, tick};
pub use variant::{ThrustMode, Variant};
