//! Scrolling: the top-left corner of the view follows the player

use glam::Vec2;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Clamp one axis. Applied as `min(max(..))`, so a map smaller than the
/// viewport yields a negative offset rather than zero.
#[inline]
fn follow_axis(player: f32, viewport: f32, map: f32) -> f32 {
    (player - viewport / 2.0).max(0.0).min(map - viewport)
}

/// Camera offset for a player at `player`, on a map `map_size` pixels large
pub fn camera_offset(player: Vec2, map_size: Vec2) -> Vec2 {
    Vec2::new(
        follow_axis(player.x, VIEWPORT_WIDTH, map_size.x),
        follow_axis(player.y, VIEWPORT_HEIGHT, map_size.y),
    )
}
