//! Player record and the small state types around it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::START_FUEL;

/// Pending one-frame turn requested by the left/right keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationIntent {
    #[default]
    None,
    Left,
    Right,
}

impl RotationIntent {
    /// Degrees added to the craft angle when this intent is consumed
    pub fn degrees(self) -> f32 {
        match self {
            RotationIntent::None => 0.0,
            RotationIntent::Left => 1.0,
            RotationIntent::Right => -1.0,
        }
    }
}

/// Sprite facing (horizontal flip)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Active play, or showing a landing/crash result before respawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPhase {
    #[default]
    Active,
    /// Frames elapsed since touchdown
    Settling { frames: u32 },
}

/// Which sprite frame to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFrame {
    Floating,
    Rocket,
    Explosion,
    Standing,
    Jump,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Session id shown on the scoreboard
    pub id: u32,
    /// Foot point in world pixels
    pub pos: Vec2,
    pub vel: Vec2,
    /// Velocity at the last unobstructed falling step, used to judge touchdown
    pub last_safe_vel: Vec2,
    /// Accumulated craft angle in degrees (never wrapped)
    pub angle: f32,
    pub rotation: RotationIntent,
    pub facing: Facing,
    pub fuel: u32,
    pub score: u32,
    pub phase: PlayerPhase,
    pub crashed: bool,
    /// Thrust was applied this frame
    pub thrusting: bool,
    /// Gems picked up this session
    pub gems: u32,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            id: 0,
            pos: spawn,
            vel: Vec2::ZERO,
            last_safe_vel: Vec2::ZERO,
            angle: 0.0,
            rotation: RotationIntent::None,
            facing: Facing::Left,
            fuel: START_FUEL,
            score: 0,
            phase: PlayerPhase::Active,
            crashed: false,
            thrusting: false,
            gems: 0,
        }
    }

    /// Put the player back at the spawn point.
    ///
    /// `new_session` starts over: next id, full tank, zero score. Otherwise
    /// fuel and score carry across the respawn.
    pub fn reset(&mut self, spawn: Vec2, new_session: bool) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.last_safe_vel = Vec2::ZERO;
        self.angle = 0.0;
        self.rotation = RotationIntent::None;
        self.facing = Facing::Left;
        self.phase = PlayerPhase::Active;
        self.crashed = false;
        self.thrusting = false;

        if new_session {
            self.id += 1;
            self.fuel = START_FUEL;
            self.score = 0;
            self.gems = 0;
        }
    }

    /// Consume the pending rotation
    pub fn take_rotation(&mut self) -> RotationIntent {
        std::mem::take(&mut self.rotation)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, PlayerPhase::Settling { .. })
    }

    pub fn lander_frame(&self) -> SpriteFrame {
        if self.crashed {
            SpriteFrame::Explosion
        } else if self.thrusting {
            SpriteFrame::Rocket
        } else {
            SpriteFrame::Floating
        }
    }

    pub fn jumper_frame(&self) -> SpriteFrame {
        if self.vel.y < 0.0 {
            SpriteFrame::Jump
        } else {
            SpriteFrame::Standing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_rotation_consumes() {
        let mut player = Player::new(Vec2::ZERO);
        player.rotation = RotationIntent::Left;
        assert_eq!(player.take_rotation(), RotationIntent::Left);
        assert_eq!(player.take_rotation(), RotationIntent::None);
    }

    #[test]
    fn test_respawn_keeps_fuel_and_score() {
        let mut player = Player::new(Vec2::new(400.0, 100.0));
        player.id = 3;
        player.fuel = 12;
        player.score = 300;
        player.angle = 42.0;
        player.crashed = true;
        player.phase = PlayerPhase::Settling { frames: 150 };
        player.pos = Vec2::new(10.0, 20.0);

        player.reset(Vec2::new(400.0, 100.0), false);
        assert_eq!(player.pos, Vec2::new(400.0, 100.0));
        assert_eq!((player.id, player.fuel, player.score), (3, 12, 300));
        assert_eq!(player.angle, 0.0);
        assert!(!player.crashed);
        assert_eq!(player.phase, PlayerPhase::Active);
    }

    #[test]
    fn test_new_session_bumps_id() {
        let mut player = Player::new(Vec2::ZERO);
        player.fuel = 0;
        player.score = 50;
        player.reset(Vec2::ZERO, true);
        assert_eq!((player.id, player.fuel, player.score), (1, START_FUEL, 0));
    }
}
