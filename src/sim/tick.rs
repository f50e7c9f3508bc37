//! Fixed per-frame player update
//!
//! One call advances the player by exactly one frame: orientation, thrust,
//! gravity, collision-gated integration and touchdown resolution.

use glam::Vec2;

use super::map::TileMap;
use super::pads::pad_at;
use super::player::{Facing, Player, PlayerPhase, RotationIntent};
use super::variant::{ThrustMode, Variant};
use crate::consts::*;
use crate::direction_deg;
use crate::scoreboard::ScoreEntry;

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Rocket (lander) or jump (jumper)
    pub thrust: bool,
}

impl TickInput {
    /// -1 for left only, 1 for right only, 0 otherwise
    pub fn horizontal(&self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Things that happened during a frame, for audio and logging
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Thrust applied (fuel burned)
    Thrust,
    /// Touched down on a pad
    Landed { bonus: u32 },
    /// Bad touchdown or missed every pad
    Crashed,
    /// Picked up a gem
    Collected,
    /// Result shown long enough; back at the spawn point
    Respawned,
    /// Out of fuel; score recorded
    SessionEnded(ScoreEntry),
}

/// Advance the player by one frame
pub fn tick(
    player: &mut Player,
    map: &mut TileMap,
    variant: Variant,
    input: &TickInput,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    steer(player, variant, input);

    player.thrusting = input.thrust && apply_thrust(player, variant);
    if player.thrusting {
        events.push(GameEvent::Thrust);
    }

    apply_gravity(player);
    integrate(player, map, variant);

    if player.vel.y == 0.0 && !player.is_settling() {
        events.push(resolve_impact(player, variant));
    }

    if variant.has_collectibles() {
        let picked = map.collect_near(player.pos.x, player.pos.y);
        if picked > 0 {
            player.gems += picked as u32;
            events.extend(std::iter::repeat_n(GameEvent::Collected, picked));
        }
    }

    // Applied after the touchdown check, so a landing is judged on the angle
    // the craft had coming into this frame
    let turn = player.take_rotation();
    if variant.rotates() {
        player.angle += turn.degrees();
    }

    log::trace!(
        "tick pos=({:.2},{:.2}) vel=({:.3},{:.3}) angle={} fuel={}",
        player.pos.x,
        player.pos.y,
        player.vel.x,
        player.vel.y,
        player.angle,
        player.fuel
    );

    events
}

/// Record this frame's left/right request
fn steer(player: &mut Player, variant: Variant, input: &TickInput) {
    let dir = input.horizontal();
    if variant.rotates() {
        player.rotation = match dir {
            d if d < 0 => RotationIntent::Left,
            d if d > 0 => RotationIntent::Right,
            _ => RotationIntent::None,
        };
    } else if dir > 0 {
        player.facing = Facing::Right;
    } else if dir < 0 {
        player.facing = Facing::Left;
    }
}

/// Burn one unit of fuel along the craft heading. Returns false (and changes
/// nothing) when the tank is empty.
pub fn apply_thrust(player: &mut Player, variant: Variant) -> bool {
    if player.fuel == 0 {
        return false;
    }
    // 90 degrees is straight up on screen
    let heading = direction_deg(player.angle + 90.0);
    match variant.thrust_mode() {
        ThrustMode::Accelerate => player.vel -= heading / THRUST_DIVISOR,
        ThrustMode::Impulse => player.vel = -heading,
    }
    player.fuel -= 1;
    true
}

pub fn apply_gravity(player: &mut Player) {
    player.vel.y += GRAVITY;
}

/// Could the player be placed at pos + (dx, dy) without being stuck?
/// Checks the foot point and the head point above it.
pub fn fits(player: &Player, map: &TileMap, dx: f32, dy: f32) -> bool {
    let x = player.pos.x + dx;
    let y = player.pos.y + dy;
    !map.is_solid(x, y) && !map.is_solid(x, y - HULL_HEIGHT)
}

/// Move by the current velocity unless the way is blocked, in which case
/// vertical velocity drops to zero (an impact)
pub fn integrate(player: &mut Player, map: &TileMap, variant: Variant) {
    let sides_open = !variant.probes_sides()
        || (fits(player, map, 1.0, 0.0) && fits(player, map, -1.0, 0.0));

    if player.vel.y > 0.0 {
        if fits(player, map, 0.0, 1.0) && sides_open {
            player.pos += player.vel;
            player.last_safe_vel = player.vel;
        } else {
            player.vel.y = 0.0;
        }
    } else if fits(player, map, 0.0, -1.0) && sides_open {
        player.pos += player.vel + Vec2::new(variant.drift_bonus(), variant.rise_bonus());
    } else {
        player.vel.y = 0.0;
    }
}

/// Touchdown quality from the last safe velocity and the craft angle
pub fn landing_is_soft(player: &Player) -> bool {
    let v = player.last_safe_vel;
    v.y.abs() < MAX_LANDING_VY
        && v.x > -MAX_LANDING_VX
        && v.x < MAX_LANDING_VX
        && player.angle > -MAX_LANDING_ANGLE
        && player.angle < MAX_LANDING_ANGLE
}

/// Decide landed vs crashed and start the settle countdown
pub fn resolve_impact(player: &mut Player, variant: Variant) -> GameEvent {
    let soft = !variant.checks_landing_quality() || landing_is_soft(player);
    let pad = if soft {
        pad_at(variant.pads(), player.pos.x, player.pos.y)
    } else {
        None
    };

    player.phase = PlayerPhase::Settling { frames: 0 };

    match pad {
        Some(pad) => {
            player.score += pad.bonus;
            log::info!(
                "Player {} landed at ({:.1}, {:.1}) for {} points",
                player.id,
                player.pos.x,
                player.pos.y,
                pad.bonus
            );
            GameEvent::Landed { bonus: pad.bonus }
        }
        None => {
            player.crashed = true;
            log::info!(
                "Player {} crashed at ({:.1}, {:.1}), last vel ({:.2}, {:.2}), angle {}",
                player.id,
                player.pos.x,
                player.pos.y,
                player.last_safe_vel.x,
                player.last_safe_vel.y,
                player.angle
            );
            GameEvent::Crashed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_map() -> TileMap {
        TileMap::parse(&".".repeat(20), false).unwrap()
    }

    fn lander_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(Vec2::new(x, y));
        player.id = 1;
        player
    }

    #[test]
    fn test_thrust_without_fuel_is_noop() {
        let mut player = lander_at(400.0, 100.0);
        player.fuel = 0;
        assert!(!apply_thrust(&mut player, Variant::Lander));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.fuel, 0);
    }

    #[test]
    fn test_lander_thrust_points_up() {
        let mut player = lander_at(400.0, 100.0);
        assert!(apply_thrust(&mut player, Variant::Lander));
        assert!(player.vel.x.abs() < 1e-6);
        assert!((player.vel.y + 0.05).abs() < 1e-6);
        assert_eq!(player.fuel, START_FUEL - 1);
    }

    #[test]
    fn test_jumper_thrust_is_impulse() {
        let mut player = lander_at(400.0, 100.0);
        player.vel = Vec2::new(3.0, 2.0);
        assert!(apply_thrust(&mut player, Variant::Jumper));
        assert!(player.vel.x.abs() < 1e-6);
        assert!((player.vel.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_one_gravity_step() {
        let mut map = open_map();
        let mut player = lander_at(400.0, 100.0);
        tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        assert_eq!(player.vel.y, 0.01);
        assert!((player.pos.y - 100.01).abs() < 1e-4);
        assert_eq!(player.last_safe_vel.y, 0.01);
    }

    #[test]
    fn test_rotation_is_consumed_each_frame() {
        let mut map = open_map();
        let mut player = lander_at(400.0, 100.0);
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut player, &mut map, Variant::Lander, &left);
        tick(&mut player, &mut map, Variant::Lander, &left);
        assert_eq!(player.angle, 2.0);
        assert_eq!(player.rotation, RotationIntent::None);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut player, &mut map, Variant::Lander, &right);
        assert_eq!(player.angle, 1.0);

        tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        assert_eq!(player.angle, 1.0);
    }

    #[test]
    fn test_jumper_turns_only_flip() {
        let mut map = open_map();
        let mut player = lander_at(400.0, 100.0);
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut player, &mut map, Variant::Jumper, &right);
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.angle, 0.0);
    }

    #[test]
    fn test_soft_landing_on_pad() {
        let mut player = lander_at(70.0, 348.0);
        player.last_safe_vel = Vec2::new(0.0, 1.0);
        let event = resolve_impact(&mut player, Variant::Lander);
        assert_eq!(event, GameEvent::Landed { bonus: 250 });
        assert!(!player.crashed);
        assert_eq!(player.score, 250);
        assert_eq!(player.phase, PlayerPhase::Settling { frames: 0 });
    }

    #[test]
    fn test_soft_landing_off_pad_crashes() {
        let mut player = lander_at(200.0, 348.0);
        player.last_safe_vel = Vec2::new(0.0, 1.0);
        assert_eq!(resolve_impact(&mut player, Variant::Lander), GameEvent::Crashed);
        assert!(player.crashed);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_hard_landing_crashes_anywhere() {
        let mut player = lander_at(70.0, 348.0);
        player.last_safe_vel = Vec2::new(0.0, 2.0);
        assert_eq!(resolve_impact(&mut player, Variant::Lander), GameEvent::Crashed);
        assert!(player.crashed);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_tilted_or_sliding_landing_crashes() {
        let mut player = lander_at(70.0, 348.0);
        player.last_safe_vel = Vec2::new(0.0, 1.0);
        player.angle = 10.0;
        assert_eq!(resolve_impact(&mut player, Variant::Lander), GameEvent::Crashed);

        let mut player = lander_at(70.0, 348.0);
        player.last_safe_vel = Vec2::new(-0.5, 1.0);
        assert_eq!(resolve_impact(&mut player, Variant::Lander), GameEvent::Crashed);
    }

    #[test]
    fn test_full_turn_still_crashes() {
        // The angle is never wrapped, so 360 degrees is not "level"
        let mut player = lander_at(70.0, 348.0);
        player.last_safe_vel = Vec2::new(0.0, 1.0);
        player.angle = 360.0;
        assert_eq!(resolve_impact(&mut player, Variant::Lander), GameEvent::Crashed);
        assert!(player.crashed);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_jumper_slides_along_walls() {
        // Wall column spans x 100..150
        let wall = "..\".\n".repeat(4);
        let mut map = TileMap::parse(&wall, false).unwrap();

        let mut ruby = lander_at(99.5, 100.0);
        ruby.vel.y = 0.5;
        let events = tick(&mut ruby, &mut map, Variant::Jumper, &TickInput::default());
        assert!(events.is_empty());
        assert!((ruby.pos.y - 100.51).abs() < 1e-4);

        // The lander's side probe touches the wall and stops it dead
        let mut ute = lander_at(99.5, 100.0);
        ute.vel.y = 0.5;
        let events = tick(&mut ute, &mut map, Variant::Lander, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Crashed]);
        assert_eq!(ute.pos.y, 100.0);
    }

    #[test]
    fn test_jumper_ignores_landing_speed() {
        let mut player = lander_at(400.0, 497.0);
        player.last_safe_vel = Vec2::new(0.0, 3.0);
        assert_eq!(
            resolve_impact(&mut player, Variant::Jumper),
            GameEvent::Landed { bonus: 100 }
        );
    }

    #[test]
    fn test_floor_stops_fall_and_resolves_once() {
        // Floor top at y = 100
        let mut map = TileMap::parse("....\n....\n\"\"\"\"", false).unwrap();
        let mut player = lander_at(70.0, 99.5);
        player.vel.y = 0.5;

        let events = tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(events, vec![GameEvent::Crashed]);

        // Resting on the floor while settling does not resolve again
        let events = tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(player.pos.y, 99.5);
    }

    #[test]
    fn test_ceiling_blocks_rise() {
        let mut map = open_map();
        let mut player = lander_at(400.0, 45.5);
        player.vel.y = -2.0;
        tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        assert_eq!(player.vel.y, 0.0);
        assert!(player.is_settling());
        assert!(player.crashed);
    }

    #[test]
    fn test_rising_gets_bonus() {
        let mut map = open_map();
        let mut player = lander_at(400.0, 200.0);
        player.vel = Vec2::new(0.5, -1.0);
        tick(&mut player, &mut map, Variant::Lander, &TickInput::default());
        // vy after gravity is -0.99, plus the 0.1 rise bonus
        assert!((player.pos.y - (200.0 - 0.99 + 0.1)).abs() < 1e-4);
        assert_eq!(player.pos.x, 400.5);
    }

    #[test]
    fn test_jumper_collects_gems() {
        let mut map = TileMap::parse("x...\n....", true).unwrap();
        let mut player = lander_at(30.0, 40.0);
        let events = tick(&mut player, &mut map, Variant::Jumper, &TickInput::default());
        assert!(events.contains(&GameEvent::Collected));
        assert_eq!(player.gems, 1);
        assert!(map.collectibles.is_empty());
        assert_eq!(player.score, 0);
    }
}
