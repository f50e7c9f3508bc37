//! Builds the frame's triangle list from a session
//!
//! Output is in world pixels; the pipeline applies the camera.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{TILE_DRAW_OVERLAP, TILE_DRAW_SIZE, TILE_SIZE};
use crate::rotate_about;
use crate::sim::{Facing, PadColor, Player, Screen, Session, SpriteFrame, TileMap, Variant};

/// Same sky every frame
const STAR_SEED: u64 = 0x5eed_57a2;
const STAR_COUNT: usize = 120;

/// Player body size (width, height) per variant
const UTE_BODY: Vec2 = Vec2::new(50.0, 20.0);
const RUBY_BODY: Vec2 = Vec2::new(50.0, 30.0);
/// Body centre sits this far above the foot point
const BODY_LIFT: f32 = 12.0;

/// Gem wobble angle in degrees at `time_ms`
pub fn gem_angle(time_ms: f64) -> f32 {
    25.0 * (time_ms / 133.7).sin() as f32
}

/// All triangles for the current frame
pub fn build(session: &Session, time_ms: f64) -> Vec<Vertex> {
    let map_size = Vec2::new(session.map.pixel_width(), session.map.pixel_height());
    let mut vertices = starfield(map_size, time_ms);

    // Menus are text only
    if session.screen != Screen::Playing {
        return vertices;
    }

    vertices.extend(tiles(&session.map));
    for pad in session.variant.pads() {
        let color = match pad.color {
            PadColor::Green => colors::PAD_GREEN,
            PadColor::Yellow => colors::PAD_YELLOW,
            PadColor::Blue => colors::PAD_BLUE,
        };
        vertices.extend(shapes::rect(pad.min, pad.size(), color));
    }

    let wobble = gem_angle(time_ms);
    for gem in &session.map.collectibles {
        vertices.extend(shapes::diamond(gem.pos, 12.0, wobble, colors::GEM));
    }

    vertices.extend(player(session.variant, &session.player, time_ms));
    vertices
}

/// Land cells, drawn slightly larger than their collision box so seams close
pub fn tiles(map: &TileMap) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (col, row) in map.solid_cells() {
        let min = Vec2::new(
            col as f32 * TILE_SIZE - TILE_DRAW_OVERLAP,
            row as f32 * TILE_SIZE - TILE_DRAW_OVERLAP,
        );
        vertices.extend(shapes::rect(min, Vec2::splat(TILE_DRAW_SIZE), colors::LAND));
    }
    vertices
}

fn starfield(area: Vec2, time_ms: f64) -> Vec<Vertex> {
    let mut rng = Pcg32::seed_from_u64(STAR_SEED);
    let mut vertices = Vec::with_capacity(STAR_COUNT * 6);
    for _ in 0..STAR_COUNT {
        let pos = Vec2::new(
            rng.random_range(0.0..area.x.max(1.0)),
            rng.random_range(0.0..area.y.max(1.0)),
        );
        let size = rng.random_range(1.0..2.5);
        let phase: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let mut color = colors::STAR;
        color[3] = 0.55 + 0.45 * ((time_ms / 700.0 + phase).sin() as f32);
        vertices.extend(shapes::rect(pos, Vec2::splat(size), color));
    }
    vertices
}

/// Player sprite: a rotated body with a nose marker on the facing side
pub fn player(variant: Variant, player: &Player, time_ms: f64) -> Vec<Vertex> {
    let center = player.pos - Vec2::new(0.0, BODY_LIFT);
    let (size, frame) = match variant {
        Variant::Lander => (UTE_BODY, player.lander_frame()),
        Variant::Jumper => (RUBY_BODY, player.jumper_frame()),
    };

    if frame == SpriteFrame::Explosion {
        let pulse = 1.0 + 0.15 * (time_ms / 60.0).sin() as f32;
        let mut vertices = shapes::circle(center, 28.0 * pulse, colors::EXPLOSION, 16);
        vertices.extend(shapes::circle(center, 14.0 * pulse, colors::UTE_ROCKET, 12));
        return vertices;
    }

    let body_color = match frame {
        SpriteFrame::Standing => colors::RUBY_STANDING,
        SpriteFrame::Jump => colors::RUBY_JUMP,
        _ => colors::UTE_BODY,
    };
    let mut vertices = shapes::rotated_rect(center, size, player.angle, body_color);

    // Local offsets are taken in the unrotated sprite, then turned with it
    let turn = |local: Vec2| rotate_about(center + local, center, player.angle);
    let side = match player.facing {
        Facing::Left => -1.0,
        Facing::Right => 1.0,
    };
    let half = size / 2.0;
    vertices.extend(shapes::triangle(
        turn(Vec2::new(side * half.x, -half.y * 0.6)),
        turn(Vec2::new(side * (half.x + 8.0), 0.0)),
        turn(Vec2::new(side * half.x, half.y * 0.6)),
        colors::NOSE,
    ));

    if frame == SpriteFrame::Rocket {
        let flicker = 14.0 + 4.0 * (time_ms / 40.0).sin() as f32;
        vertices.extend(shapes::triangle(
            turn(Vec2::new(-8.0, half.y)),
            turn(Vec2::new(8.0, half.y)),
            turn(Vec2::new(0.0, half.y + flicker)),
            colors::UTE_ROCKET,
        ));
    }
    vertices
}
