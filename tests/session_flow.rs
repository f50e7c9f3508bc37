//! Whole-session runs on the built-in levels

use glam::Vec2;
use ute_lander::consts::{SETTLE_FRAMES, SPAWN_X, SPAWN_Y, START_FUEL};
use ute_lander::sim::{GameEvent, Key, Screen, Session, TickInput, Variant};

/// Step until `pred` matches an event, returning that event and the frame count
fn run_until(
    session: &mut Session,
    max_frames: u32,
    pred: impl Fn(&GameEvent) -> bool,
) -> Option<(GameEvent, u32)> {
    for frame in 1..=max_frames {
        if let Some(event) = session
            .update(&TickInput::default())
            .into_iter()
            .find(|e| pred(e))
        {
            return Some((event, frame));
        }
    }
    None
}

fn playing(variant: Variant) -> Session {
    let mut session = Session::from_builtin(variant).unwrap();
    if variant.has_menus() {
        session.handle_key(Key::Num1);
    }
    session
}

#[test]
fn lander_free_fall_from_spawn_crashes() {
    let mut session = playing(Variant::Lander);
    let (event, _) = run_until(&mut session, 1000, |e| {
        matches!(e, GameEvent::Crashed | GameEvent::Landed { .. })
    })
    .expect("the ute should hit the ground");

    assert_eq!(event, GameEvent::Crashed);
    assert!(session.player.crashed);
    assert_eq!(session.player.score, 0);
    assert!(session.player.last_safe_vel.y > 1.5);
    assert!(session.player.pos.y > 495.0 && session.player.pos.y < 500.0);
}

#[test]
fn lander_soft_touchdown_on_centre_pad() {
    let mut session = playing(Variant::Lander);
    session.player.pos = Vec2::new(370.0, 480.0);
    session.player.vel = Vec2::new(0.0, 0.5);

    let (event, _) = run_until(&mut session, 200, |e| {
        matches!(e, GameEvent::Crashed | GameEvent::Landed { .. })
    })
    .unwrap();
    assert_eq!(event, GameEvent::Landed { bonus: 50 });
    assert_eq!(session.player.score, 50);
    assert!(!session.player.crashed);

    // Back at the spawn point after the result has been shown
    let (_, frames) = run_until(&mut session, SETTLE_FRAMES + 5, |e| {
        *e == GameEvent::Respawned
    })
    .unwrap();
    assert_eq!(frames, SETTLE_FRAMES);
    assert_eq!(session.player.score, 50);
    assert_eq!(session.player.fuel, START_FUEL);
    assert_eq!(session.player.pos.x, SPAWN_X);
    assert!(session.player.pos.y - SPAWN_Y < 0.1);
}

#[test]
fn lander_session_ends_when_tank_is_empty() {
    let mut session = playing(Variant::Lander);
    session.player.fuel = 0;
    let id = session.player.id;

    let (event, _) = run_until(&mut session, 2000, |e| {
        matches!(e, GameEvent::SessionEnded(_))
    })
    .unwrap();

    let GameEvent::SessionEnded(entry) = event else {
        unreachable!()
    };
    assert_eq!(entry.player_id, id);
    assert_eq!(entry.score, 0);
    assert_eq!(session.screen, Screen::Menu);
    assert_eq!(session.scoreboard.len(), 1);

    // A new game gets the next id and a full tank
    session.handle_key(Key::Num1);
    assert_eq!(session.player.id, id + 1);
    assert_eq!(session.player.fuel, START_FUEL);
}

#[test]
fn thrust_burns_fuel_and_slows_the_fall() {
    let mut session = playing(Variant::Lander);
    let burn = TickInput {
        thrust: true,
        ..Default::default()
    };
    for _ in 0..10 {
        session.update(&burn);
    }
    assert_eq!(session.player.fuel, START_FUEL - 10);
    assert!(session.player.vel.y < 0.0);
}

#[test]
fn jumper_lands_on_its_pad_and_keeps_going() {
    let mut session = playing(Variant::Jumper);
    let (event, _) = run_until(&mut session, 1000, |e| {
        matches!(e, GameEvent::Crashed | GameEvent::Landed { .. })
    })
    .unwrap();
    assert_eq!(event, GameEvent::Landed { bonus: 100 });

    // No menus: even an empty tank just respawns
    session.player.fuel = 0;
    run_until(&mut session, SETTLE_FRAMES + 5, |e| *e == GameEvent::Respawned).unwrap();
    assert_eq!(session.screen, Screen::Playing);
    assert!(session.scoreboard.is_empty());
}

#[test]
fn jumper_picks_up_gems() {
    let mut session = playing(Variant::Jumper);
    let total = session.map.collectibles.len();
    assert!(total > 0);

    let gem = session.map.collectibles[0].pos;
    session.player.pos = gem + Vec2::new(0.0, 10.0);
    let events = session.update(&TickInput::default());

    assert!(events.contains(&GameEvent::Collected));
    assert_eq!(session.player.gems, 1);
    assert_eq!(session.map.collectibles.len(), total - 1);
}
