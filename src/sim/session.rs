//! Game controller: which screen is up, key handling, and the frame update
//! that drives the player while playing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::map::TileMap;
use super::player::{Player, PlayerPhase};
use super::tick::{GameEvent, TickInput, tick};
use super::variant::Variant;
use crate::consts::{SETTLE_FRAMES, SPAWN_X, SPAWN_Y};
use crate::error::LevelLoadError;
use crate::scoreboard::Scoreboard;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Scoreboard,
    Instructions,
}

/// Discrete key-down events the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "0" => Some(Key::Num0),
            "1" => Some(Key::Num1),
            "2" => Some(Key::Num2),
            "3" => Some(Key::Num3),
            "4" => Some(Key::Num4),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything one running game owns
#[derive(Debug, Clone)]
pub struct Session {
    pub variant: Variant,
    pub screen: Screen,
    pub map: TileMap,
    pub player: Player,
    pub scoreboard: Scoreboard,
    /// Top-left corner of the view in world pixels
    pub camera: Vec2,
    /// Frames simulated while playing
    pub frame: u64,
    spawn: Vec2,
}

impl Session {
    /// Build a session around an already-loaded map.
    ///
    /// The lander opens on its menu; the jumper has no menus and starts
    /// straight away.
    pub fn new(variant: Variant, map: TileMap) -> Self {
        let spawn = Vec2::new(SPAWN_X, SPAWN_Y);
        let mut session = Self {
            variant,
            screen: Screen::Menu,
            map,
            player: Player::new(spawn),
            scoreboard: Scoreboard::new(),
            camera: Vec2::ZERO,
            frame: 0,
            spawn,
        };
        if !variant.has_menus() {
            session.start_game();
        }
        session.update_camera();
        session
    }

    /// Session on the level embedded in the binary
    pub fn from_builtin(variant: Variant) -> Result<Self, LevelLoadError> {
        let map = TileMap::parse(variant.level_source(), variant.has_collectibles())?;
        Ok(Self::new(variant, map))
    }

    /// Fresh game: new player id, full tank, zero score
    pub fn start_game(&mut self) {
        self.player.reset(self.spawn, true);
        self.screen = Screen::Playing;
        log::info!(
            "{}: player {} starts with {} fuel",
            self.variant.title(),
            self.player.id,
            self.player.fuel
        );
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: Key) -> Flow {
        // The jumper only knows how to quit
        if key != Key::Escape && !self.variant.has_menus() {
            return Flow::Continue;
        }

        match key {
            Key::Num0 => self.set_screen(Screen::Menu),
            Key::Num1 => self.start_game(),
            Key::Num2 => self.set_screen(Screen::Scoreboard),
            Key::Num3 => self.set_screen(Screen::Instructions),
            Key::Num4 | Key::Escape => {
                log::info!("Quit requested ({:?})", key);
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log::debug!("Screen {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }

    /// Advance one frame. Does nothing unless a game is being played.
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.screen != Screen::Playing {
            return events;
        }
        self.frame += 1;

        // Settle bookkeeping (and any respawn) happens before this frame's
        // physics, so input on the respawn frame acts on the fresh player
        if let PlayerPhase::Settling { frames } = self.player.phase {
            let frames = frames + 1;
            self.player.phase = PlayerPhase::Settling { frames };

            if frames >= SETTLE_FRAMES {
                if self.variant.has_menus() && self.player.fuel == 0 {
                    let entry = self.scoreboard.record(self.player.id, self.player.score);
                    self.set_screen(Screen::Menu);
                    events.push(GameEvent::SessionEnded(entry));
                    return events;
                }
                self.player.reset(self.spawn, false);
                log::info!(
                    "Player {} respawned with {} fuel, score {}",
                    self.player.id,
                    self.player.fuel,
                    self.player.score
                );
                events.push(GameEvent::Respawned);
            }
        }

        events.extend(tick(&mut self.player, &mut self.map, self.variant, input));
        self.update_camera();
        events
    }

    fn update_camera(&mut self) {
        let map_size = Vec2::new(self.map.pixel_width(), self.map.pixel_height());
        self.camera = camera_offset(self.player.pos, map_size);
    }

    /// Frames left before the result overlay goes away, while one is showing
    pub fn result_countdown(&self) -> Option<u32> {
        match self.player.phase {
            PlayerPhase::Settling { frames } if self.screen == Screen::Playing => {
                Some(SETTLE_FRAMES.saturating_sub(frames))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lander() -> Session {
        Session::from_builtin(Variant::Lander).unwrap()
    }

    #[test]
    fn test_lander_opens_on_menu() {
        let mut session = lander();
        assert_eq!(session.screen, Screen::Menu);
        assert_eq!(session.player.id, 0);
        // Nothing moves off the play screen
        let before = session.player.pos;
        assert!(session.update(&TickInput::default()).is_empty());
        assert_eq!(session.player.pos, before);
        assert_eq!(session.frame, 0);
    }

    #[test]
    fn test_jumper_starts_playing() {
        let session = Session::from_builtin(Variant::Jumper).unwrap();
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.player.id, 1);
    }

    #[test]
    fn test_digit_keys_switch_screens() {
        let mut session = lander();
        assert_eq!(session.handle_key(Key::Num2), Flow::Continue);
        assert_eq!(session.screen, Screen::Scoreboard);
        session.handle_key(Key::Num3);
        assert_eq!(session.screen, Screen::Instructions);
        session.handle_key(Key::Num1);
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.player.id, 1);
        session.handle_key(Key::Num1);
        assert_eq!(session.player.id, 2);
        session.handle_key(Key::Num0);
        assert_eq!(session.screen, Screen::Menu);
        assert_eq!(session.handle_key(Key::Num4), Flow::Quit);
        assert_eq!(session.handle_key(Key::Escape), Flow::Quit);
    }

    #[test]
    fn test_jumper_ignores_digits() {
        let mut session = Session::from_builtin(Variant::Jumper).unwrap();
        assert_eq!(session.handle_key(Key::Num0), Flow::Continue);
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.handle_key(Key::Escape), Flow::Quit);
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("3"), Some(Key::Num3));
        assert_eq!(Key::from_dom("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_dom("a"), None);
    }

    #[test]
    fn test_settle_then_respawn_with_fuel() {
        let mut session = lander();
        session.handle_key(Key::Num1);
        session.player.fuel = 40;
        session.player.score = 100;
        session.player.crashed = true;
        session.player.phase = PlayerPhase::Settling { frames: 0 };
        session.player.pos = Vec2::new(70.0, 348.0);

        for _ in 0..SETTLE_FRAMES - 1 {
            session.update(&TickInput::default());
        }
        assert!(session.player.is_settling());
        assert_eq!(session.result_countdown(), Some(1));

        let events = session.update(&TickInput::default());
        assert!(events.contains(&GameEvent::Respawned));
        assert!(!session.player.crashed);
        assert_eq!((session.player.fuel, session.player.score), (40, 100));
        assert_eq!(session.screen, Screen::Playing);
        assert!(session.scoreboard.is_empty());
        // Respawn happens before this frame's physics step
        assert!((session.player.pos.y - (SPAWN_Y + 0.01)).abs() < 1e-4);
        assert_eq!(session.player.pos.x, SPAWN_X);
    }

    #[test]
    fn test_thrust_on_respawn_frame_moves_fresh_player() {
        let mut session = lander();
        session.handle_key(Key::Num1);
        session.player.fuel = 40;
        session.player.phase = PlayerPhase::Settling {
            frames: SETTLE_FRAMES - 1,
        };

        let events = session.update(&TickInput {
            thrust: true,
            ..Default::default()
        });
        assert_eq!(events, vec![GameEvent::Respawned, GameEvent::Thrust]);
        // Respawn first, then this frame's burn acts on the new ute
        assert_eq!(session.player.fuel, 39);
        assert!((session.player.vel.y + 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_settle_without_fuel_ends_session() {
        let mut session = lander();
        session.handle_key(Key::Num1);
        session.player.fuel = 0;
        session.player.score = 300;
        session.player.phase = PlayerPhase::Settling { frames: 0 };

        for _ in 0..SETTLE_FRAMES - 1 {
            session.update(&TickInput::default());
            assert_eq!(session.screen, Screen::Playing);
        }
        let events = session.update(&TickInput::default());
        assert_eq!(session.screen, Screen::Menu);
        assert_eq!(session.scoreboard.len(), 1);
        assert_eq!(session.scoreboard.entries[0].player_id, 1);
        assert_eq!(session.scoreboard.entries[0].score, 300);
        assert!(matches!(events.as_slice(), [GameEvent::SessionEnded(_)]));

        // Parked on the menu: no more entries
        session.update(&TickInput::default());
        assert_eq!(session.scoreboard.len(), 1);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut session = lander();
        session.handle_key(Key::Num1);
        session.player.pos = Vec2::new(900.0, 300.0);
        session.update(&TickInput::default());
        let max_x = session.map.pixel_width() - crate::consts::VIEWPORT_WIDTH;
        assert_eq!(session.camera.x, max_x.min(500.0));
        assert_eq!(session.camera.y, 0.0);
    }
}
