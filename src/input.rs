//! Keyboard mapping for the browser front end
//!
//! Arrow keys are held state fed to every tick. Everything else is a
//! one-shot press: auto-repeated keydowns are dropped so a held `1` starts
//! exactly one game.

use crate::sim::{Key, TickInput};

/// What a keydown asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Arrow key; already applied to the held state
    Held,
    /// Screen / quit key for the session controller
    Session(Key),
    ToggleMute,
    ToggleTelemetry,
    Ignore,
}

/// Update held state for an arrow key. Returns false for any other key.
pub fn set_held(held: &mut TickInput, key: &str, down: bool) -> bool {
    match key {
        "ArrowLeft" => held.left = down,
        "ArrowRight" => held.right = down,
        "ArrowUp" => held.thrust = down,
        _ => return false,
    }
    true
}

/// Map a DOM keydown (`KeyboardEvent.key`, `KeyboardEvent.repeat`)
pub fn key_down(held: &mut TickInput, key: &str, repeat: bool) -> KeyAction {
    if set_held(held, key, true) {
        return KeyAction::Held;
    }
    if repeat {
        return KeyAction::Ignore;
    }
    match key {
        "m" | "M" => KeyAction::ToggleMute,
        "t" | "T" => KeyAction::ToggleTelemetry,
        other => Key::from_dom(other).map_or(KeyAction::Ignore, KeyAction::Session),
    }
}
