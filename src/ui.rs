//! Text layout for everything drawn as words: HUD, result banner, menu,
//! scoreboard and instructions.
//!
//! Positions are viewport pixels (top-left origin). The front end turns each
//! line into an overlay element; nothing here touches the DOM.

use glam::Vec2;

use crate::consts::MAX_LANDING_ANGLE;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::sim::{Player, Screen, Session, Variant};

/// One line of text on screen
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    /// Font scale relative to the base 20px font
    pub scale: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self::scaled(text, x, y, 1.0)
    }

    fn scaled(text: impl Into<String>, x: f32, y: f32, scale: f32) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            scale,
        }
    }
}

/// All text for the current frame
pub fn overlay(session: &Session, settings: &Settings) -> Vec<TextLine> {
    match session.screen {
        Screen::Menu => menu_lines(),
        Screen::Scoreboard => scoreboard_lines(&session.scoreboard),
        Screen::Instructions => instructions_lines(),
        Screen::Playing => {
            let mut lines = hud_lines(session.variant, &session.player, settings);
            if let Some(countdown) = session.result_countdown() {
                let anchor = session.player.pos - session.camera;
                lines.extend(result_lines(session.variant, &session.player, countdown, anchor));
            }
            lines
        }
    }
}

/// In-game readouts
pub fn hud_lines(variant: Variant, player: &Player, settings: &Settings) -> Vec<TextLine> {
    match variant {
        Variant::Jumper => vec![TextLine::new(format!("Fuel: {}", player.fuel), 10.0, 10.0)],
        Variant::Lander => {
            let mut lines = vec![
                TextLine::new("Press 0 - menu", 250.0, 10.0),
                TextLine::new("Press 1 - Restart", 400.0, 10.0),
                TextLine::new(format!("Fuel: {}", player.fuel), 10.0, 10.0),
                TextLine::new(format!("Current Score: {}", player.score), 10.0, 30.0),
                TextLine::new(format!("Current User ID: {}", player.id), 10.0, 50.0),
            ];
            if settings.show_telemetry {
                // Shown x100 so the landing limits read as whole numbers
                lines.push(TextLine::new(
                    format!("x Velocity: {:.1}", player.vel.x * 100.0),
                    10.0,
                    70.0,
                ));
                lines.push(TextLine::new(
                    format!("y Velocity: {:.1}", player.vel.y * 100.0),
                    10.0,
                    90.0,
                ));
                lines.push(TextLine::new(format!("Ute angle: {}", player.angle), 10.0, 110.0));
            }
            lines
        }
    }
}

/// Banner shown while the player is settling after a touchdown.
/// `anchor` is the player's position on screen (the jumper's banner follows it).
pub fn result_lines(
    variant: Variant,
    player: &Player,
    countdown: u32,
    anchor: Vec2,
) -> Vec<TextLine> {
    match variant {
        Variant::Lander => {
            let headline = if player.crashed { "CRASHED" } else { "LANDED" };
            let mut lines = vec![
                TextLine::scaled(headline, 300.0, 200.0, 2.5),
                TextLine::scaled(format!("Total Score is: {}", player.score), 260.0, 250.0, 2.0),
            ];
            if player.fuel == 0 {
                lines.push(TextLine::scaled("Game Finished", 285.0, 290.0, 2.0));
            }
            lines
        }
        Variant::Jumper => {
            let headline = if player.crashed { "Try Again" } else { "Congrats" };
            vec![
                TextLine::new(headline, anchor.x, anchor.y),
                TextLine::new(format!("Score is: {}", player.score), anchor.x, anchor.y + 20.0),
                TextLine::new(format!("Restarting in {}", countdown), anchor.x, anchor.y + 40.0),
            ]
        }
    }
}

pub fn menu_lines() -> Vec<TextLine> {
    vec![
        TextLine::scaled("UTE LANDER", 235.0, 200.0, 3.0),
        TextLine::scaled("press a number to continue", 240.0, 260.0, 1.5),
        TextLine::new("1. Play", 335.0, 290.0),
        TextLine::new("2. Highscores", 335.0, 310.0),
        TextLine::new("3. Instructions", 335.0, 330.0),
        TextLine::new("4. To Quit Game", 335.0, 350.0),
    ]
}

pub fn scoreboard_lines(board: &Scoreboard) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine::new("Press 0 - menu", 250.0, 10.0),
        TextLine::new("Press 1 - Play", 400.0, 10.0),
        TextLine::scaled("High Scores", 295.0, 160.0, 2.0),
    ];

    if board.is_empty() {
        lines.push(TextLine::new("These are no scores to display", 275.0, 210.0));
        return lines;
    }

    lines.push(TextLine::new("Player ID", 305.0, 210.0));
    lines.push(TextLine::new("Score", 425.0, 210.0));
    for (i, entry) in board.entries.iter().enumerate() {
        let y = 230.0 + 20.0 * i as f32;
        lines.push(TextLine::new(entry.player_id.to_string(), 305.0, y));
        lines.push(TextLine::new(entry.score.to_string(), 425.0, y));
    }
    lines
}

pub fn instructions_lines() -> Vec<TextLine> {
    vec![
        TextLine::new("Press 0 - menu", 250.0, 10.0),
        TextLine::new("Press 1 - Play", 400.0, 10.0),
        TextLine::scaled("Instructions", 295.0, 130.0, 2.0),
        TextLine::new("Player must land on one of the coloured pads", 210.0, 180.0),
        TextLine::new("Left/Right rotate the ute, Up fires the rocket", 210.0, 205.0),
        TextLine::new("For a player to land you need to", 250.0, 275.0),
        TextLine::new("- Players y velocity must be less than 150 to land", 120.0, 300.0),
        TextLine::new(
            "- Players x velocity must be less than 50 and greater than -50 to land",
            120.0,
            320.0,
        ),
        TextLine::new(
            format!(
                "- Players angle must be less than {0} and greater than -{0} to land",
                MAX_LANDING_ANGLE
            ),
            120.0,
            340.0,
        ),
        TextLine::new("The game ends when your fuel is 0 and you land", 190.0, 370.0),
    ]
}
