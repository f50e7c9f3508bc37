//! Scoreboard of finished sessions
//!
//! Kept in memory for the lifetime of the process, in the order sessions ended.

use serde::{Deserialize, Serialize};

/// One finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Session id (bumped on every new game)
    pub player_id: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a finished session
    pub fn record(&mut self, player_id: u32, score: u32) -> ScoreEntry {
        let entry = ScoreEntry { player_id, score };
        self.entries.push(entry);
        log::info!(
            "Recorded score {} for player {} ({} entries)",
            score,
            player_id,
            self.entries.len()
        );
        entry
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Best score so far (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }
}
