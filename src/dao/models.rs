use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Word record as written to the words document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntity {
    /// Category the word belongs to (e.g. "animals").
    pub category: String,
    /// The word players have to guess.
    pub word: String,
    /// Clue shown to players who ask for help.
    pub hint: String,
}

/// Score record as written to the scores document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntity {
    /// Nickname chosen by the player.
    pub nickname: String,
    /// Points awarded for the game.
    pub score: u32,
    /// Elapsed game time in seconds.
    pub time_in_seconds: u32,
    /// Number of attempts made before the word was found.
    pub attempts: u32,
    /// Whether the player revealed the hint.
    pub used_hint: bool,
    /// When the score was submitted.
    pub created_at: SystemTime,
}
