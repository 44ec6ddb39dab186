use std::time::SystemTime;

use crate::dao::models::ScoreEntity;

/// Result of a finished game as recorded on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Nickname chosen by the player.
    pub nickname: String,
    /// Points awarded, as computed by [`crate::services::scoring::calculate_score`].
    pub score: u32,
    /// Elapsed game time in seconds.
    pub time_in_seconds: u32,
    /// Number of attempts made.
    pub attempts: u32,
    /// Whether the hint was revealed.
    pub used_hint: bool,
    created_at: SystemTime,
}

impl ScoreEntry {
    /// Record a new score stamped with the current time.
    pub fn new(
        nickname: impl Into<String>,
        score: u32,
        time_in_seconds: u32,
        attempts: u32,
        used_hint: bool,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            score,
            time_in_seconds,
            attempts,
            used_hint,
            created_at: SystemTime::now(),
        }
    }

    /// When the score was submitted.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl From<ScoreEntity> for ScoreEntry {
    fn from(entity: ScoreEntity) -> Self {
        Self {
            nickname: entity.nickname,
            score: entity.score,
            time_in_seconds: entity.time_in_seconds,
            attempts: entity.attempts,
            used_hint: entity.used_hint,
            created_at: entity.created_at,
        }
    }
}

impl From<ScoreEntry> for ScoreEntity {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            nickname: entry.nickname,
            score: entry.score,
            time_in_seconds: entry.time_in_seconds,
            attempts: entry.attempts,
            used_hint: entry.used_hint,
            created_at: entry.created_at,
        }
    }
}
