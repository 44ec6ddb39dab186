//! DTO definitions for the score and leaderboard endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{dto::format_system_time, state::score::ScoreEntry};

/// Outcome of a finished game. Any `score` sent by the client is ignored; the server
/// computes it from the other fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    /// Player nickname.
    pub nickname: String,
    /// Seconds taken to find the word.
    #[serde(default)]
    pub time_in_seconds: u32,
    /// Wrong guesses made.
    #[serde(default)]
    pub attempts: u32,
    /// Whether the hint was revealed.
    #[serde(default)]
    pub used_hint: bool,
}

/// Game parameters for a score preview.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateScoreRequest {
    /// Seconds taken to find the word.
    pub time_in_seconds: u32,
    /// Wrong guesses made.
    pub attempts: u32,
    /// Whether the hint was revealed.
    pub used_hint: bool,
}

/// Score computed without recording anything.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculateScoreResponse {
    /// Points the game would be worth.
    pub score: u32,
}

/// Leaderboard row or freshly recorded score.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    /// Player nickname.
    pub nickname: String,
    /// Points awarded by the server.
    pub score: u32,
    /// Seconds taken to find the word.
    pub time_in_seconds: u32,
    /// Wrong guesses made.
    pub attempts: u32,
    /// Whether the hint was revealed.
    pub used_hint: bool,
    /// Submission time (RFC 3339).
    pub timestamp: String,
}

impl From<ScoreEntry> for ScoreResponse {
    fn from(entry: ScoreEntry) -> Self {
        let timestamp = format_system_time(entry.created_at());
        Self {
            nickname: entry.nickname,
            score: entry.score,
            time_in_seconds: entry.time_in_seconds,
            attempts: entry.attempts,
            used_hint: entry.used_hint,
            timestamp,
        }
    }
}

/// Answer to a nickname availability check.
#[derive(Debug, Serialize, ToSchema)]
pub struct NicknameCheckResponse {
    /// `true` when no recorded score uses the nickname, ignoring case.
    pub unique: bool,
}

/// Optional leaderboard size override.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_score_field_is_ignored() {
        let request: SubmitScoreRequest = serde_json::from_str(
            r#"{ "nickname": "alice", "score": 999999, "timeInSeconds": 42, "attempts": 1, "usedHint": true }"#,
        )
        .unwrap();

        assert_eq!(request.nickname, "alice");
        assert_eq!(request.time_in_seconds, 42);
        assert_eq!(request.attempts, 1);
        assert!(request.used_hint);
    }

    #[test]
    fn score_response_uses_camel_case_and_rfc3339() {
        let response = ScoreResponse::from(ScoreEntry::new("alice", 550, 100, 3, true));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["timeInSeconds"], 100);
        assert_eq!(json["usedHint"], true);
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
