//! Service helpers behind the score and leaderboard routes.

use tracing::info;

use crate::{
    dto::scores::{
        CalculateScoreRequest, CalculateScoreResponse, NicknameCheckResponse, ScoreResponse,
        SubmitScoreRequest,
    },
    error::ServiceError,
    services::scoring::calculate_score,
    state::{SharedState, score::ScoreEntry},
};

/// Return the best scores, using the configured leaderboard size when `limit` is absent.
pub async fn leaderboard(state: &SharedState, limit: Option<usize>) -> Vec<ScoreResponse> {
    let limit = limit.unwrap_or(state.config().leaderboard_size);
    state
        .scores()
        .top_scores(limit)
        .await
        .into_iter()
        .map(ScoreResponse::from)
        .collect()
}

/// Compute the score for a finished game and record it.
pub async fn submit_score(
    state: &SharedState,
    payload: SubmitScoreRequest,
) -> Result<ScoreResponse, ServiceError> {
    let score = calculate_score(payload.time_in_seconds, payload.attempts, payload.used_hint);
    let entry = ScoreEntry::new(
        payload.nickname,
        score,
        payload.time_in_seconds,
        payload.attempts,
        payload.used_hint,
    );

    state.scores().add_score(entry.clone()).await?;
    info!(nickname = %entry.nickname, score, "score recorded");
    Ok(entry.into())
}

pub async fn check_nickname(state: &SharedState, nickname: &str) -> NicknameCheckResponse {
    NicknameCheckResponse {
        unique: state.scores().is_nickname_unique(nickname).await,
    }
}

/// Preview the score for the given parameters without recording anything.
pub fn preview_score(payload: &CalculateScoreRequest) -> CalculateScoreResponse {
    CalculateScoreResponse {
        score: calculate_score(payload.time_in_seconds, payload.attempts, payload.used_hint),
    }
}
