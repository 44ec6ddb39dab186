use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::scores::{
        CalculateScoreRequest, CalculateScoreResponse, LeaderboardQuery, NicknameCheckResponse,
        ScoreResponse, SubmitScoreRequest,
    },
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Score submission and leaderboard endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/scores", post(submit_score))
        .route("/api/scores/leaderboard", get(leaderboard))
        .route("/api/scores/check-nickname/{nickname}", get(check_nickname))
        .route("/api/scores/calculate", post(calculate_score))
}

#[utoipa::path(
    get,
    path = "/api/scores/leaderboard",
    tag = "scores",
    params(LeaderboardQuery),
    responses((status = 200, description = "Best scores, highest first", body = [ScoreResponse]))
)]
/// Return the leaderboard.
pub async fn leaderboard(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Vec<ScoreResponse>> {
    Json(score_service::leaderboard(&state, query.limit).await)
}

#[utoipa::path(
    post,
    path = "/api/scores",
    tag = "scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = ScoreResponse),
        (status = 503, description = "Score could not be persisted")
    )
)]
/// Record a finished game; the score is computed server-side.
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    Ok(Json(score_service::submit_score(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/scores/check-nickname/{nickname}",
    tag = "scores",
    params(("nickname" = String, Path, description = "Nickname to check (case-insensitive)")),
    responses((status = 200, description = "Availability", body = NicknameCheckResponse))
)]
/// Tell whether a nickname is still free on the leaderboard.
pub async fn check_nickname(
    State(state): State<SharedState>,
    Path(nickname): Path<String>,
) -> Json<NicknameCheckResponse> {
    Json(score_service::check_nickname(&state, &nickname).await)
}

#[utoipa::path(
    post,
    path = "/api/scores/calculate",
    tag = "scores",
    request_body = CalculateScoreRequest,
    responses((status = 200, description = "Computed score", body = CalculateScoreResponse))
)]
/// Preview a score without recording it.
pub async fn calculate_score(
    Json(payload): Json<CalculateScoreRequest>,
) -> Json<CalculateScoreResponse> {
    Json(score_service::preview_score(&payload))
}
