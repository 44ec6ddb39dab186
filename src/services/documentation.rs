use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the word guessing backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::words::list_categories,
        crate::routes::words::random_word,
        crate::routes::words::list_words,
        crate::routes::words::add_word,
        crate::routes::words::update_word,
        crate::routes::words::delete_word,
        crate::routes::scores::leaderboard,
        crate::routes::scores::submit_score,
        crate::routes::scores::check_nickname,
        crate::routes::scores::calculate_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::words::WordInput,
            crate::dto::words::WordResponse,
            crate::dto::words::ActionResponse,
            crate::dto::scores::SubmitScoreRequest,
            crate::dto::scores::ScoreResponse,
            crate::dto::scores::CalculateScoreRequest,
            crate::dto::scores::CalculateScoreResponse,
            crate::dto::scores::NicknameCheckResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "words", description = "Word catalogue and random draws"),
        (name = "scores", description = "Score submission and leaderboard"),
    )
)]
pub struct ApiDoc;
