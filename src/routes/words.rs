use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::words::{ActionResponse, WordInput, WordResponse},
    error::AppError,
    services::word_service,
    state::SharedState,
};

/// Word catalogue endpoints used by the game and the admin panel.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/words", get(list_words).post(add_word))
        .route("/api/words/categories", get(list_categories))
        .route("/api/words/random/{category}", get(random_word))
        .route("/api/words/{word}", put(update_word).delete(delete_word))
}

#[utoipa::path(
    get,
    path = "/api/words/categories",
    tag = "words",
    responses((status = 200, description = "Distinct categories", body = [String]))
)]
/// List every category that has at least one word.
pub async fn list_categories(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(word_service::list_categories(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/words/random/{category}",
    tag = "words",
    params(("category" = String, Path, description = "Category to draw from (case-insensitive)")),
    responses(
        (status = 200, description = "Random word", body = WordResponse),
        (status = 404, description = "Category has no words")
    )
)]
/// Draw a random word from a category.
pub async fn random_word(
    State(state): State<SharedState>,
    Path(category): Path<String>,
) -> Result<Json<WordResponse>, AppError> {
    Ok(Json(word_service::random_word(&state, &category).await?))
}

#[utoipa::path(
    get,
    path = "/api/words",
    tag = "words",
    responses((status = 200, description = "All words", body = [WordResponse]))
)]
/// List the whole catalogue.
pub async fn list_words(State(state): State<SharedState>) -> Json<Vec<WordResponse>> {
    Json(word_service::list_words(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/words",
    tag = "words",
    request_body = WordInput,
    responses(
        (status = 200, description = "Word added", body = ActionResponse),
        (status = 400, description = "Invalid format"),
        (status = 409, description = "Word already exists")
    )
)]
/// Add a word to the catalogue.
pub async fn add_word(
    State(state): State<SharedState>,
    Json(payload): Json<WordInput>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(word_service::add_word(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/words/{word}",
    tag = "words",
    params(("word" = String, Path, description = "Word to replace (case-insensitive)")),
    request_body = WordInput,
    responses(
        (status = 200, description = "Word updated", body = ActionResponse),
        (status = 400, description = "Invalid format"),
        (status = 404, description = "Word not found"),
        (status = 409, description = "New word collides with another entry")
    )
)]
/// Replace an existing word.
pub async fn update_word(
    State(state): State<SharedState>,
    Path(word): Path<String>,
    Json(payload): Json<WordInput>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(word_service::update_word(&state, &word, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/words/{word}",
    tag = "words",
    params(("word" = String, Path, description = "Word to delete (case-insensitive)")),
    responses(
        (status = 200, description = "Word deleted", body = ActionResponse),
        (status = 404, description = "Word not found")
    )
)]
/// Remove a word from the catalogue.
pub async fn delete_word(
    State(state): State<SharedState>,
    Path(word): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(word_service::delete_word(&state, &word).await?))
}
