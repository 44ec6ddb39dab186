//! Service helpers behind the word catalogue routes.

use tracing::info;

use crate::{
    dto::words::{ActionResponse, WordInput, WordResponse},
    error::ServiceError,
    state::{SharedState, word::WordEntry},
};

/// Return every category, sorted alphabetically.
pub async fn list_categories(state: &SharedState) -> Vec<String> {
    state.words().categories().await.into_iter().collect()
}

/// Draw a random word from `category`.
pub async fn random_word(state: &SharedState, category: &str) -> Result<WordResponse, ServiceError> {
    state
        .words()
        .random_word(category)
        .await
        .map(WordResponse::from)
        .ok_or_else(|| ServiceError::NotFound(format!("no words in category `{category}`")))
}

/// Return the whole catalogue for the admin panel.
pub async fn list_words(state: &SharedState) -> Vec<WordResponse> {
    state
        .words()
        .all_words()
        .await
        .into_iter()
        .map(WordResponse::from)
        .collect()
}

pub async fn add_word(state: &SharedState, payload: WordInput) -> Result<ActionResponse, ServiceError> {
    let entry = WordEntry::try_from(payload)?;
    let word = entry.word().to_owned();
    state.words().add_word(entry).await?;
    info!(%word, "word added");
    Ok(ActionResponse::new("Word added successfully"))
}

pub async fn update_word(
    state: &SharedState,
    old_word: &str,
    payload: WordInput,
) -> Result<ActionResponse, ServiceError> {
    let entry = WordEntry::try_from(payload)?;
    let word = entry.word().to_owned();
    state.words().update_word(old_word, entry).await?;
    info!(from = %old_word, to = %word, "word updated");
    Ok(ActionResponse::new("Word updated successfully"))
}

pub async fn delete_word(state: &SharedState, word: &str) -> Result<ActionResponse, ServiceError> {
    state.words().delete_word(word).await?;
    info!(%word, "word deleted");
    Ok(ActionResponse::new("Word deleted successfully"))
}
