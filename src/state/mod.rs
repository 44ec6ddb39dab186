pub mod score;
pub mod score_store;
pub mod word;
pub mod word_store;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{
        collection_store::json::JsonFileStore,
        models::{ScoreEntity, WordEntity},
    },
};

pub use self::score_store::{ScoreStore, ScoreStoreError};
pub use self::word_store::{WordStore, WordStoreError};

pub type SharedState = Arc<AppState>;

/// Central application state wiring the stores built at startup into the request handlers.
pub struct AppState {
    words: WordStore,
    scores: ScoreStore,
    config: AppConfig,
}

impl AppState {
    /// Wrap the stores in an [`Arc`] so the state can be cloned cheaply into every handler.
    pub fn new(words: WordStore, scores: ScoreStore, config: AppConfig) -> SharedState {
        Arc::new(Self {
            words,
            scores,
            config,
        })
    }

    /// Load both stores from the JSON documents named in `config`.
    pub async fn open(config: AppConfig) -> SharedState {
        let words_backend = JsonFileStore::<WordEntity>::new(config.words_path.clone());
        let scores_backend = JsonFileStore::<ScoreEntity>::new(config.scores_path.clone());
        let words = WordStore::load(Arc::new(words_backend)).await;
        let scores = ScoreStore::load(Arc::new(scores_backend)).await;
        Self::new(words, scores, config)
    }

    /// Word repository.
    pub fn words(&self) -> &WordStore {
        &self.words
    }

    /// Score repository.
    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
