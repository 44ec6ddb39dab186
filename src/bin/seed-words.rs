//! Populate the configured words document with the starter catalogue.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use word_guess_back::{
    config::AppConfig,
    dao::{collection_store::json::JsonFileStore, models::WordEntity},
    state::{WordStore, WordStoreError, word::WordEntry},
};

const STARTER_WORDS: &[(&str, &str, &str)] = &[
    ("animals", "elephant", "Large gray mammal with a trunk"),
    ("animals", "giraffe", "Tallest land animal with a long neck"),
    ("animals", "penguin", "Black and white bird that cannot fly"),
    ("animals", "dolphin", "Intelligent marine mammal"),
    ("countries", "france", "European country famous for the Eiffel Tower"),
    ("countries", "japan", "Island nation known for sushi and technology"),
    ("countries", "brazil", "South American country famous for football"),
    ("food", "pizza", "Italian dish with cheese and toppings"),
    ("food", "sushi", "Japanese dish with rice and fish"),
    ("food", "hummus", "Middle Eastern chickpea spread"),
    ("technology", "computer", "Electronic device for processing data"),
    ("technology", "internet", "Global network connecting computers"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load();
    let backend = JsonFileStore::<WordEntity>::new(config.words_path.clone());
    let store = WordStore::load(Arc::new(backend)).await;

    let mut added = 0;
    for (category, word, hint) in STARTER_WORDS {
        match store.add_word(WordEntry::new(category, word, *hint)).await {
            Ok(()) => added += 1,
            Err(WordStoreError::Duplicate(word)) => {
                warn!(%word, "word already present; skipping")
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        path = %config.words_path.display(),
        added,
        total = store.len().await,
        "seeded words"
    );
    Ok(())
}
