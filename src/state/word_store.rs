//! Canonical word list, keyed by normalized word and persisted wholesale after each change.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use rand::{rng, seq::IndexedRandom};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use validator::{Validate, ValidationErrors};

use crate::{
    dao::{
        collection_store::CollectionStore,
        models::WordEntity,
        storage::{StorageError, StorageResult},
    },
    state::word::WordEntry,
};

/// Reasons a word mutation can be rejected.
#[derive(Debug, Error)]
pub enum WordStoreError {
    /// The entry does not satisfy the format rules.
    #[error("invalid word entry: {0}")]
    Invalid(#[from] ValidationErrors),
    /// Another entry already uses this word.
    #[error("word `{0}` already exists")]
    Duplicate(String),
    /// No entry matches the targeted word.
    #[error("word `{0}` not found")]
    NotFound(String),
    /// The change could not be written; the in-memory list was left untouched.
    #[error("failed to persist words")]
    Persistence(#[from] StorageError),
}

/// Owns the word entries and the collection they are persisted to.
pub struct WordStore {
    words: RwLock<HashMap<String, WordEntry>>,
    backend: Arc<dyn CollectionStore<WordEntity>>,
}

impl WordStore {
    /// Read the persisted words. A missing or unreadable collection yields an empty store.
    pub async fn load(backend: Arc<dyn CollectionStore<WordEntity>>) -> Self {
        let location = backend.describe();
        let words = match backend.load().await {
            Ok(Some(entities)) => {
                let words = index_entities(entities);
                info!(%location, count = words.len(), "loaded words");
                words
            }
            Ok(None) => {
                info!(%location, "no persisted words; starting empty");
                HashMap::new()
            }
            Err(err) => {
                warn!(%location, error = %err, "failed to load words; starting empty");
                HashMap::new()
            }
        };

        Self {
            words: RwLock::new(words),
            backend,
        }
    }

    /// Every distinct category currently in use.
    pub async fn categories(&self) -> BTreeSet<String> {
        let words = self.words.read().await;
        words
            .values()
            .map(|entry| entry.category().to_owned())
            .collect()
    }

    /// All entries, sorted by category then word.
    pub async fn all_words(&self) -> Vec<WordEntry> {
        let words = self.words.read().await;
        let mut entries: Vec<WordEntry> = words.values().cloned().collect();
        entries.sort_by(|a, b| (a.category(), a.word()).cmp(&(b.category(), b.word())));
        entries
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.words.read().await.len()
    }

    /// Whether no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.words.read().await.is_empty()
    }

    /// Draw a uniformly random entry from `category` (matched case-insensitively).
    pub async fn random_word(&self, category: &str) -> Option<WordEntry> {
        let category = category.to_lowercase();
        let words = self.words.read().await;
        let candidates: Vec<&WordEntry> = words
            .values()
            .filter(|entry| entry.category() == category)
            .collect();

        candidates.choose(&mut rng()).map(|entry| (*entry).clone())
    }

    /// Insert a new entry; rejects invalid entries and words already present.
    pub async fn add_word(&self, entry: WordEntry) -> Result<(), WordStoreError> {
        entry.validate()?;

        let mut words = self.words.write().await;
        if words.contains_key(entry.word()) {
            return Err(WordStoreError::Duplicate(entry.word().to_owned()));
        }

        let key = entry.word().to_owned();
        words.insert(key.clone(), entry);

        if let Err(err) = self.save(&words).await {
            words.remove(&key);
            warn!(word = %key, error = %err, "failed to persist added word; change discarded");
            return Err(err.into());
        }

        debug!(word = %key, "word added");
        Ok(())
    }

    /// Replace the entry matching `old_word` (case-insensitively) with `entry`.
    ///
    /// The swap only happens when the new word does not collide with a different entry, so a
    /// rejected update never loses the original.
    pub async fn update_word(&self, old_word: &str, entry: WordEntry) -> Result<(), WordStoreError> {
        entry.validate()?;

        let old_key = old_word.to_lowercase();
        let new_key = entry.word().to_owned();

        let mut words = self.words.write().await;
        if !words.contains_key(&old_key) {
            return Err(WordStoreError::NotFound(old_word.to_owned()));
        }
        if new_key != old_key && words.contains_key(&new_key) {
            return Err(WordStoreError::Duplicate(new_key));
        }

        let previous = words.remove(&old_key);
        words.insert(new_key.clone(), entry);

        if let Err(err) = self.save(&words).await {
            words.remove(&new_key);
            if let Some(previous) = previous {
                words.insert(old_key, previous);
            }
            warn!(word = %new_key, error = %err, "failed to persist updated word; change discarded");
            return Err(err.into());
        }

        debug!(from = %old_key, to = %new_key, "word updated");
        Ok(())
    }

    /// Remove the entry matching `word` case-insensitively.
    pub async fn delete_word(&self, word: &str) -> Result<(), WordStoreError> {
        let key = word.to_lowercase();

        let mut words = self.words.write().await;
        let Some(removed) = words.remove(&key) else {
            return Err(WordStoreError::NotFound(word.to_owned()));
        };

        if let Err(err) = self.save(&words).await {
            words.insert(key.clone(), removed);
            warn!(word = %key, error = %err, "failed to persist word deletion; change discarded");
            return Err(err.into());
        }

        debug!(word = %key, "word deleted");
        Ok(())
    }

    async fn save(&self, words: &HashMap<String, WordEntry>) -> StorageResult<()> {
        let mut records: Vec<WordEntity> = words.values().cloned().map(Into::into).collect();
        records.sort_by(|a, b| (&a.category, &a.word).cmp(&(&b.category, &b.word)));
        self.backend.save(records).await
    }
}

/// Normalize persisted records, keeping the first valid entry for each word.
fn index_entities(entities: Vec<WordEntity>) -> HashMap<String, WordEntry> {
    let mut words = HashMap::with_capacity(entities.len());
    for entity in entities {
        let entry = WordEntry::from(entity);
        if let Err(err) = entry.validate() {
            warn!(word = %entry.word(), error = %err, "skipping invalid persisted word");
            continue;
        }
        if words.contains_key(entry.word()) {
            warn!(word = %entry.word(), "skipping duplicate persisted word");
            continue;
        }
        words.insert(entry.word().to_owned(), entry);
    }
    words
}
