//! Chronological score history backing the leaderboard.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::{
    dao::{collection_store::CollectionStore, models::ScoreEntity, storage::StorageError},
    state::score::ScoreEntry,
};

/// Failures raised while recording a score.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    /// The score could not be written; it was not kept in memory either.
    #[error("failed to persist scores")]
    Persistence(#[from] StorageError),
}

/// Owns the append-only list of submitted scores, in submission order.
pub struct ScoreStore {
    scores: RwLock<Vec<ScoreEntry>>,
    backend: Arc<dyn CollectionStore<ScoreEntity>>,
}

impl ScoreStore {
    /// Read the persisted scores. A missing or unreadable collection yields an empty store.
    pub async fn load(backend: Arc<dyn CollectionStore<ScoreEntity>>) -> Self {
        let location = backend.describe();
        let scores = match backend.load().await {
            Ok(Some(entities)) => {
                info!(%location, count = entities.len(), "loaded scores");
                entities.into_iter().map(ScoreEntry::from).collect()
            }
            Ok(None) => {
                info!(%location, "no persisted scores; starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(%location, error = %err, "failed to load scores; starting empty");
                Vec::new()
            }
        };

        Self {
            scores: RwLock::new(scores),
            backend,
        }
    }

    /// Append a score and persist the whole history. The score value is stored as given.
    pub async fn add_score(&self, entry: ScoreEntry) -> Result<(), ScoreStoreError> {
        let mut scores = self.scores.write().await;
        let nickname = entry.nickname.clone();
        scores.push(entry);

        let records = scores.iter().cloned().map(Into::into).collect();
        if let Err(err) = self.backend.save(records).await {
            scores.pop();
            warn!(%nickname, error = %err, "failed to persist score; change discarded");
            return Err(err.into());
        }

        debug!(%nickname, total = scores.len(), "score recorded");
        Ok(())
    }

    /// The `limit` best scores, highest first. Equal scores keep submission order.
    pub async fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        let scores = self.scores.read().await;
        let mut ranked: Vec<&ScoreEntry> = scores.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.into_iter().take(limit).cloned().collect()
    }

    /// Whether no recorded score uses `nickname`, ignoring case.
    pub async fn is_nickname_unique(&self, nickname: &str) -> bool {
        let nickname = nickname.to_lowercase();
        let scores = self.scores.read().await;
        !scores
            .iter()
            .any(|entry| entry.nickname.to_lowercase() == nickname)
    }

    /// Number of recorded scores.
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    /// Whether no scores are stored.
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::collection_store::{json::JsonFileStore, memory::MemoryStore};

    async fn empty_store() -> (ScoreStore, MemoryStore<ScoreEntity>) {
        let backend = MemoryStore::empty();
        let store = ScoreStore::load(Arc::new(backend.clone())).await;
        (store, backend)
    }

    #[tokio::test]
    async fn top_scores_are_sorted_descending_and_limited() {
        let (store, _) = empty_store().await;
        for (nickname, score) in [("a", 50), ("b", 90), ("c", 10), ("d", 90)] {
            store
                .add_score(ScoreEntry::new(nickname, score, 0, 0, false))
                .await
                .unwrap();
        }

        let top: Vec<u32> = store.top_scores(3).await.iter().map(|s| s.score).collect();
        assert_eq!(top, vec![90, 90, 50]);
        assert_eq!(store.top_scores(10).await.len(), 4);
    }

    #[tokio::test]
    async fn equal_scores_keep_submission_order() {
        let (store, _) = empty_store().await;
        for nickname in ["first", "second"] {
            store
                .add_score(ScoreEntry::new(nickname, 700, 0, 0, false))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .top_scores(2)
            .await
            .into_iter()
            .map(|s| s.nickname)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn zero_limit_returns_nothing() {
        let (store, _) = empty_store().await;
        store
            .add_score(ScoreEntry::new("alice", 100, 0, 0, false))
            .await
            .unwrap();

        assert!(store.top_scores(0).await.is_empty());
    }

    #[tokio::test]
    async fn nickname_uniqueness_ignores_case() {
        let (store, _) = empty_store().await;
        assert!(store.is_nickname_unique("alice").await);

        store
            .add_score(ScoreEntry::new("Alice", 800, 100, 2, false))
            .await
            .unwrap();

        assert!(!store.is_nickname_unique("alice").await);
        assert!(!store.is_nickname_unique("ALICE").await);
        assert!(store.is_nickname_unique("bob").await);
    }

    #[tokio::test]
    async fn every_submission_persists_the_full_history() {
        let (store, backend) = empty_store().await;

        store
            .add_score(ScoreEntry::new("alice", 800, 100, 2, false))
            .await
            .unwrap();
        store
            .add_score(ScoreEntry::new("bob", 600, 100, 2, true))
            .await
            .unwrap();

        let records = backend.records().unwrap();
        assert_eq!(backend.saves(), 2);
        assert_eq!(
            records.iter().map(|r| r.nickname.as_str()).collect::<Vec<_>>(),
            vec!["alice", "bob"]
        );
    }

    #[tokio::test]
    async fn failed_persistence_discards_the_score() {
        let (store, backend) = empty_store().await;
        backend.fail_saves(true);

        let err = store
            .add_score(ScoreEntry::new("alice", 800, 100, 2, false))
            .await
            .unwrap_err();

        assert!(matches!(err, ScoreStoreError::Persistence(_)));
        assert!(store.is_empty().await);
        assert!(store.is_nickname_unique("alice").await);
    }

    #[tokio::test]
    async fn reload_after_restart_restores_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let store = ScoreStore::load(Arc::new(JsonFileStore::<ScoreEntity>::new(&path))).await;
        store
            .add_score(ScoreEntry::new("alice", 550, 100, 3, true))
            .await
            .unwrap();
        store
            .add_score(ScoreEntry::new("bob", 1000, 0, 0, false))
            .await
            .unwrap();
        let before = store.top_scores(10).await;

        let reloaded =
            ScoreStore::load(Arc::new(JsonFileStore::<ScoreEntity>::new(&path))).await;

        assert_eq!(reloaded.top_scores(10).await, before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_submissions_are_all_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let store = Arc::new(
            ScoreStore::load(Arc::new(JsonFileStore::<ScoreEntity>::new(&path))).await,
        );

        let handles: Vec<_> = (0..64u32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add_score(ScoreEntry::new(format!("player{i}"), i, i, 0, false))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let reloaded =
            ScoreStore::load(Arc::new(JsonFileStore::<ScoreEntity>::new(&path))).await;
        assert_eq!(store.len().await, 64);
        assert_eq!(reloaded.len().await, 64);
        for i in 0..64 {
            assert!(!reloaded.is_nickname_unique(&format!("player{i}")).await);
        }
    }
}
