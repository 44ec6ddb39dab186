use std::{
    ffi::OsString,
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::dao::{collection_store::CollectionStore, storage::StorageResult};

use super::error::{JsonDaoError, JsonResult};

const TMP_SUFFIX: &str = ".tmp";

/// Collection persisted as a single pretty-printed JSON array on local disk.
pub struct JsonFileStore<T> {
    path: Arc<Path>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _records: PhantomData,
        }
    }
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Create a store backed by the document at `path`. Nothing is touched on disk until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::from(path.into()),
            _records: PhantomData,
        }
    }

    async fn read_document(&self) -> JsonResult<Option<Vec<T>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(JsonDaoError::Read {
                    path: self.path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| JsonDaoError::Decode {
                path: self.path.to_path_buf(),
                source,
            })
    }

    fn encode(&self, records: &[T]) -> JsonResult<Vec<u8>> {
        serde_json::to_vec_pretty(records).map_err(|source| JsonDaoError::Encode {
            path: self.path.to_path_buf(),
            source,
        })
    }

    /// Only encoded bytes cross the awaits below, so the future stays `Send` for any `T: Send`.
    async fn write_document(&self, payload: Vec<u8>) -> JsonResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| JsonDaoError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, payload)
            .await
            .map_err(|source| JsonDaoError::Write {
                path: tmp_path.clone(),
                source,
            })?;

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| JsonDaoError::Replace {
                path: self.path.to_path_buf(),
                source,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("collection"));
        name.push(TMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Vec<T>>>> {
        let store = self.clone();
        Box::pin(async move { store.read_document().await.map_err(Into::into) })
    }

    fn save(&self, records: Vec<T>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        let payload = self.encode(&records);
        Box::pin(async move { store.write_document(payload?).await.map_err(Into::into) })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{models::WordEntity, storage::StorageError};

    fn entity(category: &str, word: &str) -> WordEntity {
        WordEntity {
            category: category.into(),
            word: word.into(),
            hint: format!("hint for {word}"),
        }
    }

    /// Record type that is `Send` but not `Sync`.
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Tally {
        count: std::cell::Cell<u32>,
    }

    fn assert_send<F: Send>(future: F) -> F {
        future
    }

    #[tokio::test]
    async fn save_future_is_send_for_records_that_are_not_sync() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Tally>::new(dir.path().join("tallies.json"));
        let backend: Arc<dyn CollectionStore<Tally>> = Arc::new(store);

        let records = vec![Tally {
            count: std::cell::Cell::new(3),
        }];
        tokio::spawn(assert_send(backend.save(records)))
            .await
            .unwrap()
            .unwrap();

        let loaded = backend.load().await.unwrap().unwrap();
        assert_eq!(loaded[0].count.get(), 3);
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<WordEntity>::new(dir.path().join("words.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<WordEntity>::new(dir.path().join("nested/words.json"));
        let records = vec![entity("animals", "cat"), entity("food", "pizza")];

        store.save(records.clone()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(records));
        assert!(!dir.path().join("nested/words.json.tmp").exists());
    }

    #[tokio::test]
    async fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<WordEntity>::new(dir.path().join("words.json"));

        store.save(vec![entity("animals", "cat")]).await.unwrap();
        store.save(vec![entity("food", "sushi")]).await.unwrap();

        assert_eq!(
            store.load().await.unwrap(),
            Some(vec![entity("food", "sushi")])
        );
    }

    #[tokio::test]
    async fn garbage_content_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, b"\xac\xed\x00\x05 not json").unwrap();
        let store = JsonFileStore::<WordEntity>::new(path);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn unwritable_location_is_reported_as_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let store = JsonFileStore::<WordEntity>::new(blocker.join("words.json"));

        let err = store.save(vec![entity("animals", "cat")]).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable { .. }));
    }
}
