//! In-memory [`CollectionStore`] used by unit tests to observe saves and inject failures.

use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use futures::future::BoxFuture;

use crate::dao::{
    collection_store::CollectionStore,
    storage::{StorageError, StorageResult},
};

pub struct MemoryStore<T> {
    records: Arc<Mutex<Option<Vec<T>>>>,
    fail_saves: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn empty() -> Self {
        Self {
            records: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(AtomicBool::new(false)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let store = Self::empty();
        *store.records.lock().unwrap() = Some(records);
        store
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Option<Vec<T>> {
        self.records.lock().unwrap().clone()
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            fail_saves: self.fail_saves.clone(),
            saves: self.saves.clone(),
        }
    }
}

impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Clone + Send + 'static,
{
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Vec<T>>>> {
        let records = self.records.lock().unwrap().clone();
        Box::pin(async move { Ok(records) })
    }

    fn save(&self, records: Vec<T>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            if store.fail_saves.load(Ordering::SeqCst) {
                return Err(StorageError::unavailable(
                    "disk full".into(),
                    io::Error::other("disk full"),
                ));
            }
            *store.records.lock().unwrap() = Some(records);
            store.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
