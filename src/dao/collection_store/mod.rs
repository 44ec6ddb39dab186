pub mod json;
#[cfg(test)]
pub mod memory;

use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over a persisted collection that is read and written wholesale.
pub trait CollectionStore<T>: Send + Sync {
    /// Read every record. `None` means nothing has been persisted yet.
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<Vec<T>>>>;
    /// Replace the persisted content with `records`.
    fn save(&self, records: Vec<T>) -> BoxFuture<'static, StorageResult<()>>;
    /// Human readable location used in logs.
    fn describe(&self) -> String;
}
