mod error;
mod store;

pub use error::{JsonDaoError, JsonResult};
pub use store::JsonFileStore;

use crate::dao::storage::StorageError;

impl From<JsonDaoError> for StorageError {
    fn from(err: JsonDaoError) -> Self {
        match err {
            JsonDaoError::Decode { .. } => StorageError::corrupt(err.to_string(), err),
            _ => StorageError::unavailable(err.to_string(), err),
        }
    }
}
