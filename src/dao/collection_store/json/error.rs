//! Error types shared by the JSON file storage implementation.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias returning [`JsonDaoError`] failures.
pub type JsonResult<T> = Result<T, JsonDaoError>;

/// Failures that can occur while reading or writing a JSON document on disk.
#[derive(Debug, Error)]
pub enum JsonDaoError {
    /// The document exists but could not be read.
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document content is not a valid record list.
    #[error("failed to decode `{}`", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The records could not be serialized.
    #[error("failed to encode records for `{}`", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The parent directory could not be created.
    #[error("failed to create directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the temporary document failed.
    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Swapping the temporary document into place failed.
    #[error("failed to replace `{}`", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
