/// Wholesale persistence of record collections.
pub mod collection_store;
/// Database model definitions.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
