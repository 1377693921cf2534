//! Storage abstractions for the service layer.
//!
//! Every store implements [`RecordStore`]: validated insert with a derived
//! id, full replace-by-id, delete-by-id and lookups.

use async_trait::async_trait;
use models::record::Record;

use crate::errors::ServiceError;

pub mod memory_store;

pub use memory_store::MemoryStore;

/// Caller-supplied filter for [`RecordStore::search`].
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Validate, assign `max id + 1` (or 1) and append.
    async fn insert(&self, payload: T::Payload) -> Result<T, ServiceError>;

    /// All records in insertion order.
    async fn get_all(&self) -> Result<Vec<T>, ServiceError>;

    async fn get_by_id(&self, id: i32) -> Result<T, ServiceError>;

    /// Validate, then overwrite every payload field of an existing record.
    /// A missing id is `NotFound`; nothing is created.
    async fn update_by_id(&self, id: i32, payload: T::Payload) -> Result<T, ServiceError>;

    /// Remove the record and hand it back.
    async fn delete_by_id(&self, id: i32) -> Result<T, ServiceError>;

    /// Records matching `predicate`; an empty result is not an error.
    async fn search(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, ServiceError>;

    async fn count(&self) -> Result<usize, ServiceError>;
}
