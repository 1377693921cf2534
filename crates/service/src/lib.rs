//! Service layer: record stores on top of `models`.
//! - `storage` holds the generic `RecordStore` contract and the in-memory store.
//! - `restaurant` holds the table-backed directory store.
//! - `seed` provides the records each memory store starts with.

pub mod errors;
pub mod storage;
pub mod restaurant;
pub mod seed;
#[cfg(test)]
pub mod test_support;
