use crate::validation::Validate;

/// A stored entity with a store-assigned integer id.
///
/// `Payload` is everything the caller supplies; the id (and, for records that
/// track them, timestamps) are owned by the store.
pub trait Record: Clone + Send + Sync + 'static {
    type Payload: Validate + Send + Sync + 'static;

    /// Human name used in not-found messages, e.g. "Task".
    const KIND: &'static str;

    fn id(&self) -> i32;

    /// Build a fresh record from a validated payload.
    fn create(id: i32, payload: Self::Payload) -> Self;

    /// Overwrite every payload field; the id is left untouched.
    fn replace(&mut self, payload: Self::Payload);
}

/// `1` for an empty collection, otherwise the current maximum id plus one.
///
/// Derived from the contents on every call, so removing the highest id makes
/// it available again.
pub fn next_id<T: Record>(records: &[T]) -> i32 {
    next_id_after(records.iter().map(Record::id).max())
}

pub fn next_id_after(max_id: Option<i32>) -> i32 {
    max_id.map_or(1, |max| max + 1)
}
