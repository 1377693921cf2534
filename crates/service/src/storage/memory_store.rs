use std::sync::Arc;

use async_trait::async_trait;
use models::record::{next_id, Record};
use models::validation::Validate;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::{Predicate, RecordStore};

/// Process-memory record store.
///
/// Keeps records in a `Vec` in insertion order behind one `RwLock`, so id
/// assignment and the append happen under the same writer. Contents are lost
/// when the process exits.
pub struct MemoryStore<T> {
    inner: RwLock<Vec<T>>,
}

impl<T: Record> MemoryStore<T> {
    /// Initialize the store with seed records, kept in the given order.
    pub fn new(seed: Vec<T>) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(seed) })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn insert(&self, payload: T::Payload) -> Result<T, ServiceError> {
        payload.validate()?;
        let mut records = self.inner.write().await;
        let id = next_id(&records);
        let record = T::create(id, payload);
        records.push(record.clone());
        debug!(kind = T::KIND, id, "record inserted");
        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<T, ServiceError> {
        let records = self.inner.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(T::KIND))
    }

    async fn update_by_id(&self, id: i32, payload: T::Payload) -> Result<T, ServiceError> {
        payload.validate()?;
        let mut records = self.inner.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(T::KIND))?;
        record.replace(payload);
        debug!(kind = T::KIND, id, "record replaced");
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i32) -> Result<T, ServiceError> {
        let mut records = self.inner.write().await;
        let pos = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(T::KIND))?;
        let removed = records.remove(pos);
        debug!(kind = T::KIND, id, "record deleted");
        Ok(removed)
    }

    async fn search(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, ServiceError> {
        let records = self.inner.read().await;
        Ok(records.iter().filter(|&r| predicate(r)).cloned().collect())
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.inner.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use models::menu_item::{FoodCategory, MenuItem, MenuItemPayload};
    use models::task::{NewTask, Task, TaskPayload};

    fn veggie_bowl(calories: i32) -> MenuItemPayload {
        MenuItemPayload {
            name: "Veggie Bowl".into(),
            description: "A healthy vegetarian bowl with rice".into(),
            category: FoodCategory::MainCourse,
            price: 12.5,
            preparation_time: 10,
            ingredients: vec!["rice".into(), "veg".into()],
            calories,
            is_vegetarian: true,
            is_spicy: false,
            is_available: true,
        }
    }

    fn new_task(title: &str) -> TaskPayload {
        NewTask { title: title.into() }.into()
    }

    #[tokio::test]
    async fn insert_assigns_max_plus_one_and_is_readable() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::menu_items());
        let created = store.insert(veggie_bowl(400)).await?;
        assert_eq!(created.id, 3);
        assert_eq!(store.get_by_id(3).await?, created);
        let all = store.get_all().await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().map(|m| m.id), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Task>::empty();
        assert_eq!(store.insert(new_task("first")).await?.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payload_is_not_stored() {
        let store = MemoryStore::new(seed::menu_items());
        let err = store.insert(veggie_bowl(900)).await.unwrap_err();
        match err {
            ServiceError::Validation(v) => assert_eq!(v.field, "calories"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn freed_max_id_is_reused() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::tasks());
        let buy = store.insert(new_task("Buy Food")).await?;
        assert_eq!(buy.id, 2);
        store.delete_by_id(2).await?;
        assert_eq!(store.insert(new_task("Cook")).await?.id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_lower_id_keeps_max_sequence() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::tasks());
        assert_eq!(store.insert(new_task("Buy Food")).await?.id, 2);
        store.delete_by_id(1).await?;
        // max is still 2, so the next id is 3 and the list keeps insertion order
        assert_eq!(store.insert(new_task("Walk dog")).await?.id, 3);
        let ids: Vec<i32> = store.get_all().await?.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn emptied_store_restarts_at_one() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::tasks());
        store.delete_by_id(1).await?;
        assert_eq!(store.insert(new_task("again")).await?.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_does_not_create() {
        let store = MemoryStore::new(seed::tasks());
        let err = store
            .update_by_id(42, TaskPayload { title: "ghost".into(), completed: true })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Task not found"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let store = MemoryStore::new(seed::tasks());
        let err = store.update_by_id(42, new_task("")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_missing_id_leaves_store_unchanged() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::menu_items());
        let before = store.get_all().await?;
        assert!(matches!(store.delete_by_id(9).await, Err(ServiceError::NotFound(_))));
        assert_eq!(store.get_all().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_same_payload_round_trips() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::menu_items());
        let original = store.get_by_id(1).await?;
        let updated = store.update_by_id(1, original.item.clone()).await?;
        assert_eq!(updated, original);
        assert_eq!(store.get_by_id(1).await?, original);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_all_fields_in_place() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new(seed::tasks());
        store.insert(new_task("Second")).await?;
        let t = store.update_by_id(1, TaskPayload { title: "Buy Groceries".into(), completed: true }).await?;
        assert_eq!(t.id, 1);
        assert!(t.task.completed);
        let all = store.get_all().await?;
        assert_eq!(all[0].task.title, "Buy Groceries");
        assert_eq!(all[1].task.title, "Second");
        Ok(())
    }

    #[tokio::test]
    async fn search_returns_empty_when_nothing_matches() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<MenuItem>::new(seed::menu_items());
        let pizza = store.search(&|m: &MenuItem| m.item.name.to_lowercase().contains("pizza")).await?;
        assert_eq!(pizza.len(), 1);
        let none = store.search(&|m: &MenuItem| m.item.category == FoodCategory::Dessert).await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Task>::empty();
        let mut handles = Vec::new();
        for i in 0..16 {
            let s = Arc::clone(&store);
            handles.push(tokio::spawn(async move { s.insert(new_task(&format!("task {i}"))).await }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await??.id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
        Ok(())
    }
}
