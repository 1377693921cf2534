use std::sync::Arc;

use async_trait::async_trait;
use models::record::{next_id_after, Record};
use models::restaurant::{self, CuisineType, RestaurantPayload};
use models::validation::Validate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{Predicate, RecordStore};

/// SeaORM-backed restaurant store.
///
/// Mutations go through `write_lock` so the max-id read and the insert that
/// uses it cannot interleave with another writer.
pub struct SeaOrmRestaurantStore {
    db: DatabaseConnection,
    write_lock: Mutex<()>,
}

impl SeaOrmRestaurantStore {
    pub fn new(db: DatabaseConnection) -> Arc<Self> {
        Arc::new(Self { db, write_lock: Mutex::new(()) })
    }

    async fn max_id(&self) -> Result<Option<i32>, ServiceError> {
        let max = restaurant::Entity::find()
            .select_only()
            .column_as(restaurant::Column::Id.max(), "max_id")
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(max.flatten())
    }

    async fn find(&self, id: i32) -> Result<restaurant::Model, ServiceError> {
        restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found(restaurant::Model::KIND))
    }

    /// Case-insensitive substring match on the name, evaluated by the database.
    pub async fn find_by_name(&self, fragment: &str) -> Result<Vec<restaurant::Model>, ServiceError> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        restaurant::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(restaurant::Column::Name))).like(pattern))
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    /// Exact cuisine match. Labels outside the known cuisines match nothing.
    pub async fn find_by_cuisine(&self, cuisine: &str) -> Result<Vec<restaurant::Model>, ServiceError> {
        let Some(cuisine) = CuisineType::from_label(cuisine) else {
            return Ok(Vec::new());
        };
        restaurant::Entity::find()
            .filter(restaurant::Column::CuisineType.eq(cuisine))
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}

#[async_trait]
impl RecordStore<restaurant::Model> for SeaOrmRestaurantStore {
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn insert(&self, payload: RestaurantPayload) -> Result<restaurant::Model, ServiceError> {
        payload.validate()?;
        let _guard = self.write_lock.lock().await;
        let id = next_id_after(self.max_id().await?);
        let created = restaurant::Model::create(id, payload)
            .into_set_active_model()
            .insert(&self.db)
            .await
            .map_err(ServiceError::db)?;
        info!(id = created.id, cuisine = %created.cuisine_type, "created restaurant");
        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        restaurant::Entity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn get_by_id(&self, id: i32) -> Result<restaurant::Model, ServiceError> {
        self.find(id).await
    }

    #[instrument(skip(self, payload))]
    async fn update_by_id(&self, id: i32, payload: RestaurantPayload) -> Result<restaurant::Model, ServiceError> {
        payload.validate()?;
        let _guard = self.write_lock.lock().await;
        let mut current = self.find(id).await?;
        current.replace(payload);
        let updated = current
            .into_set_active_model()
            .update(&self.db)
            .await
            .map_err(ServiceError::db)?;
        info!(id, "updated restaurant");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i32) -> Result<restaurant::Model, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let found = self.find(id).await?;
        restaurant::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        info!(id, "deleted restaurant");
        Ok(found)
    }

    async fn search(
        &self,
        predicate: Predicate<'_, restaurant::Model>,
    ) -> Result<Vec<restaurant::Model>, ServiceError> {
        let all = self.get_all().await?;
        Ok(all.into_iter().filter(|r| predicate(r)).collect())
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        let n = restaurant::Entity::find().count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveTime;

    fn payload(name: &str, cuisine: CuisineType) -> RestaurantPayload {
        RestaurantPayload {
            name: name.into(),
            description: Some(format!("{name} serves {cuisine} food")),
            cuisine_type: cuisine,
            address: "42 Station Road".into(),
            phone_number: "+14155550123".into(),
            rating: 4.0,
            is_active: true,
            opening_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        }
    }

    async fn seeded_store() -> Result<Arc<SeaOrmRestaurantStore>, anyhow::Error> {
        let store = SeaOrmRestaurantStore::new(get_db().await?);
        store.insert(payload("Tandoor House", CuisineType::Indian)).await?;
        store.insert(payload("Golden Wok", CuisineType::Chinese)).await?;
        store.insert(payload("Trattoria Roma", CuisineType::Italian)).await?;
        Ok(store)
    }

    #[tokio::test]
    async fn restaurant_crud_service() -> Result<(), anyhow::Error> {
        let store = SeaOrmRestaurantStore::new(get_db().await?);

        let created = store.insert(payload("Tandoor House", CuisineType::Indian)).await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, created.updated_at);

        let found = store.get_by_id(1).await?;
        assert_eq!(found, created);

        let mut changed = payload("Tandoor Palace", CuisineType::Indian);
        changed.rating = 4.8;
        let updated = store.update_by_id(1, changed).await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Tandoor Palace");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let deleted = store.delete_by_id(1).await?;
        assert_eq!(deleted.name, "Tandoor Palace");
        assert!(matches!(store.get_by_id(1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn ids_follow_max_and_are_reused() -> Result<(), anyhow::Error> {
        let store = seeded_store().await?;
        store.delete_by_id(3).await?;
        let again = store.insert(payload("Pasta Bar", CuisineType::Italian)).await?;
        assert_eq!(again.id, 3);
        store.delete_by_id(1).await?;
        let next = store.insert(payload("Dim Sum Den", CuisineType::Chinese)).await?;
        assert_eq!(next.id, 4);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found_and_never_created() -> Result<(), anyhow::Error> {
        let store = seeded_store().await?;
        let err = store.update_by_id(99, payload("Nowhere Diner", CuisineType::Indian)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Restaurant not found"));
        assert!(matches!(store.delete_by_id(99).await, Err(ServiceError::NotFound(_))));
        assert_eq!(store.count().await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payload_rejected() -> Result<(), anyhow::Error> {
        let store = seeded_store().await?;
        let mut bad = payload("Ok Name", CuisineType::Indian);
        bad.phone_number = "call us".into();
        match store.insert(bad).await {
            Err(ServiceError::Validation(v)) => assert_eq!(v.field, "phone_number"),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(store.count().await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn same_payload_update_round_trips() -> Result<(), anyhow::Error> {
        let store = seeded_store().await?;
        let before = store.get_by_id(2).await?;
        store.update_by_id(2, before.payload()).await?;
        let after = store.get_by_id(2).await?;
        assert_eq!(after.payload(), before.payload());
        assert_eq!(after.created_at, before.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn name_and_cuisine_queries() -> Result<(), anyhow::Error> {
        let store = seeded_store().await?;
        let wok = store.find_by_name("WOK").await?;
        assert_eq!(wok.len(), 1);
        assert_eq!(wok[0].name, "Golden Wok");
        assert!(store.find_by_name("sushi").await?.is_empty());

        let italian = store.find_by_cuisine("Italian").await?;
        assert_eq!(italian.len(), 1);
        assert!(store.find_by_cuisine("Mexican").await?.is_empty());

        let rated = store.search(&|r: &restaurant::Model| r.rating >= 4.0).await?;
        assert_eq!(rated.len(), 3);
        Ok(())
    }
}
