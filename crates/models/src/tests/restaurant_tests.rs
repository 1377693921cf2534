use anyhow::Result;
use chrono::NaiveTime;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::db::{connect_with_config, DatabaseConfig};
use crate::record::Record;
use crate::restaurant::{self, CuisineType, RestaurantPayload};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn payload(name: &str, cuisine: CuisineType) -> RestaurantPayload {
    RestaurantPayload {
        name: name.into(),
        description: None,
        cuisine_type: cuisine,
        address: "221 Baker Street".into(),
        phone_number: "+442071234567".into(),
        rating: 3.5,
        is_active: true,
        opening_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        closing_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn restaurant_row_round_trip() -> Result<()> {
    let db = setup_test_db().await?;

    let model = restaurant::Model::create(1, payload("Trattoria Roma", CuisineType::Italian));
    let inserted = model.into_set_active_model().insert(&db).await?;
    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.cuisine_type, CuisineType::Italian);

    let found = restaurant::Entity::find_by_id(1).one(&db).await?.expect("row exists");
    assert_eq!(found.name, "Trattoria Roma");
    assert_eq!(found.opening_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    assert!(found.description.is_none());
    Ok(())
}

#[tokio::test]
async fn cuisine_column_stores_label() -> Result<()> {
    let db = setup_test_db().await?;

    for (id, (name, cuisine)) in [("Golden Wok", CuisineType::Chinese), ("Tandoor House", CuisineType::Indian)]
        .into_iter()
        .enumerate()
    {
        restaurant::Model::create(id as i32 + 1, payload(name, cuisine))
            .into_set_active_model()
            .insert(&db)
            .await?;
    }

    let chinese = restaurant::Entity::find()
        .filter(restaurant::Column::CuisineType.eq(CuisineType::Chinese))
        .all(&db)
        .await?;
    assert_eq!(chinese.len(), 1);
    assert_eq!(chinese[0].name, "Golden Wok");
    Ok(())
}
