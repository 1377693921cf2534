//! Create `restaurant` table.
//! Ids are assigned by the application (max + 1), not by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(integer(Restaurant::Id).primary_key())
                    .col(string_len(Restaurant::Name, 100).not_null())
                    .col(text_null(Restaurant::Description))
                    .col(string_len(Restaurant::CuisineType, 50).not_null())
                    .col(string_len(Restaurant::Address, 200).not_null())
                    .col(string_len(Restaurant::PhoneNumber, 16).not_null())
                    .col(double(Restaurant::Rating).not_null().default(0.0))
                    .col(boolean(Restaurant::IsActive).not_null().default(true))
                    .col(time(Restaurant::OpeningTime).not_null())
                    .col(time(Restaurant::ClosingTime).not_null())
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Restaurant::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // cuisine search filters on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_cuisine_type")
                    .table(Restaurant::Table)
                    .col(Restaurant::CuisineType)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurant {
    Table,
    Id,
    Name,
    Description,
    CuisineType,
    Address,
    PhoneNumber,
    Rating,
    IsActive,
    OpeningTime,
    ClosingTime,
    CreatedAt,
    UpdatedAt,
}
