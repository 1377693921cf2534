//! Restaurant directory backed by the `restaurant` table.

pub mod repository;

pub use repository::SeaOrmRestaurantStore;
