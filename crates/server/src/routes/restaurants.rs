use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use models::restaurant::{Model as Restaurant, RestaurantPayload};
use service::restaurant::SeaOrmRestaurantStore;
use service::storage::RecordStore;

use crate::errors::JsonApiError;

type DirectoryStore = Arc<SeaOrmRestaurantStore>;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Case-insensitive substring of the restaurant name.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CuisineQuery {
    /// Exact cuisine label, e.g. `Indian`.
    pub cuisine: String,
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    params(NameQuery),
    responses((status = 200, description = "Restaurants, possibly empty"))
)]
pub async fn list(State(store): State<DirectoryStore>, Query(q): Query<NameQuery>) -> Result<Json<Vec<Restaurant>>, JsonApiError> {
    let found = match q.name.filter(|n| !n.is_empty()) {
        Some(name) => store.find_by_name(&name).await?,
        None => store.get_all().await?,
    };
    Ok(Json(found))
}

/// Zero matches is reported as 404, unlike the name filter on `list`.
#[utoipa::path(
    get, path = "/restaurants/search", tag = "restaurants",
    params(CuisineQuery),
    responses((status = 200, description = "Matching restaurants"), (status = 404, description = "No restaurant serves this cuisine"))
)]
pub async fn search_by_cuisine(
    State(store): State<DirectoryStore>,
    Query(q): Query<CuisineQuery>,
) -> Result<Json<Vec<Restaurant>>, JsonApiError> {
    let found = store.find_by_cuisine(&q.cuisine).await?;
    if found.is_empty() {
        return Err(JsonApiError::not_found(format!("No restaurants found for cuisine type: {}", q.cuisine)));
    }
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(State(store): State<DirectoryStore>, Path(id): Path<i32>) -> Result<Json<Restaurant>, JsonApiError> {
    Ok(Json(store.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/restaurants", tag = "restaurants",
    request_body = crate::openapi::RestaurantPayloadDoc,
    responses((status = 200, description = "Created"), (status = 422, description = "Validation Error"))
)]
pub async fn create(
    State(store): State<DirectoryStore>,
    Json(input): Json<RestaurantPayload>,
) -> Result<Json<Restaurant>, JsonApiError> {
    Ok(Json(store.insert(input).await?))
}

#[utoipa::path(
    put, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    request_body = crate::openapi::RestaurantPayloadDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(store): State<DirectoryStore>,
    Path(id): Path<i32>,
    Json(input): Json<RestaurantPayload>,
) -> Result<Json<Restaurant>, JsonApiError> {
    Ok(Json(store.update_by_id(id, input).await?))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses((status = 200, description = "Deleted record"), (status = 404, description = "Not Found"))
)]
pub async fn remove(State(store): State<DirectoryStore>, Path(id): Path<i32>) -> Result<Json<Restaurant>, JsonApiError> {
    let deleted = store.delete_by_id(id).await?;
    info!(id, name = %deleted.name, "removed restaurant from directory");
    Ok(Json(deleted))
}

pub fn router(store: DirectoryStore) -> Router {
    Router::new()
        .route("/restaurants", get(list).post(create))
        .route("/restaurants/", get(list).post(create))
        .route("/restaurants/search", get(search_by_cuisine))
        .route("/restaurants/:id", get(get_one).put(update).delete(remove))
        .with_state(store)
}
