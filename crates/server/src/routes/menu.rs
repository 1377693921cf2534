use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::Message;
use models::menu_item::{MenuItem, MenuItemPayload};
use service::storage::{MemoryStore, RecordStore};

use crate::errors::JsonApiError;

type MenuStore = Arc<MemoryStore<MenuItem>>;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuQuery {
    /// Case-insensitive substring of the item name.
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuList {
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub item: MenuItem,
}

#[utoipa::path(
    get, path = "/menu", tag = "menu",
    params(MenuQuery),
    responses((status = 200, description = "Menu items, possibly empty"))
)]
pub async fn list(State(store): State<MenuStore>, Query(q): Query<MenuQuery>) -> Result<Json<MenuList>, JsonApiError> {
    let menu = match q.name.filter(|n| !n.is_empty()) {
        Some(name) => {
            let needle = name.to_lowercase();
            store.search(&move |m: &MenuItem| m.item.name.to_lowercase().contains(&needle)).await?
        }
        None => store.get_all().await?,
    };
    Ok(Json(MenuList { menu }))
}

#[utoipa::path(
    get, path = "/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(State(store): State<MenuStore>, Path(id): Path<i32>) -> Result<Json<ItemEnvelope>, JsonApiError> {
    let item = store.get_by_id(id).await?;
    Ok(Json(ItemEnvelope { message: None, item }))
}

#[utoipa::path(
    post, path = "/menu", tag = "menu",
    request_body = crate::openapi::MenuItemPayloadDoc,
    responses((status = 200, description = "Created"), (status = 422, description = "Validation Error"))
)]
pub async fn create(State(store): State<MenuStore>, Json(input): Json<MenuItemPayload>) -> Result<Json<ItemEnvelope>, JsonApiError> {
    let item = store.insert(input).await?;
    info!(id = item.id, name = %item.item.name, "created menu item");
    Ok(Json(ItemEnvelope { message: Some("Food item created successfully"), item }))
}

#[utoipa::path(
    put, path = "/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    request_body = crate::openapi::MenuItemPayloadDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(store): State<MenuStore>,
    Path(id): Path<i32>,
    Json(input): Json<MenuItemPayload>,
) -> Result<Json<ItemEnvelope>, JsonApiError> {
    let item = store.update_by_id(id, input).await?;
    info!(id, "updated menu item");
    Ok(Json(ItemEnvelope { message: Some("Food item updated successfully"), item }))
}

#[utoipa::path(
    delete, path = "/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove(State(store): State<MenuStore>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    store.delete_by_id(id).await?;
    info!(id, "deleted menu item");
    Ok(Json(Message::new("Food item deleted successfully")))
}

pub fn router(store: MenuStore) -> Router {
    Router::new()
        .route("/menu", get(list).post(create))
        .route("/menu/", get(list).post(create))
        .route("/menu/:id", get(get_one).put(update).delete(remove))
        .with_state(store)
}
