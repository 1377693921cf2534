use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use common::types::Message;
use models::task::{NewTask, Task, TaskPayload};
use service::storage::{MemoryStore, RecordStore};

use crate::errors::JsonApiError;

type TaskStore = Arc<MemoryStore<Task>>;

#[utoipa::path(get, path = "/tasks", tag = "tasks", responses((status = 200, description = "All tasks in creation order")))]
pub async fn list(State(store): State<TaskStore>) -> Result<Json<Vec<Task>>, JsonApiError> {
    Ok(Json(store.get_all().await?))
}

#[utoipa::path(
    get, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(State(store): State<TaskStore>, Path(id): Path<i32>) -> Result<Json<Task>, JsonApiError> {
    Ok(Json(store.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/tasks", tag = "tasks",
    request_body = crate::openapi::NewTaskDoc,
    responses((status = 200, description = "Created"), (status = 422, description = "Validation Error"))
)]
pub async fn create(State(store): State<TaskStore>, Json(input): Json<NewTask>) -> Result<Json<Task>, JsonApiError> {
    let task = store.insert(TaskPayload::from(input)).await?;
    info!(id = task.id, "created task");
    Ok(Json(task))
}

#[utoipa::path(
    put, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    request_body = crate::openapi::TaskPayloadDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(store): State<TaskStore>,
    Path(id): Path<i32>,
    Json(input): Json<TaskPayload>,
) -> Result<Json<Task>, JsonApiError> {
    let task = store.update_by_id(id, input).await?;
    info!(id, completed = task.task.completed, "updated task");
    Ok(Json(task))
}

#[utoipa::path(
    delete, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove(State(store): State<TaskStore>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    store.delete_by_id(id).await?;
    info!(id, "deleted task");
    Ok(Json(Message::new("Task deleted successfully")))
}

pub fn router(store: TaskStore) -> Router {
    Router::new()
        .route("/tasks", get(list).post(create))
        .route("/tasks/:id", get(get_one).put(update).delete(remove))
        .with_state(store)
}
