use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Message};
use service::storage::RecordStore;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod menu;
pub mod restaurants;
pub mod tasks;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message")))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Welcome to the Food Order API!"))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>, JsonApiError> {
    Ok(Json(Health {
        status: "Healthy",
        menu_items_count: state.menu.count().await?,
        tasks_count: state.tasks.count().await?,
    }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health/docs plus the menu and task
/// services, and the restaurant directory when a database is configured.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state.clone())
        .merge(menu::router(state.menu.clone()))
        .merge(tasks::router(state.tasks.clone()));

    if let Some(store) = state.restaurants.clone() {
        app = app.merge(restaurants::router(store));
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx responses are logged at ERROR
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
