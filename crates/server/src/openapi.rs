use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub menu_items_count: usize, pub tasks_count: usize }

#[derive(ToSchema)]
pub struct MenuItemPayloadDoc {
    pub name: String,
    pub description: String,
    /// appetizer | main_course | dessert | beverage | salad
    pub category: String,
    pub price: f64,
    pub preparation_time: i32,
    pub ingredients: Vec<String>,
    pub calories: i32,
    pub is_vegetarian: bool,
    pub is_spicy: Option<bool>,
    pub is_available: bool,
}

#[derive(ToSchema)]
pub struct NewTaskDoc { pub title: String }

#[derive(ToSchema)]
pub struct TaskPayloadDoc { pub title: String, pub completed: bool }

#[derive(ToSchema)]
pub struct RestaurantPayloadDoc {
    pub name: String,
    pub description: Option<String>,
    /// Indian | Chinese | Italian
    pub cuisine_type: String,
    pub address: String,
    pub phone_number: String,
    pub rating: Option<f64>,
    pub is_active: Option<bool>,
    pub opening_time: chrono::NaiveTime,
    pub closing_time: chrono::NaiveTime,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String>, pub field: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::menu::list,
        crate::routes::menu::get_one,
        crate::routes::menu::create,
        crate::routes::menu::update,
        crate::routes::menu::remove,
        crate::routes::tasks::list,
        crate::routes::tasks::get_one,
        crate::routes::tasks::create,
        crate::routes::tasks::update,
        crate::routes::tasks::remove,
        crate::routes::restaurants::list,
        crate::routes::restaurants::search_by_cuisine,
        crate::routes::restaurants::get_one,
        crate::routes::restaurants::create,
        crate::routes::restaurants::update,
        crate::routes::restaurants::remove,
    ),
    components(
        schemas(
            HealthResponse,
            MenuItemPayloadDoc,
            NewTaskDoc,
            TaskPayloadDoc,
            RestaurantPayloadDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "menu"),
        (name = "tasks"),
        (name = "restaurants")
    )
)]
pub struct ApiDoc;
