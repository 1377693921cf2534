use std::sync::Arc;

use models::{menu_item::MenuItem, task::Task};
use service::restaurant::SeaOrmRestaurantStore;
use service::seed;
use service::storage::MemoryStore;

/// Stores owned by the running process. The three services never share records.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MemoryStore<MenuItem>>,
    pub tasks: Arc<MemoryStore<Task>>,
    /// `None` when no database is configured; the directory routes are not mounted.
    pub restaurants: Option<Arc<SeaOrmRestaurantStore>>,
}

impl AppState {
    /// Memory stores with their seed records and no restaurant directory.
    pub fn seeded() -> Self {
        Self {
            menu: MemoryStore::new(seed::menu_items()),
            tasks: MemoryStore::new(seed::tasks()),
            restaurants: None,
        }
    }

    pub fn with_restaurants(mut self, store: Arc<SeaOrmRestaurantStore>) -> Self {
        self.restaurants = Some(store);
        self
    }
}
