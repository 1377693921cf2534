//! Records each memory store starts with after a restart.

use models::menu_item::{FoodCategory, MenuItem, MenuItemPayload};
use models::record::Record;
use models::task::{Task, TaskPayload};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::create(
            1,
            MenuItemPayload {
                name: "Margherita Pizza".into(),
                description: "Classic pizza with tomato sauce, mozzarella cheese, and fresh basil".into(),
                category: FoodCategory::MainCourse,
                price: 15.99,
                preparation_time: 20,
                ingredients: strings(&["pizza dough", "tomato sauce", "mozzarella", "basil", "olive oil"]),
                calories: 650,
                is_vegetarian: true,
                is_spicy: false,
                is_available: true,
            },
        ),
        MenuItem::create(
            2,
            MenuItemPayload {
                name: "Caesar Salad".into(),
                description: "Fresh romaine lettuce with Caesar dressing, croutons, and parmesan cheese".into(),
                category: FoodCategory::Salad,
                price: 10.99,
                preparation_time: 15,
                ingredients: strings(&["romaine lettuce", "Caesar dressing", "croutons", "parmesan cheese"]),
                calories: 350,
                is_vegetarian: true,
                is_spicy: false,
                is_available: true,
            },
        ),
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![Task::create(1, TaskPayload { title: "Buy Food".into(), completed: false })]
}
