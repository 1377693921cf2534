//! Restaurant menu items, kept in process memory only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::validation::{char_len_within, Rule, Validate};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("menu item name pattern"));

pub const VEGETARIAN_CALORIE_LIMIT: i32 = 800;
pub const BEVERAGE_MAX_PREP_MINUTES: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
    Salad,
}

/// Caller-supplied menu item fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPayload {
    pub name: String,
    pub description: String,
    pub category: FoodCategory,
    pub price: f64,
    pub preparation_time: i32,
    pub ingredients: Vec<String>,
    pub calories: i32,
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i32,
    #[serde(flatten)]
    pub item: MenuItemPayload,
}

fn name_is_valid(p: &MenuItemPayload) -> bool {
    NAME_PATTERN.is_match(&p.name) && p.name.chars().count() <= 100
}

impl Validate for MenuItemPayload {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            field: "name",
            message: "must contain only letters and spaces, at most 100 characters",
            check: name_is_valid,
        },
        Rule {
            field: "description",
            message: "must be between 10 and 500 characters",
            check: |p| char_len_within(&p.description, 10, 500),
        },
        Rule {
            field: "price",
            message: "must be greater than 10.0 and at most 100.0",
            check: |p| p.price > 10.0 && p.price <= 100.0,
        },
        Rule {
            field: "calories",
            message: "vegetarian items must have calories less than 800",
            check: |p| !p.is_vegetarian || p.calories < VEGETARIAN_CALORIE_LIMIT,
        },
        Rule {
            field: "preparation_time",
            message: "beverages must have preparation time of 10 minutes or less",
            check: |p| p.category != FoodCategory::Beverage || p.preparation_time <= BEVERAGE_MAX_PREP_MINUTES,
        },
        Rule {
            field: "is_spicy",
            message: "desserts and beverages cannot be spicy",
            check: |p| !(matches!(p.category, FoodCategory::Dessert | FoodCategory::Beverage) && p.is_spicy),
        },
    ];
}

impl Record for MenuItem {
    type Payload = MenuItemPayload;
    const KIND: &'static str = "Food item";

    fn id(&self) -> i32 {
        self.id
    }

    fn create(id: i32, payload: MenuItemPayload) -> Self {
        Self { id, item: payload }
    }

    fn replace(&mut self, payload: MenuItemPayload) {
        self.item = payload;
    }
}
