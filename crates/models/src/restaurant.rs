//! Restaurant directory entity, stored in the `restaurant` table.

use chrono::{NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::validation::{char_len_within, Rule, Validate};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone number pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum CuisineType {
    #[sea_orm(string_value = "Indian")]
    Indian,
    #[sea_orm(string_value = "Chinese")]
    Chinese,
    #[sea_orm(string_value = "Italian")]
    Italian,
}

impl CuisineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Indian => "Indian",
            CuisineType::Chinese => "Chinese",
            CuisineType::Italian => "Italian",
        }
    }

    /// Exact label match; unknown cuisines yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Indian" => Some(CuisineType::Indian),
            "Chinese" => Some(CuisineType::Chinese),
            "Italian" => Some(CuisineType::Italian),
            _ => None,
        }
    }
}

impl std::fmt::Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cuisine_type: CuisineType,
    pub address: String,
    pub phone_number: String,
    pub rating: f64,
    pub is_active: bool,
    pub opening_time: Time,
    pub closing_time: Time,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_active() -> bool {
    true
}

/// Caller-supplied restaurant fields; id and timestamps are store-managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cuisine_type: CuisineType,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

fn phone_is_valid(p: &RestaurantPayload) -> bool {
    PHONE_PATTERN.is_match(&p.phone_number)
}

impl Validate for RestaurantPayload {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            field: "name",
            message: "must be between 3 and 100 characters",
            check: |p| char_len_within(&p.name, 3, 100),
        },
        Rule {
            field: "address",
            message: "must be between 5 and 200 characters",
            check: |p| char_len_within(&p.address, 5, 200),
        },
        Rule {
            field: "phone_number",
            message: "must be an international phone number, e.g. +14155550123",
            check: phone_is_valid,
        },
        Rule {
            field: "rating",
            message: "must be between 0.0 and 5.0",
            check: |p| (0.0..=5.0).contains(&p.rating),
        },
    ];
}

impl Record for Model {
    type Payload = RestaurantPayload;
    const KIND: &'static str = "Restaurant";

    fn id(&self) -> i32 {
        self.id
    }

    fn create(id: i32, p: RestaurantPayload) -> Self {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Self {
            id,
            name: p.name,
            description: p.description,
            cuisine_type: p.cuisine_type,
            address: p.address,
            phone_number: p.phone_number,
            rating: p.rating,
            is_active: p.is_active,
            opening_time: p.opening_time,
            closing_time: p.closing_time,
            created_at: now,
            updated_at: now,
        }
    }

    fn replace(&mut self, p: RestaurantPayload) {
        self.name = p.name;
        self.description = p.description;
        self.cuisine_type = p.cuisine_type;
        self.address = p.address;
        self.phone_number = p.phone_number;
        self.rating = p.rating;
        self.is_active = p.is_active;
        self.opening_time = p.opening_time;
        self.closing_time = p.closing_time;
        self.updated_at = Utc::now().into();
    }
}

impl Model {
    /// Every column marked `Set`, for both insert and full-row update.
    pub fn into_set_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            description: Set(self.description),
            cuisine_type: Set(self.cuisine_type),
            address: Set(self.address),
            phone_number: Set(self.phone_number),
            rating: Set(self.rating),
            is_active: Set(self.is_active),
            opening_time: Set(self.opening_time),
            closing_time: Set(self.closing_time),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }

    pub fn payload(&self) -> RestaurantPayload {
        RestaurantPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            cuisine_type: self.cuisine_type,
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            rating: self.rating,
            is_active: self.is_active,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RestaurantPayload {
        RestaurantPayload {
            name: "Spice Route".into(),
            description: Some("North Indian curries".into()),
            cuisine_type: CuisineType::Indian,
            address: "12 Market Street".into(),
            phone_number: "+919876543210".into(),
            rating: 4.2,
            is_active: true,
            opening_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn phone_pattern() {
        let mut p = payload();
        for bad in ["0123456", "+1", "555-0100", "+1234567890123456"] {
            p.phone_number = bad.into();
            assert_eq!(p.validate().unwrap_err().field, "phone_number", "{bad}");
        }
        p.phone_number = "14155550123".into();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rating_and_lengths() {
        let mut p = payload();
        p.rating = 5.1;
        assert_eq!(p.validate().unwrap_err().field, "rating");
        p.rating = f64::NAN;
        assert_eq!(p.validate().unwrap_err().field, "rating");
        p.rating = 0.0;
        p.name = "ab".into();
        assert_eq!(p.validate().unwrap_err().field, "name");
        p.name = "abc".into();
        p.address = "1 A".into();
        assert_eq!(p.validate().unwrap_err().field, "address");
    }

    #[test]
    fn defaults_applied_on_deserialize() {
        let p: RestaurantPayload = serde_json::from_value(serde_json::json!({
            "name": "Golden Dragon",
            "cuisine_type": "Chinese",
            "address": "8 Harbour Road",
            "phone_number": "+85221234567",
            "opening_time": "10:00:00",
            "closing_time": "22:30:00"
        }))
        .unwrap();
        assert_eq!(p.rating, 0.0);
        assert!(p.is_active);
        assert!(p.description.is_none());
    }

    #[test]
    fn unknown_cuisine_label() {
        assert_eq!(CuisineType::from_label("Italian"), Some(CuisineType::Italian));
        assert_eq!(CuisineType::from_label("Mexican"), None);
    }

    #[test]
    fn replace_keeps_id_and_created_at() {
        let mut m = Model::create(7, payload());
        let created = m.created_at;
        let mut p = payload();
        p.name = "Spice Route Express".into();
        m.replace(p);
        assert_eq!(m.id, 7);
        assert_eq!(m.created_at, created);
        assert!(m.updated_at >= created);
        assert_eq!(m.name, "Spice Route Express");
        assert_eq!(m.payload().name, "Spice Route Express");
    }
}
