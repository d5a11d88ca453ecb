//! Food Model

use serde::{Deserialize, Serialize};
use shared::{FoodFields, FoodId, FoodItem};

/// Document body of a `food` record; the id lives in the record key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDocument {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    #[serde(default)]
    pub discount: f64,
}

impl FoodDocument {
    pub fn into_item(self, id: FoodId) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            image: self.image,
            rating: self.rating,
            discount: self.discount,
        }
    }
}

impl From<FoodFields> for FoodDocument {
    fn from(fields: FoodFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            category: fields.category,
            price: fields.price,
            image: fields.image,
            rating: fields.rating,
            discount: fields.discount,
        }
    }
}

/// Listing row, with the record key projected as `food_id`
#[derive(Debug, Clone, Deserialize)]
pub struct FoodRow {
    pub food_id: FoodId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    #[serde(default)]
    pub discount: f64,
}

impl From<FoodRow> for FoodItem {
    fn from(row: FoodRow) -> Self {
        Self {
            id: row.food_id,
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            image: row.image,
            rating: row.rating,
            discount: row.discount,
        }
    }
}
