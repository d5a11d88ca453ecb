//! Food Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::pricing;

/// Food id (snowflake, assigned by the server on create)
pub type FoodId = i64;

/// Menu item as stored and listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// Image URL
    pub image: String,
    /// 0..=5
    pub rating: f64,
    /// Percentage, 0..=100
    #[serde(default)]
    pub discount: f64,
}

impl FoodItem {
    /// Price after discount
    pub fn discounted_price(&self) -> f64 {
        pricing::discounted_price(self.price, self.discount)
    }

    /// Whether the original price should be shown struck through
    pub fn has_discount(&self) -> bool {
        pricing::has_discount(self.discount)
    }

    /// The mutable fields of this item
    pub fn fields(&self) -> FoodFields {
        FoodFields {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            image: self.image.clone(),
            rating: self.rating,
            discount: self.discount,
        }
    }
}

/// Validated, fully-typed food fields (everything except the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    pub discount: f64,
}

impl FoodFields {
    /// Attach an id, producing the stored item
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

/// A numeric form value: either a JSON number or its text form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Coerce to a finite number.
    ///
    /// Blank text yields `None`; unparseable or non-finite values are an
    /// `InvalidFormat` error naming `field`.
    pub fn coerce(&self, field: &str) -> AppResult<Option<f64>> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().map_err(|_| {
                    AppError::invalid_format(field, format!("{field} must be a number, got '{s}'"))
                })?
            }
        };

        if !value.is_finite() {
            return Err(AppError::invalid_format(
                field,
                format!("{field} must be a finite number"),
            ));
        }
        Ok(Some(value))
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

/// Create / full-replace payload as received on the wire.
///
/// Every field is optional here so that missing fields are reported as
/// validation errors instead of body parse failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<NumberInput>,
}

impl From<FoodFields> for FoodInput {
    fn from(fields: FoodFields) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            category: Some(fields.category),
            price: Some(fields.price.into()),
            image: Some(fields.image),
            rating: Some(fields.rating.into()),
            discount: Some(fields.discount.into()),
        }
    }
}
