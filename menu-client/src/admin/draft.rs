//! Form draft for creating or editing a food item

use std::fmt;
use std::str::FromStr;

use shared::models::NumberInput;
use shared::{FoodId, FoodInput, FoodItem};

use crate::{ClientError, ClientResult};

/// An editable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Category,
    Price,
    Image,
    Rating,
    Discount,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Category,
        DraftField::Price,
        DraftField::Image,
        DraftField::Rating,
        DraftField::Discount,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::Category => "category",
            DraftField::Price => "price",
            DraftField::Image => "image",
            DraftField::Rating => "rating",
            DraftField::Discount => "discount",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| ClientError::Validation(format!("Unknown field '{s}'")))
    }
}

/// In-progress form state.
///
/// Every field is kept as the text the user typed. `editing_id` is `None` in
/// create mode and names the item being edited otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub rating: String,
    pub discount: String,
    pub editing_id: Option<FoodId>,
}

impl FoodDraft {
    /// Copy an item into an edit draft.
    ///
    /// Numeric zero is shown as an empty field, the same as a missing value.
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            price: number_text(item.price),
            image: item.image.clone(),
            rating: number_text(item.rating),
            discount: number_text(item.discount),
            editing_id: Some(item.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::Price => &self.price,
            DraftField::Image => &self.image,
            DraftField::Rating => &self.rating,
            DraftField::Discount => &self.discount,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Category => self.category = value,
            DraftField::Price => self.price = value,
            DraftField::Image => self.image = value,
            DraftField::Rating => self.rating = value,
            DraftField::Discount => self.discount = value,
        }
    }

    /// Back to an empty create-mode draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Coerce into the wire payload.
    ///
    /// Blank numeric fields become 0; anything else that does not parse as a
    /// finite number is a `Validation` error. Text fields are sent as typed and
    /// checked by the server.
    pub fn to_input(&self) -> ClientResult<FoodInput> {
        Ok(FoodInput {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: Some(NumberInput::Number(parse_number(&self.price, DraftField::Price)?)),
            image: Some(self.image.clone()),
            rating: Some(NumberInput::Number(parse_number(&self.rating, DraftField::Rating)?)),
            discount: Some(NumberInput::Number(parse_number(
                &self.discount,
                DraftField::Discount,
            )?)),
        })
    }
}

fn number_text(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

fn parse_number(text: &str, field: DraftField) -> ClientResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ClientError::Validation(format!("{field} must be a number, got '{text}'")))
}
