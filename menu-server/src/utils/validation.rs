//! Input validation helpers
//!
//! Text length limits and the food payload validator. Numeric fields arrive
//! as JSON numbers or numeric strings and are coerced here.

use shared::models::NumberInput;
use shared::{ErrorCode, FoodFields, FoodInput};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Food names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short labels: category
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Numeric limits ──────────────────────────────────────────────────

/// Upper bound on a menu price
pub const MAX_PRICE: f64 = 1_000_000.0;

pub const MAX_RATING: f64 = 5.0;

pub const MAX_DISCOUNT: f64 = 100.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is present, non-empty and within the length limit.
pub fn validate_required_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(AppError::required_field(field)),
    };
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(value)
}

/// Validate a required number (JSON number or numeric string).
pub fn validate_required_number(value: Option<&NumberInput>, field: &str) -> AppResult<f64> {
    match value {
        Some(v) => v.coerce(field)?.ok_or_else(|| AppError::required_field(field)),
        None => Err(AppError::required_field(field)),
    }
}

fn check_range(value: f64, max: f64, code: ErrorCode, field: &str) -> AppResult<f64> {
    if !(0.0..=max).contains(&value) {
        return Err(AppError::out_of_range(
            code,
            field,
            format!("{field} must be between 0 and {max}, got {value}"),
        ));
    }
    Ok(value)
}

/// Validate a create / full-replace payload into typed fields.
///
/// Every field except `discount` is required; a missing or blank discount is 0.
pub fn validate_food(input: FoodInput) -> AppResult<FoodFields> {
    let name = validate_required_text(input.name, "name", MAX_NAME_LEN)?;
    let description = validate_required_text(input.description, "description", MAX_NOTE_LEN)?;
    let category = validate_required_text(input.category, "category", MAX_SHORT_TEXT_LEN)?;
    let image = validate_required_text(input.image, "image", MAX_URL_LEN)?;

    let price = validate_required_number(input.price.as_ref(), "price")?;
    let price = check_range(price, MAX_PRICE, ErrorCode::FoodInvalidPrice, "price")?;

    let rating = validate_required_number(input.rating.as_ref(), "rating")?;
    let rating = check_range(rating, MAX_RATING, ErrorCode::FoodInvalidRating, "rating")?;

    let discount = match input.discount.as_ref() {
        Some(v) => v.coerce("discount")?.unwrap_or(0.0),
        None => 0.0,
    };
    let discount = check_range(discount, MAX_DISCOUNT, ErrorCode::FoodInvalidDiscount, "discount")?;

    Ok(FoodFields {
        name,
        description,
        category,
        price,
        image,
        rating,
        discount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> FoodInput {
        FoodInput {
            name: Some("Pizza".into()),
            description: Some("Cheesy".into()),
            category: Some("Main Course".into()),
            price: Some(NumberInput::Number(300.0)),
            image: Some("https://img.example/pizza.png".into()),
            rating: Some(NumberInput::Text("4.5".into())),
            discount: Some(NumberInput::Text("10".into())),
        }
    }

    #[test]
    fn test_valid_payload() {
        let fields = validate_food(pizza()).unwrap();
        assert_eq!(fields.name, "Pizza");
        assert_eq!(fields.price, 300.0);
        assert_eq!(fields.rating, 4.5);
        assert_eq!(fields.discount, 10.0);
    }

    #[test]
    fn test_missing_discount_defaults_to_zero() {
        let input = FoodInput {
            discount: None,
            ..pizza()
        };
        assert_eq!(validate_food(input).unwrap().discount, 0.0);

        let input = FoodInput {
            discount: Some(NumberInput::Text(String::new())),
            ..pizza()
        };
        assert_eq!(validate_food(input).unwrap().discount, 0.0);
    }

    #[test]
    fn test_text_limits_count_characters() {
        let input = FoodInput {
            name: Some("क".repeat(MAX_NAME_LEN)),
            ..pizza()
        };
        assert_eq!(validate_food(input).unwrap().name.chars().count(), MAX_NAME_LEN);

        let err = validate_food(FoodInput {
            name: Some("क".repeat(MAX_NAME_LEN + 1)),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("201 chars"));
    }

    #[test]
    fn test_missing_fields_are_required() {
        let err = validate_food(FoodInput {
            name: None,
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.field(), Some("name"));

        let err = validate_food(FoodInput {
            image: Some("   ".into()),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.field(), Some("image"));

        let err = validate_food(FoodInput {
            price: Some(NumberInput::Text(String::new())),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_non_numeric_price() {
        let err = validate_food(FoodInput {
            price: Some(NumberInput::Text("cheap".into())),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = validate_food(FoodInput {
            price: Some(NumberInput::Number(-1.0)),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::FoodInvalidPrice);

        let err = validate_food(FoodInput {
            rating: Some(NumberInput::Number(5.5)),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::FoodInvalidRating);

        let err = validate_food(FoodInput {
            discount: Some(NumberInput::Number(150.0)),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::FoodInvalidDiscount);
        assert_eq!(err.field(), Some("discount"));
    }

    #[test]
    fn test_boundaries_accepted() {
        let input = FoodInput {
            price: Some(NumberInput::Number(0.0)),
            rating: Some(NumberInput::Number(5.0)),
            discount: Some(NumberInput::Number(100.0)),
            ..pizza()
        };
        let fields = validate_food(input).unwrap();
        assert_eq!(fields.price, 0.0);
        assert_eq!(fields.rating, 5.0);
        assert_eq!(fields.discount, 100.0);
    }

    #[test]
    fn test_name_too_long() {
        let err = validate_food(FoodInput {
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            ..pizza()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.field(), Some("name"));
    }
}
