//! Shared types for the Foodio menu service
//!
//! Wire models, discount math, error codes and the unified API response,
//! used by both `menu-server` and `menu-client`.

pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{FoodFields, FoodId, FoodInput, FoodItem};
