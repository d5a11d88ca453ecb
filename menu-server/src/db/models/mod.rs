//! Database Models

pub mod food;

pub use food::{FoodDocument, FoodRow};
