//! Data models shared between the menu server and its clients

pub mod food;

pub use food::{FoodFields, FoodId, FoodInput, FoodItem, NumberInput};
