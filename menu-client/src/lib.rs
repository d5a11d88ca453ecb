//! Menu Client - HTTP client and admin controller for the menu server
//!
//! Provides network (reqwest) and in-process (oneshot) transports, a typed
//! Food API, and the [`MenuAdmin`] create / edit / delete flow.

pub mod admin;
pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use admin::{
    AutoConfirm, Confirm, DraftField, FoodDraft, MenuAdmin, MenuCard, MenuStore, format_price,
};
pub use api::FoodApi;
pub use client::{HttpClient, NetworkHttpClient};
pub use config::{ClientConfig, RefreshPolicy};
pub use error::{ClientError, ClientResult, ErrorKind};

#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;

// Re-export shared types for convenience
pub use shared::{FoodId, FoodInput, FoodItem};
