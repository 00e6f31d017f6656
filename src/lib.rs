//! Kitchenpos - a point-of-sale backend for restaurants
//!
//! This crate provides products, menus and menu groups, order tables and
//! table groups, and the order lifecycle, served as a JSON web API.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod price;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, KitchenError};
pub use price::Price;
pub use state::AppState;
