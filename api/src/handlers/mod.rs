//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod bikes;
pub mod tours;

pub use bikes::{create_bike, list_bikes};
pub use tours::{create_tour, list_tours};
