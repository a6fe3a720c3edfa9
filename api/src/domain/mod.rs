//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Bike and tour records with their validation rules
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
