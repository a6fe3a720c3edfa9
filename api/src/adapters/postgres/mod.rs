//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod bike_repo;
pub mod schema;
pub mod tour_repo;


pub use bike_repo::PostgresBikeRepository;
pub use schema::ensure_schema;
pub use tour_repo::PostgresTourRepository;
