//! Test utilities
//!
//! In-memory repository implementations and test fixtures for unit testing.
//!
//! The in-memory repositories enforce the same frame-number uniqueness and listing
//! order as the PostgreSQL tables, so services and handlers can be tested without a
//! database. The adapters themselves are covered with SeaORM's `MockDatabase`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
