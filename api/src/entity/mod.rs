//! SeaORM table models
//!
//! One module per table. Domain conversions live with the Postgres adapters.

pub mod bikes;
pub mod tours;
