//! Domain entities
//!
//! Pure domain models for the two record kinds the service keeps.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod bike;
pub mod tour;

pub use bike::{Bike, BikeId, NewBike};
pub use tour::{NewTour, Tour, TourId};
