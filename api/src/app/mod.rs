//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate incoming records and delegate persistence to the ports.

pub mod bike_service;
pub mod tour_service;

pub use bike_service::BikeService;
pub use tour_service::TourService;
