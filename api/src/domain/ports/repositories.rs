//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Callers validate records before handing them to a repository; a repository
//! only reports what the store says.

use async_trait::async_trait;

use crate::domain::entities::{Bike, NewBike, NewTour, Tour};
use crate::error::DomainError;

/// Repository for Bike entities
#[async_trait]
pub trait BikeRepository: Send + Sync {
    /// Insert a bike, returning it with its store-assigned id and creation time.
    ///
    /// Fails with `DomainError::DuplicateFrameNumber` if the frame number is taken.
    async fn insert(&self, bike: NewBike) -> Result<Bike, DomainError>;

    /// All bikes ordered by type, wheel size, then creation time
    async fn list_all(&self) -> Result<Vec<Bike>, DomainError>;
}

/// Repository for Tour entities
#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Insert a tour, returning it with its store-assigned id and creation time
    async fn insert(&self, tour: NewTour) -> Result<Tour, DomainError>;

    /// All tours ordered by start time
    async fn list_all(&self) -> Result<Vec<Tour>, DomainError>;
}
