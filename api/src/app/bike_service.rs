//! Bike service
//!
//! Registers bikes after checking their invariants and lists the fleet.

use std::sync::Arc;

use crate::domain::entities::{Bike, NewBike};
use crate::domain::ports::BikeRepository;
use crate::error::DomainError;

/// Service for registering and listing bikes
pub struct BikeService<R>
where
    R: BikeRepository + ?Sized,
{
    bikes: Arc<R>,
}

impl<R> BikeService<R>
where
    R: BikeRepository + ?Sized,
{
    pub fn new(bikes: Arc<R>) -> Self {
        Self { bikes }
    }

    /// Validate and store a bike.
    ///
    /// An invalid bike never reaches the repository.
    pub async fn register(&self, bike: NewBike) -> Result<Bike, DomainError> {
        bike.validate()?;
        self.bikes.insert(bike).await
    }

    /// All bikes, ordered by type, wheel size, then creation time
    pub async fn list_all(&self) -> Result<Vec<Bike>, DomainError> {
        self.bikes.list_all().await
    }
}
