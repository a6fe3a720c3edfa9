//! Tour service
//!
//! Records tours after checking their invariants and lists them by start time.

use std::sync::Arc;

use crate::domain::entities::{NewTour, Tour};
use crate::domain::ports::TourRepository;
use crate::error::DomainError;

/// Service for recording and listing tours
pub struct TourService<R>
where
    R: TourRepository + ?Sized,
{
    tours: Arc<R>,
}

impl<R> TourService<R>
where
    R: TourRepository + ?Sized,
{
    pub fn new(tours: Arc<R>) -> Self {
        Self { tours }
    }

    /// Validate and store a tour
    pub async fn register(&self, tour: NewTour) -> Result<Tour, DomainError> {
        let tour = tour.at_stored_precision();
        tour.validate()?;
        self.tours.insert(tour).await
    }

    pub async fn list_all(&self) -> Result<Vec<Tour>, DomainError> {
        self.tours.list_all().await
    }
}
