//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//! Uniqueness and ordering follow the PostgreSQL tables.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Bike, BikeId, NewBike, NewTour, Tour, TourId};
use crate::domain::ports::{BikeRepository, TourRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Bike Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBikeRepository {
    bikes: Arc<RwLock<Vec<Bike>>>,
    insert_calls: AtomicUsize,
    failure: Option<String>,
}

impl InMemoryBikeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a storage error carrying `cause`
    pub fn failing(mut self, cause: &str) -> Self {
        self.failure = Some(cause.to_string());
        self
    }

    /// Number of times `insert` was reached
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BikeRepository for InMemoryBikeRepository {
    async fn insert(&self, bike: NewBike) -> Result<Bike, DomainError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(cause) = &self.failure {
            return Err(DomainError::Storage(cause.clone()));
        }

        let mut bikes = self.bikes.write().unwrap();
        if bikes.iter().any(|b| b.frame_number == bike.frame_number) {
            return Err(DomainError::DuplicateFrameNumber(bike.frame_number));
        }

        let id = BikeId(bikes.len() as i32 + 1);
        let stored = bike.into_bike(id, Utc::now());
        bikes.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Bike>, DomainError> {
        if let Some(cause) = &self.failure {
            return Err(DomainError::Storage(cause.clone()));
        }

        let mut bikes = self.bikes.read().unwrap().clone();
        // type, then wheel size, then creation time; stable, so ties keep insertion order
        bikes.sort_by(|a, b| {
            (&a.bike_type, a.wheel_size, a.created_at).cmp(&(&b.bike_type, b.wheel_size, b.created_at))
        });
        Ok(bikes)
    }
}

// ============================================================================
// In-Memory Tour Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTourRepository {
    tours: Arc<RwLock<Vec<Tour>>>,
    insert_calls: AtomicUsize,
    failure: Option<String>,
}

impl InMemoryTourRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a storage error carrying `cause`
    pub fn failing(mut self, cause: &str) -> Self {
        self.failure = Some(cause.to_string());
        self
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TourRepository for InMemoryTourRepository {
    async fn insert(&self, tour: NewTour) -> Result<Tour, DomainError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(cause) = &self.failure {
            return Err(DomainError::Storage(cause.clone()));
        }

        let mut tours = self.tours.write().unwrap();
        let id = TourId(tours.len() as i32 + 1);
        let stored = tour.into_tour(id, Utc::now());
        tours.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Tour>, DomainError> {
        if let Some(cause) = &self.failure {
            return Err(DomainError::Storage(cause.clone()));
        }

        let mut tours = self.tours.read().unwrap().clone();
        tours.sort_by_key(|t| t.start_time);
        Ok(tours)
    }
}
