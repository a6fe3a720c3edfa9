//! Tour domain entity
//!
//! A ride from one location to another, taken with a companion on a named bike.

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::ValidationError;

/// Store-assigned identifier for a tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TourId(pub i32);

impl From<i32> for TourId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TourId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted tour
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: TourId,
    pub start_location: String,
    pub end_location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub companion: String,
    /// Free-text bike reference, not linked to a registered bike
    pub bike: String,
    pub created_at: DateTime<Utc>,
}

impl Tour {
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// Data needed to record a new tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTour {
    pub start_location: String,
    pub end_location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub companion: String,
    pub bike: String,
}

/// Timestamps are stored with microsecond resolution
const STORED_SUBSEC_DIGITS: u16 = 6;

impl NewTour {
    /// Truncate both times to the resolution the store keeps, so the times that get
    /// validated are the times that get stored.
    pub fn at_stored_precision(self) -> Self {
        Self {
            start_time: self.start_time.trunc_subsecs(STORED_SUBSEC_DIGITS),
            end_time: self.end_time.trunc_subsecs(STORED_SUBSEC_DIGITS),
            ..self
        }
    }

    /// Check the tour's invariants, reporting the first rule that fails.
    ///
    /// Locations are compared exactly: `"Dorf"` and `"Dorf "` are different places.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_location.trim().is_empty() {
            return Err(ValidationError::EmptyStartLocation);
        }
        if self.end_location.trim().is_empty() {
            return Err(ValidationError::EmptyEndLocation);
        }
        if self.start_location == self.end_location {
            return Err(ValidationError::IdenticalLocations);
        }
        if self.end_time <= self.start_time {
            return Err(ValidationError::EndBeforeStart);
        }
        if self.companion.trim().is_empty() {
            return Err(ValidationError::EmptyCompanion);
        }
        if self.bike.trim().is_empty() {
            return Err(ValidationError::EmptyBike);
        }
        Ok(())
    }

    /// Attach the store-assigned fields
    pub fn into_tour(self, id: TourId, created_at: DateTime<Utc>) -> Tour {
        Tour {
            id,
            start_location: self.start_location,
            end_location: self.end_location,
            start_time: self.start_time,
            end_time: self.end_time,
            companion: self.companion,
            bike: self.bike,
            created_at,
        }
    }
}
