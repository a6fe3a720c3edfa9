//! Bike domain entity
//!
//! Represents a registered bicycle, identified in the real world by its frame number.

use chrono::{DateTime, Utc};
use crate::error::ValidationError;

/// Store-assigned identifier for a bike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BikeId(pub i32);

impl From<i32> for BikeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BikeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted bike
#[derive(Debug, Clone, PartialEq)]
pub struct Bike {
    pub id: BikeId,
    pub bike_type: String,
    pub frame_number: String,
    pub wheel_size: i32,
    pub created_at: DateTime<Utc>,
}

/// Data needed to register a new bike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBike {
    pub bike_type: String,
    pub frame_number: String,
    pub wheel_size: i32,
}

impl NewBike {
    /// Check the bike's invariants, reporting the first rule that fails
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bike_type.trim().is_empty() {
            return Err(ValidationError::EmptyType);
        }
        if self.frame_number.trim().is_empty() {
            return Err(ValidationError::EmptyFrameNumber);
        }
        if self.wheel_size <= 0 {
            return Err(ValidationError::InvalidWheelSize);
        }
        Ok(())
    }

    /// Attach the store-assigned fields
    pub fn into_bike(self, id: BikeId, created_at: DateTime<Utc>) -> Bike {
        Bike {
            id,
            bike_type: self.bike_type,
            frame_number: self.frame_number,
            wheel_size: self.wheel_size,
            created_at,
        }
    }
}
