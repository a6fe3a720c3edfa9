//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{NewBike, NewTour};

/// Create bike input with the given fields
pub fn test_new_bike(bike_type: &str, frame_number: &str, wheel_size: i32) -> NewBike {
    NewBike {
        bike_type: bike_type.to_string(),
        frame_number: frame_number.to_string(),
        wheel_size,
    }
}

/// A valid two-hour tour from Bahnhofplatz to Dorfstrasse
pub fn test_new_tour() -> NewTour {
    test_new_tour_starting(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap())
}

/// A valid two-hour tour starting at `start_time`
pub fn test_new_tour_starting(start_time: DateTime<Utc>) -> NewTour {
    NewTour {
        start_location: "Bahnhofplatz".to_string(),
        end_location: "Dorfstrasse".to_string(),
        start_time,
        end_time: start_time + Duration::hours(2),
        companion: "Sam Meyer".to_string(),
        bike: "Ghost XY1".to_string(),
    }
}
