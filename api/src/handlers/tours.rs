//! Tour handlers
//!
//! Endpoints for recording and listing tours.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewTour, Tour};
use crate::error::AppError;
use crate::AppState;

/// Request body for recording a tour. Times are RFC 3339.
#[derive(Debug, Deserialize)]
pub struct CreateTourRequest {
    pub start_location: String,
    pub end_location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub companion: String,
    /// Name of the bike ridden; free text
    pub bike: String,
}

impl From<CreateTourRequest> for NewTour {
    fn from(request: CreateTourRequest) -> Self {
        NewTour {
            start_location: request.start_location,
            end_location: request.end_location,
            start_time: request.start_time,
            end_time: request.end_time,
            companion: request.companion,
            bike: request.bike,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TourResponse {
    pub id: i32,
    pub start_location: String,
    pub end_location: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub companion: String,
    pub bike: String,
    pub created_at: String,
}

impl From<Tour> for TourResponse {
    fn from(tour: Tour) -> Self {
        TourResponse {
            id: tour.id.0,
            duration_minutes: tour.duration().num_minutes(),
            start_location: tour.start_location,
            end_location: tour.end_location,
            start_time: tour.start_time.to_rfc3339(),
            end_time: tour.end_time.to_rfc3339(),
            companion: tour.companion,
            bike: tour.bike,
            created_at: tour.created_at.to_rfc3339(),
        }
    }
}

/// POST /tours
///
/// Record a tour.
pub async fn create_tour(
    State(state): State<AppState>,
    payload: Result<Json<CreateTourRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TourResponse>), AppError> {
    let Json(request) = payload?;

    let tour = state.tour_service.register(request.into()).await?;

    Ok((StatusCode::CREATED, Json(tour.into())))
}

/// GET /tours
///
/// List all tours, earliest start first.
pub async fn list_tours(
    State(state): State<AppState>,
) -> Result<Json<Vec<TourResponse>>, AppError> {
    let tours = state.tour_service.list_all().await?;

    Ok(Json(tours.into_iter().map(TourResponse::from).collect()))
}
