//! Bike handlers
//!
//! Endpoints for registering and listing bikes.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Bike, NewBike};
use crate::error::AppError;
use crate::AppState;

/// Request body for bike registration
#[derive(Debug, Deserialize)]
pub struct CreateBikeRequest {
    #[serde(rename = "type")]
    pub bike_type: String,
    /// Manufacturer frame number, must be unique
    pub frame_number: String,
    pub wheel_size: i32,
}

impl From<CreateBikeRequest> for NewBike {
    fn from(request: CreateBikeRequest) -> Self {
        NewBike {
            bike_type: request.bike_type,
            frame_number: request.frame_number,
            wheel_size: request.wheel_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BikeResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub bike_type: String,
    pub frame_number: String,
    pub wheel_size: i32,
    pub created_at: String,
}

impl From<Bike> for BikeResponse {
    fn from(bike: Bike) -> Self {
        BikeResponse {
            id: bike.id.0,
            bike_type: bike.bike_type,
            frame_number: bike.frame_number,
            wheel_size: bike.wheel_size,
            created_at: bike.created_at.to_rfc3339(),
        }
    }
}

/// POST /bikes
///
/// Register a bike. Returns 409 if the frame number is already taken.
pub async fn create_bike(
    State(state): State<AppState>,
    payload: Result<Json<CreateBikeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BikeResponse>), AppError> {
    let Json(request) = payload?;

    let bike = state.bike_service.register(request.into()).await?;

    Ok((StatusCode::CREATED, Json(bike.into())))
}

/// GET /bikes
///
/// List all bikes ordered by type, wheel size and creation time.
pub async fn list_bikes(
    State(state): State<AppState>,
) -> Result<Json<Vec<BikeResponse>>, AppError> {
    let bikes = state.bike_service.list_all().await?;

    Ok(Json(bikes.into_iter().map(BikeResponse::from).collect()))
}
