//! PostgreSQL adapter for TourRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set};

use crate::domain::entities::{NewTour, Tour, TourId};
use crate::domain::ports::TourRepository;
use crate::entity::tours;
use crate::error::DomainError;

/// PostgreSQL implementation of TourRepository
pub struct PostgresTourRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresTourRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn list_all_query() -> Select<tours::Entity> {
    tours::Entity::find()
        .order_by_asc(tours::Column::StartTime)
        .order_by_asc(tours::Column::Id)
}

#[async_trait]
impl TourRepository for PostgresTourRepository {
    async fn insert(&self, tour: NewTour) -> Result<Tour, DomainError> {
        let model = tours::ActiveModel {
            start_location: Set(tour.start_location),
            end_location: Set(tour.end_location),
            start_time: Set(tour.start_time.fixed_offset()),
            end_time: Set(tour.end_time.fixed_offset()),
            companion: Set(tour.companion),
            bike: Set(tour.bike),
            ..Default::default()
        };

        let result = model
            .insert(&*self.db)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(result.into())
    }

    async fn list_all(&self) -> Result<Vec<Tour>, DomainError> {
        let results = list_all_query()
            .all(&*self.db)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<tours::Model> for Tour {
    fn from(model: tours::Model) -> Self {
        Tour {
            id: TourId(model.id),
            start_location: model.start_location,
            end_location: model.end_location,
            start_time: model.start_time.with_timezone(&Utc),
            end_time: model.end_time.with_timezone(&Utc),
            companion: model.companion,
            bike: model.bike,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
