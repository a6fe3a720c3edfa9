//! PostgreSQL adapter for BikeRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Select, Set, SqlErr,
};

use crate::domain::entities::{Bike, BikeId, NewBike};
use crate::domain::ports::BikeRepository;
use crate::entity::bikes;
use crate::error::DomainError;

/// PostgreSQL implementation of BikeRepository
pub struct PostgresBikeRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresBikeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Select for the full bike listing. Id breaks remaining ties so equal rows keep insertion order.
pub(crate) fn list_all_query() -> Select<bikes::Entity> {
    bikes::Entity::find()
        .order_by_asc(bikes::Column::BikeType)
        .order_by_asc(bikes::Column::WheelSize)
        .order_by_asc(bikes::Column::CreatedAt)
        .order_by_asc(bikes::Column::Id)
}

fn insert_error(err: DbErr, frame_number: &str) -> DomainError {
    classify_insert_error(err.sql_err(), err.to_string(), frame_number)
}

fn classify_insert_error(kind: Option<SqlErr>, cause: String, frame_number: &str) -> DomainError {
    match kind {
        // frame_number carries the only unique constraint besides the primary key
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::DuplicateFrameNumber(frame_number.to_string())
        }
        _ => DomainError::Storage(cause),
    }
}

#[async_trait]
impl BikeRepository for PostgresBikeRepository {
    async fn insert(&self, bike: NewBike) -> Result<Bike, DomainError> {
        let model = bikes::ActiveModel {
            bike_type: Set(bike.bike_type.clone()),
            frame_number: Set(bike.frame_number.clone()),
            wheel_size: Set(bike.wheel_size),
            ..Default::default()
        };

        let result = model
            .insert(&*self.db)
            .await
            .map_err(|e| insert_error(e, &bike.frame_number))?;

        Ok(result.into())
    }

    async fn list_all(&self) -> Result<Vec<Bike>, DomainError> {
        let results = list_all_query()
            .all(&*self.db)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<bikes::Model> for Bike {
    fn from(model: bikes::Model) -> Self {
        Bike {
            id: BikeId(model.id),
            bike_type: model.bike_type,
            frame_number: model.frame_number,
            wheel_size: model.wheel_size,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
