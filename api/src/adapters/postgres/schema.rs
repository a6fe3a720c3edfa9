//! Table bootstrap
//!
//! Creates the `bikes` and `tours` tables when they are missing. Existing tables are
//! left untouched; there is no versioning or alteration here.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

pub const CREATE_BIKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bikes (
    id SERIAL PRIMARY KEY,
    type VARCHAR(100) NOT NULL,
    frame_number VARCHAR(50) NOT NULL UNIQUE,
    wheel_size INT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

pub const CREATE_TOURS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tours (
    id SERIAL PRIMARY KEY,
    start_location VARCHAR(255) NOT NULL,
    end_location VARCHAR(255) NOT NULL,
    start_time TIMESTAMPTZ NOT NULL,
    end_time TIMESTAMPTZ NOT NULL,
    companion VARCHAR(100) NOT NULL,
    bike VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

/// Create both tables if they do not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for ddl in [CREATE_BIKES_TABLE, CREATE_TOURS_TABLE] {
        db.execute_unprepared(ddl).await?;
    }
    Ok(())
}
