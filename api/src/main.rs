//! Bike & Tour API Server
//!
//! Registers bicycles and records bicycle tours in PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresBikeRepository, PostgresTourRepository};
use app::{BikeService, TourService};
use config::Config;
use domain::ports::{BikeRepository, TourRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub bike_service: Arc<BikeService<dyn BikeRepository>>,
    pub tour_service: Arc<TourService<dyn TourRepository>>,
}

impl AppState {
    pub fn new(bikes: Arc<dyn BikeRepository>, tours: Arc<dyn TourRepository>) -> Self {
        Self {
            bike_service: Arc::new(BikeService::new(bikes)),
            tour_service: Arc::new(TourService::new(tours)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct PingResponse {
    message: &'static str,
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(health))
        .route("/ping", get(ping))
        // Bikes
        .route("/bikes", post(handlers::create_bike).get(handlers::list_bikes))
        // Tours
        .route("/tours", post(handlers::create_tour).get(handlers::list_tours))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bike_tour_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bike & tour API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.ensure_schema {
        ensure_schema(&db)
            .await
            .context("Failed to create tables")?;
        tracing::info!("Tables ready");
    }

    // Create adapters
    let db = Arc::new(db);
    let bike_repo = Arc::new(PostgresBikeRepository::new(Arc::clone(&db)));
    let tour_repo = Arc::new(PostgresTourRepository::new(db));

    let app = router(AppState::new(bike_repo, tour_repo));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
