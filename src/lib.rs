//! School library server
//!
//! Tracks books, members and active loans through server-rendered HTML forms
//! backed by a single SQLite database, with a small JSON API alongside.

use std::sync::Arc;

use axum::Router;
use sqlx::{Pool, Sqlite};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire repositories and services around an open database pool
    pub fn new(config: AppConfig, pool: Pool<Sqlite>) -> Self {
        let services = Services::new(Repository::new(pool), config.library.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = api::router().layer(cors).with_state(state.clone());

    Router::new()
        .merge(web::router().with_state(state))
        .nest("/api/v1", api_v1)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
