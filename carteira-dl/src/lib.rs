//! carteira-dl library interface
//!
//! Exposes the document loading pipeline (`loader::load_document`) for the
//! card viewer shell and for integration testing, plus the HTTP router the
//! service binary mounts.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod influencer;
pub mod loader;
pub mod models;
pub mod services;
pub mod transform;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::CertfyClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Document cache connection pool
    pub db: SqlitePool,
    /// Certfy verification API client
    pub certfy: CertfyClient,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last pipeline error for diagnostic purposes
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(db: SqlitePool, certfy: CertfyClient) -> Self {
        Self {
            db,
            certfy,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }
}

/// Build application router.
///
/// CORS is permissive: the viewer shell is a browser application served
/// from a different origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::document_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
