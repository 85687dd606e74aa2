//! Roster Server
//!
//! HTTP front for the durable user store (SQLite) and the volatile upsert
//! store (process memory).

pub mod config;
pub mod handlers;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use roster_core::{RecordStore, UserStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub records: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, records: Arc<dyn RecordStore>) -> Self {
        Self { users, records }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", post(handlers::users::create))
        .route("/users/:id", get(handlers::users::get))
        .route("/dothing", post(handlers::records::upsert))
        .route("/dothing/:name", get(handlers::records::get))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
