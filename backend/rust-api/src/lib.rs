// Library root - exports for the binaries and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::StoreError;
pub use handlers::*;

use axum::{
    routing::{delete, get, post},
    Router,
};
use services::{EventStore, PasswordStore};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub events: Arc<EventStore>,
    pub passwords: Arc<PasswordStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            events: Arc::new(EventStore::new(config.events_file.clone())),
            passwords: Arc::new(PasswordStore::new(config.password_file.clone())),
            config: Arc::new(config),
        }
    }
}

/// Full HTTP surface with its middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(handlers::list_events))
        .route("/saveEvent", post(handlers::save_event))
        .route("/deleteEvent/:id", delete(handlers::delete_event))
        .route("/updateEvents", post(handlers::update_events))
        .route("/readPass", get(handlers::read_pass))
        .route("/updatePassword", post(handlers::update_password))
        .route("/verifyPassword", post(handlers::verify_password))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the API on an already bound listener until the server stops.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}

async fn health_check() -> &'static str {
    "OK"
}
