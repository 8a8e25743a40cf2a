//! Pet Clinic HTTP/JSON Gateway.
//!
//! This crate exposes the customers side of the pet clinic (owners, their
//! pets, and the pet type list) as a REST API over the repositories in
//! `petclinic-core`.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::{http::StatusCode, Router};
use petclinic_core::{MemoryStore, OwnerRepository, PetRepository};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Owner persistence.
    pub owners: Arc<dyn OwnerRepository>,
    /// Pet and pet type persistence.
    pub pets: Arc<dyn PetRepository>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            owners,
            pets,
            config,
        }
    }

    /// State backed by a single in-memory store.
    pub fn with_store(store: MemoryStore, config: GatewayConfig) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store), config)
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(cors);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::pets::routes())
        .merge(routes::owners::routes())
        .layer(middleware)
        .with_state(state)
}
