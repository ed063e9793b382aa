//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; the health check
//! stays at the root.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes(state))
        .merge(handlers::system::routes())
}
