//! REST endpoint handlers organized by resource.
//!
//! Each resource module exposes a `routes` constructor; write routes
//! are wrapped in a role-checking `route_layer` there, so composing
//! them here stays purely structural.

pub mod airplane;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(airport::routes(state.clone()))
        .merge(route::routes(state.clone()))
        .merge(airplane::routes(state.clone()))
        .merge(crew::routes(state.clone()))
        .merge(flight::routes(state.clone()))
        .merge(order::routes(state))
}
