//! Flight schedule handlers.
//!
//! Listings carry the live `tickets_available` aggregate and accept
//! optional source/destination/date filters; the count reflects
//! committed tickets only, so it can be stale by the time a booking is
//! attempted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{FlightDetailDto, FlightDto, FlightFilter, FlightListDto, FlightWrite};
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::{FlightId, FlightQuery, NewFlight};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /flights` — List flights with optional filters.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/flights",
    tag = "Flights",
    summary = "List flights",
    description = "Returns scheduled flights, newest departure first, with live seat availability. Filters combine with AND; the departure filter matches the UTC calendar date.",
    params(FlightFilter),
    responses(
        (status = 200, description = "Flight list", body = Vec<FlightListDto>),
    )
)]
pub async fn list_flights(
    State(state): State<AppState>,
    Query(filter): Query<FlightFilter>,
) -> Result<impl IntoResponse, GatewayError> {
    let rows = state.store.list_flights(&FlightQuery::from(filter)).await?;
    let dtos: Vec<FlightListDto> = rows.into_iter().map(FlightListDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /flights/:id` — Get one flight with route, airplane, and crew
/// nested.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the flight does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/flights/{id}",
    tag = "Flights",
    summary = "Get a flight",
    params(
        ("id" = uuid::Uuid, Path, description = "Flight UUID"),
    ),
    responses(
        (status = 200, description = "Flight details", body = FlightDetailDto),
        (status = 404, description = "Flight not found", body = ErrorResponse),
    )
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<FlightId>,
) -> Result<impl IntoResponse, GatewayError> {
    let (row, crew) = state.store.get_flight(id).await?;
    Ok(Json(FlightDetailDto::from_parts(row, crew)))
}

/// `POST /flights` — Create a flight with its crew set. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::UnknownReference`] for a missing route,
/// airplane, or crew member.
#[utoipa::path(
    post,
    path = "/api/v1/flights",
    tag = "Flights",
    summary = "Create a flight",
    request_body = FlightWrite,
    responses(
        (status = 201, description = "Flight created", body = FlightDto),
        (status = 400, description = "Missing route, airplane, or crew member", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_flight(
    State(state): State<AppState>,
    Json(write): Json<FlightWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let new = NewFlight::from(write);
    let flight = state.store.create_flight(&new).await?;
    let dto = FlightDto::from_parts(flight, new.crew);
    Ok((StatusCode::CREATED, Json(dto)))
}

/// `PUT /flights/:id` — Replace a flight; the crew set is replaced
/// wholesale. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the flight does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/flights/{id}",
    tag = "Flights",
    summary = "Replace a flight",
    params(
        ("id" = uuid::Uuid, Path, description = "Flight UUID"),
    ),
    request_body = FlightWrite,
    responses(
        (status = 200, description = "Flight updated", body = FlightDto),
        (status = 400, description = "Missing route, airplane, or crew member", body = ErrorResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<FlightId>,
    Json(write): Json<FlightWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let new = NewFlight::from(write);
    let flight = state.store.update_flight(id, &new).await?;
    let dto = FlightDto::from_parts(flight, new.crew);
    Ok(Json(dto))
}

/// `DELETE /flights/:id` — Delete a flight and its crew assignments.
/// Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while tickets still
/// reference the flight.
#[utoipa::path(
    delete,
    path = "/api/v1/flights/{id}",
    tag = "Flights",
    summary = "Delete a flight",
    params(
        ("id" = uuid::Uuid, Path, description = "Flight UUID"),
    ),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 409, description = "Flight still referenced by tickets", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<FlightId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_flight(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flight routes; writes require the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/flights", post(create_flight))
        .route("/flights/{id}", put(update_flight).delete(delete_flight))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/flights", get(list_flights))
        .route("/flights/{id}", get(get_flight))
        .merge(writes)
}
