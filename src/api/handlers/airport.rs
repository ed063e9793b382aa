//! Airport CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::AirportWrite;
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::{Airport, AirportId, NewAirport};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /airports` — List all airports.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/airports",
    tag = "Airports",
    summary = "List airports",
    description = "Returns every airport, ordered by name. Open to anonymous callers.",
    responses(
        (status = 200, description = "Airport list", body = Vec<Airport>),
    )
)]
pub async fn list_airports(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let airports = state.store.list_airports().await?;
    Ok(Json(airports))
}

/// `GET /airports/:id` — Get one airport.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the airport does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/airports/{id}",
    tag = "Airports",
    summary = "Get an airport",
    params(
        ("id" = uuid::Uuid, Path, description = "Airport UUID"),
    ),
    responses(
        (status = 200, description = "Airport", body = Airport),
        (status = 404, description = "Airport not found", body = ErrorResponse),
    )
)]
pub async fn get_airport(
    State(state): State<AppState>,
    Path(id): Path<AirportId>,
) -> Result<impl IntoResponse, GatewayError> {
    let airport = state.store.get_airport(id).await?;
    Ok(Json(airport))
}

/// `POST /airports` — Create an airport. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a blank name and
/// [`GatewayError::UniquenessViolation`] for a duplicate one.
#[utoipa::path(
    post,
    path = "/api/v1/airports",
    tag = "Airports",
    summary = "Create an airport",
    request_body = AirportWrite,
    responses(
        (status = 201, description = "Airport created", body = Airport),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_airport(
    State(state): State<AppState>,
    Json(write): Json<AirportWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airport = state.store.create_airport(&NewAirport::from(write)).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

/// `PUT /airports/:id` — Replace an airport. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the airport does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/airports/{id}",
    tag = "Airports",
    summary = "Replace an airport",
    params(
        ("id" = uuid::Uuid, Path, description = "Airport UUID"),
    ),
    request_body = AirportWrite,
    responses(
        (status = 200, description = "Airport updated", body = Airport),
        (status = 404, description = "Airport not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_airport(
    State(state): State<AppState>,
    Path(id): Path<AirportId>,
    Json(write): Json<AirportWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airport = state
        .store
        .update_airport(id, &NewAirport::from(write))
        .await?;
    Ok(Json(airport))
}

/// `DELETE /airports/:id` — Delete an airport. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while routes still
/// reference the airport.
#[utoipa::path(
    delete,
    path = "/api/v1/airports/{id}",
    tag = "Airports",
    summary = "Delete an airport",
    params(
        ("id" = uuid::Uuid, Path, description = "Airport UUID"),
    ),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 404, description = "Airport not found", body = ErrorResponse),
        (status = 409, description = "Airport still referenced by routes", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    Path(id): Path<AirportId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_airport(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Airport routes; writes require the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/airports", post(create_airport))
        .route("/airports/{id}", put(update_airport).delete(delete_airport))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/airports", get(list_airports))
        .route("/airports/{id}", get(get_airport))
        .merge(writes)
}
