//! Airplane-type and airplane CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{
    AirplaneDetailDto, AirplaneDto, AirplaneListDto, AirplaneTypeWrite, AirplaneWrite,
};
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::{AirplaneId, AirplaneType, AirplaneTypeId, NewAirplane};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /airplane-types` — List all airplane types.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/airplane-types",
    tag = "Airplanes",
    summary = "List airplane types",
    responses(
        (status = 200, description = "Airplane type list", body = Vec<AirplaneType>),
    )
)]
pub async fn list_airplane_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let types = state.store.list_airplane_types().await?;
    Ok(Json(types))
}

/// `GET /airplane-types/:id` — Get one airplane type.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the type does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/airplane-types/{id}",
    tag = "Airplanes",
    summary = "Get an airplane type",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane type UUID"),
    ),
    responses(
        (status = 200, description = "Airplane type", body = AirplaneType),
        (status = 404, description = "Airplane type not found", body = ErrorResponse),
    )
)]
pub async fn get_airplane_type(
    State(state): State<AppState>,
    Path(id): Path<AirplaneTypeId>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplane_type = state.store.get_airplane_type(id).await?;
    Ok(Json(airplane_type))
}

/// `POST /airplane-types` — Create an airplane type. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::UniquenessViolation`] for a duplicate name.
#[utoipa::path(
    post,
    path = "/api/v1/airplane-types",
    tag = "Airplanes",
    summary = "Create an airplane type",
    request_body = AirplaneTypeWrite,
    responses(
        (status = 201, description = "Airplane type created", body = AirplaneType),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_airplane_type(
    State(state): State<AppState>,
    Json(write): Json<AirplaneTypeWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplane_type = state.store.create_airplane_type(&write.name).await?;
    Ok((StatusCode::CREATED, Json(airplane_type)))
}

/// `PUT /airplane-types/:id` — Rename an airplane type. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the type does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/airplane-types/{id}",
    tag = "Airplanes",
    summary = "Rename an airplane type",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane type UUID"),
    ),
    request_body = AirplaneTypeWrite,
    responses(
        (status = 200, description = "Airplane type updated", body = AirplaneType),
        (status = 404, description = "Airplane type not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_airplane_type(
    State(state): State<AppState>,
    Path(id): Path<AirplaneTypeId>,
    Json(write): Json<AirplaneTypeWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplane_type = state.store.update_airplane_type(id, &write.name).await?;
    Ok(Json(airplane_type))
}

/// `DELETE /airplane-types/:id` — Delete an airplane type. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while airplanes still
/// reference the type.
#[utoipa::path(
    delete,
    path = "/api/v1/airplane-types/{id}",
    tag = "Airplanes",
    summary = "Delete an airplane type",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane type UUID"),
    ),
    responses(
        (status = 204, description = "Airplane type deleted"),
        (status = 404, description = "Airplane type not found", body = ErrorResponse),
        (status = 409, description = "Type still referenced by airplanes", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_airplane_type(
    State(state): State<AppState>,
    Path(id): Path<AirplaneTypeId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_airplane_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /airplanes` — List all airplanes with their type names.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/airplanes",
    tag = "Airplanes",
    summary = "List airplanes",
    responses(
        (status = 200, description = "Airplane list", body = Vec<AirplaneListDto>),
    )
)]
pub async fn list_airplanes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplanes = state.store.list_airplanes().await?;
    let dtos: Vec<AirplaneListDto> = airplanes.into_iter().map(AirplaneListDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /airplanes/:id` — Get one airplane with its type nested.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the airplane does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/airplanes/{id}",
    tag = "Airplanes",
    summary = "Get an airplane",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane UUID"),
    ),
    responses(
        (status = 200, description = "Airplane details", body = AirplaneDetailDto),
        (status = 404, description = "Airplane not found", body = ErrorResponse),
    )
)]
pub async fn get_airplane(
    State(state): State<AppState>,
    Path(id): Path<AirplaneId>,
) -> Result<impl IntoResponse, GatewayError> {
    let row = state.store.get_airplane(id).await?;
    Ok(Json(AirplaneDetailDto::from(row)))
}

/// `POST /airplanes` — Create an airplane. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a grid outside 1..=99
/// and [`GatewayError::UnknownReference`] for a missing type.
#[utoipa::path(
    post,
    path = "/api/v1/airplanes",
    tag = "Airplanes",
    summary = "Create an airplane",
    request_body = AirplaneWrite,
    responses(
        (status = 201, description = "Airplane created", body = AirplaneDto),
        (status = 400, description = "Invalid payload or missing type", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    Json(write): Json<AirplaneWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplane = state
        .store
        .create_airplane(&NewAirplane::from(write))
        .await?;
    Ok((StatusCode::CREATED, Json(AirplaneDto::from(airplane))))
}

/// `PUT /airplanes/:id` — Replace an airplane. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the airplane does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/airplanes/{id}",
    tag = "Airplanes",
    summary = "Replace an airplane",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane UUID"),
    ),
    request_body = AirplaneWrite,
    responses(
        (status = 200, description = "Airplane updated", body = AirplaneDto),
        (status = 400, description = "Invalid payload or missing type", body = ErrorResponse),
        (status = 404, description = "Airplane not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_airplane(
    State(state): State<AppState>,
    Path(id): Path<AirplaneId>,
    Json(write): Json<AirplaneWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let airplane = state
        .store
        .update_airplane(id, &NewAirplane::from(write))
        .await?;
    Ok(Json(AirplaneDto::from(airplane)))
}

/// `DELETE /airplanes/:id` — Delete an airplane. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while flights still
/// reference the airplane.
#[utoipa::path(
    delete,
    path = "/api/v1/airplanes/{id}",
    tag = "Airplanes",
    summary = "Delete an airplane",
    params(
        ("id" = uuid::Uuid, Path, description = "Airplane UUID"),
    ),
    responses(
        (status = 204, description = "Airplane deleted"),
        (status = 404, description = "Airplane not found", body = ErrorResponse),
        (status = 409, description = "Airplane still referenced by flights", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_airplane(
    State(state): State<AppState>,
    Path(id): Path<AirplaneId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_airplane(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Airplane and airplane-type routes; writes require the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/airplane-types", post(create_airplane_type))
        .route(
            "/airplane-types/{id}",
            put(update_airplane_type).delete(delete_airplane_type),
        )
        .route("/airplanes", post(create_airplane))
        .route(
            "/airplanes/{id}",
            put(update_airplane).delete(delete_airplane),
        )
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/airplane-types", get(list_airplane_types))
        .route("/airplane-types/{id}", get(get_airplane_type))
        .route("/airplanes", get(list_airplanes))
        .route("/airplanes/{id}", get(get_airplane))
        .merge(writes)
}
