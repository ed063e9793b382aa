//! Route CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{RouteDetailDto, RouteDto, RouteListDto, RouteWrite};
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::{NewRoute, RouteId};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /routes` — List all routes with endpoint names.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/routes",
    tag = "Routes",
    summary = "List routes",
    description = "Returns every route with its endpoints resolved to airport names.",
    responses(
        (status = 200, description = "Route list", body = Vec<RouteListDto>),
    )
)]
pub async fn list_routes(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let routes = state.store.list_routes().await?;
    let dtos: Vec<RouteListDto> = routes.into_iter().map(RouteListDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /routes/:id` — Get one route with both airports nested.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the route does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    summary = "Get a route",
    params(
        ("id" = uuid::Uuid, Path, description = "Route UUID"),
    ),
    responses(
        (status = 200, description = "Route details", body = RouteDetailDto),
        (status = 404, description = "Route not found", body = ErrorResponse),
    )
)]
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<RouteId>,
) -> Result<impl IntoResponse, GatewayError> {
    let row = state.store.get_route(id).await?;
    Ok(Json(RouteDetailDto::from(row)))
}

/// `POST /routes` — Create a route. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::SameEndpoints`] when source equals
/// destination and [`GatewayError::UnknownReference`] for a missing
/// airport.
#[utoipa::path(
    post,
    path = "/api/v1/routes",
    tag = "Routes",
    summary = "Create a route",
    request_body = RouteWrite,
    responses(
        (status = 201, description = "Route created", body = RouteDto),
        (status = 400, description = "Invalid payload or missing airport", body = ErrorResponse),
        (status = 409, description = "Route already exists for this airport pair", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_route(
    State(state): State<AppState>,
    Json(write): Json<RouteWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let route = state.store.create_route(&NewRoute::from(write)).await?;
    Ok((StatusCode::CREATED, Json(RouteDto::from(route))))
}

/// `PUT /routes/:id` — Replace a route. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the route does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    summary = "Replace a route",
    params(
        ("id" = uuid::Uuid, Path, description = "Route UUID"),
    ),
    request_body = RouteWrite,
    responses(
        (status = 200, description = "Route updated", body = RouteDto),
        (status = 400, description = "Invalid payload or missing airport", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse),
        (status = 409, description = "Route already exists for this airport pair", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<RouteId>,
    Json(write): Json<RouteWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let route = state.store.update_route(id, &NewRoute::from(write)).await?;
    Ok(Json(RouteDto::from(route)))
}

/// `DELETE /routes/:id` — Delete a route. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while flights still
/// reference the route.
#[utoipa::path(
    delete,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    summary = "Delete a route",
    params(
        ("id" = uuid::Uuid, Path, description = "Route UUID"),
    ),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "Route not found", body = ErrorResponse),
        (status = 409, description = "Route still referenced by flights", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<RouteId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_route(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Route routes; writes require the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/routes", post(create_route))
        .route("/routes/{id}", put(update_route).delete(delete_route))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/routes", get(list_routes))
        .route("/routes/{id}", get(get_route))
        .merge(writes)
}
