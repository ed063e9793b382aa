//! Crew member CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{CrewDto, CrewWrite};
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::{CrewId, NewCrew};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /crew` — List all crew members.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    get,
    path = "/api/v1/crew",
    tag = "Crew",
    summary = "List crew members",
    responses(
        (status = 200, description = "Crew list", body = Vec<CrewDto>),
    )
)]
pub async fn list_crew(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let crew = state.store.list_crew().await?;
    let dtos: Vec<CrewDto> = crew.into_iter().map(CrewDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /crew/:id` — Get one crew member.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the crew member does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/crew/{id}",
    tag = "Crew",
    summary = "Get a crew member",
    params(
        ("id" = uuid::Uuid, Path, description = "Crew member UUID"),
    ),
    responses(
        (status = 200, description = "Crew member", body = CrewDto),
        (status = 404, description = "Crew member not found", body = ErrorResponse),
    )
)]
pub async fn get_crew(
    State(state): State<AppState>,
    Path(id): Path<CrewId>,
) -> Result<impl IntoResponse, GatewayError> {
    let crew = state.store.get_crew(id).await?;
    Ok(Json(CrewDto::from(crew)))
}

/// `POST /crew` — Create a crew member. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    post,
    path = "/api/v1/crew",
    tag = "Crew",
    summary = "Create a crew member",
    request_body = CrewWrite,
    responses(
        (status = 201, description = "Crew member created", body = CrewDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_crew(
    State(state): State<AppState>,
    Json(write): Json<CrewWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let crew = state.store.create_crew(&NewCrew::from(write)).await?;
    Ok((StatusCode::CREATED, Json(CrewDto::from(crew))))
}

/// `PUT /crew/:id` — Replace a crew member. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the crew member does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/crew/{id}",
    tag = "Crew",
    summary = "Replace a crew member",
    params(
        ("id" = uuid::Uuid, Path, description = "Crew member UUID"),
    ),
    request_body = CrewWrite,
    responses(
        (status = 200, description = "Crew member updated", body = CrewDto),
        (status = 404, description = "Crew member not found", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_crew(
    State(state): State<AppState>,
    Path(id): Path<CrewId>,
    Json(write): Json<CrewWrite>,
) -> Result<impl IntoResponse, GatewayError> {
    let crew = state.store.update_crew(id, &NewCrew::from(write)).await?;
    Ok(Json(CrewDto::from(crew)))
}

/// `DELETE /crew/:id` — Delete a crew member. Admin only.
///
/// # Errors
///
/// Returns [`GatewayError::ReferentialIntegrity`] while the crew member
/// is still assigned to flights.
#[utoipa::path(
    delete,
    path = "/api/v1/crew/{id}",
    tag = "Crew",
    summary = "Delete a crew member",
    params(
        ("id" = uuid::Uuid, Path, description = "Crew member UUID"),
    ),
    responses(
        (status = 204, description = "Crew member deleted"),
        (status = 404, description = "Crew member not found", body = ErrorResponse),
        (status = 409, description = "Crew member still assigned to flights", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_crew(
    State(state): State<AppState>,
    Path(id): Path<CrewId>,
) -> Result<impl IntoResponse, GatewayError> {
    state.store.delete_crew(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Crew routes; writes require the admin role.
pub fn routes(state: AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/crew", post(create_crew))
        .route("/crew/{id}", put(update_crew).delete(delete_crew))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/crew", get(list_crew))
        .route("/crew/{id}", get(get_crew))
        .merge(writes)
}
