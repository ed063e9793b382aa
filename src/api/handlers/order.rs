//! Order handlers.
//!
//! Both endpoints require the customer role; the owning user comes from
//! the verified token, never from the request body, so callers can only
//! ever see or create their own orders.

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use crate::api::dto::{CreateOrderRequest, OrderDto, OrderListDto};
use crate::app_state::AppState;
use crate::auth::{AuthUser, require_customer};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /orders` — List the caller's orders, newest first.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a valid customer
/// token.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "List own orders",
    description = "Returns the authenticated customer's orders, newest first, each with its tickets and a summary of every ticket's flight.",
    responses(
        (status = 200, description = "Order list", body = Vec<OrderListDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a customer", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, GatewayError> {
    let orders = state.booking.list_orders(user.id).await?;
    let dtos: Vec<OrderListDto> = orders.into_iter().map(OrderListDto::from).collect();
    Ok(Json(dtos))
}

/// `POST /orders` — Book seats atomically.
///
/// # Errors
///
/// Returns [`GatewayError::EmptyOrder`] for an empty ticket list,
/// [`GatewayError::SeatOutOfRange`] for a seat outside the flight's
/// airplane grid, and [`GatewayError::SeatTaken`] when any requested
/// seat is already booked; in every failure case nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "Create an order",
    description = "Creates an order claiming every requested seat, or nothing at all. Seat coordinates are validated against each flight's airplane as stored.",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Empty order or seat out of range", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Seat already taken", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let order = state.booking.create_order(user.id, &request.tickets).await?;
    let dto = OrderDto::from_parts(order, request.tickets);
    Ok((StatusCode::CREATED, Json(dto)))
}

/// Order routes; every endpoint requires the customer role.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route_layer(middleware::from_fn_with_state(state, require_customer))
}
