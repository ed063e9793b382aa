//! Order and ticket DTOs.
//!
//! Orders are write-once: creation echoes the requested seats, listings
//! summarize each ticket's flight by label rather than nesting the full
//! schedule projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FlightId, Order, OrderId, TicketId, TicketRequest};
use crate::persistence::rows::TicketFlightRow;

/// Request body for creating an order. Must contain at least one ticket.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateOrderRequest {
    /// Seats to claim; the whole set commits or none of it does.
    pub tickets: Vec<TicketRequest>,
}

/// Order as echoed back from creation.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrderDto {
    /// Order identifier.
    pub id: OrderId,
    /// Creation timestamp, set by the database.
    pub created_at: DateTime<Utc>,
    /// The seats claimed.
    pub tickets: Vec<TicketRequest>,
}

impl OrderDto {
    /// Assembles the creation echo from the stored order and the
    /// requests that were just committed with it.
    #[must_use]
    pub fn from_parts(order: Order, tickets: Vec<TicketRequest>) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            tickets,
        }
    }
}

/// Compact flight summary nested under a listed ticket.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FlightSummaryDto {
    /// Flight identifier.
    pub id: FlightId,
    /// `"Source-Destination"` route label.
    pub route: String,
    /// Operating aircraft name.
    pub airplane: String,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
}

/// Ticket as listed under an order.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TicketListDto {
    /// Ticket identifier.
    pub id: TicketId,
    /// Seat row.
    pub row: i32,
    /// Seat within the row.
    pub seat: i32,
    /// The flight the seat is on.
    pub flight: FlightSummaryDto,
}

impl From<TicketFlightRow> for TicketListDto {
    fn from(row: TicketFlightRow) -> Self {
        Self {
            id: row.id,
            row: row.row,
            seat: row.seat,
            flight: FlightSummaryDto {
                id: row.flight_id,
                route: format!("{}-{}", row.source_name, row.destination_name),
                airplane: row.airplane_name,
                departure_time: row.departure_time,
                arrival_time: row.arrival_time,
            },
        }
    }
}

/// Order as listed for its owner, tickets included.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrderListDto {
    /// Order identifier.
    pub id: OrderId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// All tickets belonging to the order.
    pub tickets: Vec<TicketListDto>,
}

impl From<(Order, Vec<TicketFlightRow>)> for OrderListDto {
    fn from((order, tickets): (Order, Vec<TicketFlightRow>)) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            tickets: tickets.into_iter().map(TicketListDto::from).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, UserId};

    #[test]
    fn listed_ticket_labels_its_flight() {
        let row = TicketFlightRow {
            id: TicketId::new(),
            row: 3,
            seat: 7,
            order_id: OrderId::new(),
            flight_id: FlightId::new(),
            source_name: "Heathrow".to_string(),
            destination_name: "LaGuardia".to_string(),
            airplane_name: "Boeing 777".to_string(),
            departure_time: Utc::now(),
            arrival_time: Utc::now(),
        };
        let dto = TicketListDto::from(row);
        assert_eq!(dto.flight.route, "Heathrow-LaGuardia");
        assert_eq!((dto.row, dto.seat), (3, 7));
    }

    #[test]
    fn order_listing_groups_tickets() {
        let order = Order {
            id: OrderId::new(),
            user_id: UserId::new(),
            created_at: Utc::now(),
        };
        let dto = OrderListDto::from((order, Vec::new()));
        assert!(dto.tickets.is_empty());
    }

    #[test]
    fn create_request_deserializes() {
        let Ok(request) = serde_json::from_str::<CreateOrderRequest>(
            r#"{"tickets":[{"row":1,"seat":2,"flight":"00000000-0000-0000-0000-000000000001"}]}"#,
        ) else {
            panic!("order request must deserialize");
        };
        assert_eq!(request.tickets.len(), 1);
    }
}
