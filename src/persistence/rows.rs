//! Joined row projections for list and detail reads.
//!
//! Plain entity rows decode straight into the domain models; the
//! structs here carry the extra columns produced by joins and
//! aggregates (airport names, type names, committed-ticket counts) so
//! the read queries stay single round trips.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{
    AirplaneId, AirplaneTypeId, AirportId, FlightId, OrderId, RouteId, TicketId,
};

/// Route row with its endpoint airport names resolved.
#[derive(Debug, Clone, FromRow)]
pub struct RouteListRow {
    /// Route identifier.
    pub id: RouteId,
    /// Source airport name.
    pub source_name: String,
    /// Destination airport name.
    pub destination_name: String,
    /// Distance in kilometres.
    pub distance: i32,
}

/// Route row with both endpoint airports fully resolved.
#[derive(Debug, Clone, FromRow)]
pub struct RouteDetailRow {
    /// Route identifier.
    pub id: RouteId,
    /// Distance in kilometres.
    pub distance: i32,
    /// Source airport id.
    pub source_id: AirportId,
    /// Source airport name.
    pub source_name: String,
    /// Source airport's closest big city.
    pub source_city: String,
    /// Destination airport id.
    pub destination_id: AirportId,
    /// Destination airport name.
    pub destination_name: String,
    /// Destination airport's closest big city.
    pub destination_city: String,
}

/// Airplane row with its type name resolved.
#[derive(Debug, Clone, FromRow)]
pub struct AirplaneListRow {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name.
    pub name: String,
    /// Seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Name of the airplane's type.
    pub airplane_type_name: String,
}

/// Airplane row with its type record fully resolved.
#[derive(Debug, Clone, FromRow)]
pub struct AirplaneDetailRow {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name.
    pub name: String,
    /// Seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Type id.
    pub airplane_type_id: AirplaneTypeId,
    /// Type name.
    pub airplane_type_name: String,
}

/// Flight row shaped for listings: human-readable labels plus the
/// committed-seat availability aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct FlightListRow {
    /// Flight identifier.
    pub id: FlightId,
    /// Source airport name.
    pub source_name: String,
    /// Destination airport name.
    pub destination_name: String,
    /// Operating aircraft name.
    pub airplane_name: String,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// Crew full names, ordered by family name.
    pub crew: Vec<String>,
    /// `capacity - COUNT(tickets)`, committed rows only.
    pub tickets_available: i64,
}

/// Flight row with route, airports, airplane, and type flattened for
/// the detail projection. Crew records are loaded separately.
#[derive(Debug, Clone, FromRow)]
pub struct FlightDetailRow {
    /// Flight identifier.
    pub id: FlightId,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// `capacity - COUNT(tickets)`, committed rows only.
    pub tickets_available: i64,
    /// Route id.
    pub route_id: RouteId,
    /// Route distance in kilometres.
    pub distance: i32,
    /// Source airport id.
    pub source_id: AirportId,
    /// Source airport name.
    pub source_name: String,
    /// Source airport's closest big city.
    pub source_city: String,
    /// Destination airport id.
    pub destination_id: AirportId,
    /// Destination airport name.
    pub destination_name: String,
    /// Destination airport's closest big city.
    pub destination_city: String,
    /// Airplane id.
    pub airplane_id: AirplaneId,
    /// Airplane name.
    pub airplane_name: String,
    /// Airplane seat rows.
    pub rows: i32,
    /// Airplane seats per row.
    pub seats_in_row: i32,
    /// Airplane type id.
    pub airplane_type_id: AirplaneTypeId,
    /// Airplane type name.
    pub airplane_type_name: String,
}

/// Ticket row with a flight summary for order listings.
#[derive(Debug, Clone, FromRow)]
pub struct TicketFlightRow {
    /// Ticket identifier.
    pub id: TicketId,
    /// Seat row.
    pub row: i32,
    /// Seat within the row.
    pub seat: i32,
    /// Owning order.
    pub order_id: OrderId,
    /// Flight the seat is on.
    pub flight_id: FlightId,
    /// Source airport name.
    pub source_name: String,
    /// Destination airport name.
    pub destination_name: String,
    /// Operating aircraft name.
    pub airplane_name: String,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
}
