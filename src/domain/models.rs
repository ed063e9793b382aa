//! Booking domain entities.
//!
//! These structs mirror the relational schema one-to-one; relationships
//! are by typed id, never by embedding. Derived attributes (`capacity`,
//! `full_name`) are recomputed on read and never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ids::{
    AirplaneId, AirplaneTypeId, AirportId, CrewId, FlightId, OrderId, RouteId, TicketId, UserId,
};

/// An airport, referenced by routes as source or destination.
#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
pub struct Airport {
    /// Airport identifier.
    pub id: AirportId,
    /// Airport name, unique across the system.
    pub name: String,
    /// Closest big city, for human-facing listings.
    pub closest_big_city: String,
}

/// A directed connection between two distinct airports.
#[derive(Debug, Clone, FromRow)]
pub struct Route {
    /// Route identifier.
    pub id: RouteId,
    /// Departure airport.
    pub source_id: AirportId,
    /// Arrival airport; never equal to `source_id`.
    pub destination_id: AirportId,
    /// Distance in kilometres, positive.
    pub distance: i32,
}

/// A class of aircraft (e.g. "Widebody").
#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
pub struct AirplaneType {
    /// Airplane type identifier.
    pub id: AirplaneTypeId,
    /// Type name, unique across the system.
    pub name: String,
}

/// A physical aircraft with a fixed seat grid.
#[derive(Debug, Clone, FromRow)]
pub struct Airplane {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name, unique across the system.
    pub name: String,
    /// Number of seat rows, 1..=99.
    pub rows: i32,
    /// Seats per row, 1..=99.
    pub seats_in_row: i32,
    /// Type this aircraft belongs to.
    pub airplane_type_id: AirplaneTypeId,
}

impl Airplane {
    /// Total seat count, recomputed from the grid dimensions.
    #[must_use]
    pub const fn capacity(&self) -> i32 {
        self.rows * self.seats_in_row
    }
}

/// A crew member assignable to flights.
#[derive(Debug, Clone, FromRow)]
pub struct Crew {
    /// Crew member identifier.
    pub id: CrewId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Crew {
    /// `"first last"` display form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A scheduled flight on a route, operated by one airplane.
///
/// Crew assignments live in a join table and are loaded separately.
#[derive(Debug, Clone, FromRow)]
pub struct Flight {
    /// Flight identifier.
    pub id: FlightId,
    /// Route flown.
    pub route_id: RouteId,
    /// Operating aircraft; its seat grid bounds every ticket.
    pub airplane_id: AirplaneId,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
}

/// A booking created by a user; owns its tickets.
#[derive(Debug, Clone, FromRow)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Owning user (JWT subject).
    pub user_id: UserId,
    /// Set by the database at insert time, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// A single seat claim on a flight, owned by exactly one order.
#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    /// Ticket identifier.
    pub id: TicketId,
    /// Seat row, 1..=airplane.rows.
    pub row: i32,
    /// Seat within the row, 1..=airplane.seats_in_row.
    pub seat: i32,
    /// Flight the seat is claimed on.
    pub flight_id: FlightId,
    /// Owning order.
    pub order_id: OrderId,
}

/// One requested seat inside an order submission.
///
/// The airplane whose grid bounds `row`/`seat` is resolved from
/// `flight` server-side; callers cannot supply their own.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketRequest {
    /// Requested seat row.
    pub row: i32,
    /// Requested seat within the row.
    pub seat: i32,
    /// Flight to book the seat on.
    pub flight: FlightId,
}

/// New-entity payloads, decoupled from the wire DTOs so that every
/// insertion path funnels through the same store methods and validators.
#[derive(Debug, Clone)]
pub struct NewAirport {
    /// Airport name.
    pub name: String,
    /// Closest big city.
    pub closest_big_city: String,
}

/// Fields for creating or replacing a route.
#[derive(Debug, Clone)]
pub struct NewRoute {
    /// Departure airport.
    pub source_id: AirportId,
    /// Arrival airport.
    pub destination_id: AirportId,
    /// Distance in kilometres.
    pub distance: i32,
}

/// Fields for creating or replacing an airplane.
#[derive(Debug, Clone)]
pub struct NewAirplane {
    /// Aircraft name.
    pub name: String,
    /// Number of seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Type reference.
    pub airplane_type_id: AirplaneTypeId,
}

/// Fields for creating or replacing a crew member.
#[derive(Debug, Clone)]
pub struct NewCrew {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Fields for creating or replacing a flight, including the full crew
/// set (the join table is replaced wholesale on update).
#[derive(Debug, Clone)]
pub struct NewFlight {
    /// Route flown.
    pub route_id: RouteId,
    /// Operating aircraft.
    pub airplane_id: AirplaneId,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// Assigned crew members.
    pub crew: Vec<CrewId>,
}

/// Optional filters for flight listings.
#[derive(Debug, Clone, Default)]
pub struct FlightQuery {
    /// Only flights departing from this airport.
    pub source: Option<AirportId>,
    /// Only flights arriving at this airport.
    pub destination: Option<AirportId>,
    /// Only flights departing on this calendar date.
    pub departure: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_rows_times_seats() {
        let airplane = Airplane {
            id: AirplaneId::new(),
            name: "Boeing 777".to_string(),
            rows: 18,
            seats_in_row: 10,
            airplane_type_id: AirplaneTypeId::new(),
        };
        assert_eq!(airplane.capacity(), 180);
    }

    #[test]
    fn capacity_of_minimal_grid() {
        let airplane = Airplane {
            id: AirplaneId::new(),
            name: "Cessna".to_string(),
            rows: 1,
            seats_in_row: 1,
            airplane_type_id: AirplaneTypeId::new(),
        };
        assert_eq!(airplane.capacity(), 1);
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let crew = Crew {
            id: CrewId::new(),
            first_name: "David".to_string(),
            last_name: "Linch".to_string(),
        };
        assert_eq!(crew.full_name(), "David Linch");
    }
}
