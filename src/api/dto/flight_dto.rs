//! Flight DTOs and listing filters.
//!
//! The list projection compresses the route to a `"Source-Destination"`
//! label and the crew to display names, and carries the live
//! `tickets_available` aggregate. The detail projection nests the full
//! route, airplane, and crew records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AirplaneId, AirplaneType, Airport, AirportId, Crew, CrewId, Flight, FlightId, FlightQuery,
    NewFlight, RouteId,
};
use crate::persistence::rows::{FlightDetailRow, FlightListRow};

use super::catalog_dto::{AirplaneDetailDto, CrewDto};
use super::route_dto::RouteDetailDto;

/// Request body for creating or replacing a flight.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct FlightWrite {
    /// Route flown.
    pub route: RouteId,
    /// Operating aircraft.
    pub airplane: AirplaneId,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// Assigned crew; replaces the previous set wholesale on update.
    #[serde(default)]
    pub crew: Vec<CrewId>,
}

impl From<FlightWrite> for NewFlight {
    fn from(write: FlightWrite) -> Self {
        Self {
            route_id: write.route,
            airplane_id: write.airplane,
            departure_time: write.departure_time,
            arrival_time: write.arrival_time,
            crew: write.crew,
        }
    }
}

/// Flight in the flat (write-echo) projection.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FlightDto {
    /// Flight identifier.
    pub id: FlightId,
    /// Route flown.
    pub route: RouteId,
    /// Operating aircraft.
    pub airplane: AirplaneId,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// Assigned crew ids.
    pub crew: Vec<CrewId>,
}

impl FlightDto {
    /// Assembles the write echo from the stored flight and its crew set.
    #[must_use]
    pub fn from_parts(flight: Flight, crew: Vec<CrewId>) -> Self {
        Self {
            id: flight.id,
            route: flight.route_id,
            airplane: flight.airplane_id,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            crew,
        }
    }
}

/// Flight in the list projection.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FlightListDto {
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
    /// Crew display names.
    pub crew: Vec<String>,
    /// Seats not yet claimed by a committed ticket.
    pub tickets_available: i64,
}

impl From<FlightListRow> for FlightListDto {
    fn from(row: FlightListRow) -> Self {
        Self {
            id: row.id,
            route: format!("{}-{}", row.source_name, row.destination_name),
            airplane: row.airplane_name,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            crew: row.crew,
            tickets_available: row.tickets_available,
        }
    }
}

/// Flight in the detail projection: route, airplane, and crew nested.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FlightDetailDto {
    /// Flight identifier.
    pub id: FlightId,
    /// Full route record with both airports.
    pub route: RouteDetailDto,
    /// Full airplane record with its type.
    pub airplane: AirplaneDetailDto,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
    /// Full crew records.
    pub crew: Vec<CrewDto>,
    /// Seats not yet claimed by a committed ticket.
    pub tickets_available: i64,
}

impl FlightDetailDto {
    /// Assembles the detail projection from the flattened row and the
    /// separately loaded crew.
    #[must_use]
    pub fn from_parts(row: FlightDetailRow, crew: Vec<Crew>) -> Self {
        Self {
            id: row.id,
            route: RouteDetailDto {
                id: row.route_id,
                source: Airport {
                    id: row.source_id,
                    name: row.source_name,
                    closest_big_city: row.source_city,
                },
                destination: Airport {
                    id: row.destination_id,
                    name: row.destination_name,
                    closest_big_city: row.destination_city,
                },
                distance: row.distance,
            },
            airplane: AirplaneDetailDto {
                id: row.airplane_id,
                name: row.airplane_name,
                rows: row.rows,
                seats_in_row: row.seats_in_row,
                capacity: row.rows * row.seats_in_row,
                airplane_type: AirplaneType {
                    id: row.airplane_type_id,
                    name: row.airplane_type_name,
                },
            },
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            crew: crew.into_iter().map(CrewDto::from).collect(),
            tickets_available: row.tickets_available,
        }
    }
}

/// Query-string filters for flight listings. All optional; omitted
/// filters match everything.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct FlightFilter {
    /// Only flights departing from this airport.
    pub source: Option<AirportId>,
    /// Only flights arriving at this airport.
    pub destination: Option<AirportId>,
    /// Only flights departing on this UTC calendar date (`YYYY-MM-DD`).
    pub departure: Option<NaiveDate>,
}

impl From<FlightFilter> for FlightQuery {
    fn from(filter: FlightFilter) -> Self {
        Self {
            source: filter.source,
            destination: filter.destination,
            departure: filter.departure,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn list_projection_builds_route_label() {
        let row = FlightListRow {
            id: FlightId::new(),
            source_name: "Heathrow".to_string(),
            destination_name: "LaGuardia".to_string(),
            airplane_name: "Boeing 777".to_string(),
            departure_time: Utc::now(),
            arrival_time: Utc::now(),
            crew: vec!["David Linch".to_string()],
            tickets_available: 178,
        };
        let dto = FlightListDto::from(row);
        assert_eq!(dto.route, "Heathrow-LaGuardia");
        assert_eq!(dto.tickets_available, 178);
    }

    #[test]
    fn empty_filter_deserializes_from_empty_query() {
        let Ok(filter) = serde_urlencoded::from_str::<FlightFilter>("") else {
            panic!("empty query must deserialize");
        };
        assert!(filter.source.is_none());
        assert!(filter.departure.is_none());
    }

    #[test]
    fn filter_parses_departure_date() {
        let Ok(filter) = serde_urlencoded::from_str::<FlightFilter>("departure=2024-07-01") else {
            panic!("date filter must deserialize");
        };
        let Some(date) = filter.departure else {
            panic!("departure must be set");
        };
        assert_eq!(date.to_string(), "2024-07-01");
    }
}
