//! Route DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::{Airport, AirportId, NewRoute, Route, RouteId};
use crate::persistence::rows::{RouteDetailRow, RouteListRow};

/// Request body for creating or replacing a route.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RouteWrite {
    /// Departure airport.
    pub source: AirportId,
    /// Arrival airport, must differ from `source`.
    pub destination: AirportId,
    /// Distance in kilometres, positive.
    pub distance: i32,
}

impl From<RouteWrite> for NewRoute {
    fn from(write: RouteWrite) -> Self {
        Self {
            source_id: write.source,
            destination_id: write.destination,
            distance: write.distance,
        }
    }
}

/// Route in the flat (write-echo) projection.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RouteDto {
    /// Route identifier.
    pub id: RouteId,
    /// Departure airport.
    pub source: AirportId,
    /// Arrival airport.
    pub destination: AirportId,
    /// Distance in kilometres.
    pub distance: i32,
}

impl From<Route> for RouteDto {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            source: route.source_id,
            destination: route.destination_id,
            distance: route.distance,
        }
    }
}

/// Route in the list projection: endpoints resolved to airport names.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RouteListDto {
    /// Route identifier.
    pub id: RouteId,
    /// Source airport name.
    pub source: String,
    /// Destination airport name.
    pub destination: String,
    /// Distance in kilometres.
    pub distance: i32,
}

impl From<RouteListRow> for RouteListDto {
    fn from(row: RouteListRow) -> Self {
        Self {
            id: row.id,
            source: row.source_name,
            destination: row.destination_name,
            distance: row.distance,
        }
    }
}

/// Route in the detail projection: both airports nested in full.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RouteDetailDto {
    /// Route identifier.
    pub id: RouteId,
    /// Full source airport record.
    pub source: Airport,
    /// Full destination airport record.
    pub destination: Airport,
    /// Distance in kilometres.
    pub distance: i32,
}

impl From<RouteDetailRow> for RouteDetailDto {
    fn from(row: RouteDetailRow) -> Self {
        Self {
            id: row.id,
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
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn detail_projection_nests_both_airports() {
        let row = RouteDetailRow {
            id: RouteId::new(),
            distance: 5500,
            source_id: AirportId::new(),
            source_name: "Heathrow".to_string(),
            source_city: "London".to_string(),
            destination_id: AirportId::new(),
            destination_name: "LaGuardia".to_string(),
            destination_city: "New York".to_string(),
        };
        let dto = RouteDetailDto::from(row);
        assert_eq!(dto.source.closest_big_city, "London");
        assert_eq!(dto.destination.name, "LaGuardia");
        assert_eq!(dto.distance, 5500);
    }

    #[test]
    fn write_maps_onto_new_route() {
        let write = RouteWrite {
            source: AirportId::new(),
            destination: AirportId::new(),
            distance: 100,
        };
        let (source, destination) = (write.source, write.destination);
        let new = NewRoute::from(write);
        assert_eq!(new.source_id, source);
        assert_eq!(new.destination_id, destination);
    }
}
