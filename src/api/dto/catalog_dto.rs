//! DTOs for reference data: airports, airplane types, airplanes, crew.
//!
//! Writes carry flat foreign-key ids; list reads resolve them to
//! human-readable names; detail reads nest the full referenced record.
//! All three go through the same store methods and validators.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Airplane, AirplaneId, AirplaneType, AirplaneTypeId, Crew, CrewId, NewAirplane, NewAirport,
    NewCrew,
};
use crate::persistence::rows::{AirplaneDetailRow, AirplaneListRow};

/// Request body for creating or replacing an airport.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AirportWrite {
    /// Airport name, unique.
    pub name: String,
    /// Closest big city.
    pub closest_big_city: String,
}

impl From<AirportWrite> for NewAirport {
    fn from(write: AirportWrite) -> Self {
        Self {
            name: write.name,
            closest_big_city: write.closest_big_city,
        }
    }
}

/// Request body for creating or renaming an airplane type.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AirplaneTypeWrite {
    /// Type name, unique.
    pub name: String,
}

/// Request body for creating or replacing a crew member.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CrewWrite {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<CrewWrite> for NewCrew {
    fn from(write: CrewWrite) -> Self {
        Self {
            first_name: write.first_name,
            last_name: write.last_name,
        }
    }
}

/// Crew member with the derived display name.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CrewDto {
    /// Crew member identifier.
    pub id: CrewId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// `"first last"`, recomputed on read.
    pub full_name: String,
}

impl From<Crew> for CrewDto {
    fn from(crew: Crew) -> Self {
        let full_name = crew.full_name();
        Self {
            id: crew.id,
            first_name: crew.first_name,
            last_name: crew.last_name,
            full_name,
        }
    }
}

/// Request body for creating or replacing an airplane.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AirplaneWrite {
    /// Aircraft name, unique.
    pub name: String,
    /// Seat rows, 1..=99.
    pub rows: i32,
    /// Seats per row, 1..=99.
    pub seats_in_row: i32,
    /// Type reference.
    pub airplane_type: AirplaneTypeId,
}

impl From<AirplaneWrite> for NewAirplane {
    fn from(write: AirplaneWrite) -> Self {
        Self {
            name: write.name,
            rows: write.rows,
            seats_in_row: write.seats_in_row,
            airplane_type_id: write.airplane_type,
        }
    }
}

/// Airplane in the flat (write-echo) projection.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AirplaneDto {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name.
    pub name: String,
    /// Seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Derived `rows * seats_in_row`, never stored.
    pub capacity: i32,
    /// Type reference.
    pub airplane_type: AirplaneTypeId,
}

impl From<Airplane> for AirplaneDto {
    fn from(airplane: Airplane) -> Self {
        let capacity = airplane.capacity();
        Self {
            id: airplane.id,
            name: airplane.name,
            rows: airplane.rows,
            seats_in_row: airplane.seats_in_row,
            capacity,
            airplane_type: airplane.airplane_type_id,
        }
    }
}

/// Airplane in the list projection: type resolved to its name.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AirplaneListDto {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name.
    pub name: String,
    /// Seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Derived `rows * seats_in_row`.
    pub capacity: i32,
    /// Type name.
    pub airplane_type: String,
}

impl From<AirplaneListRow> for AirplaneListDto {
    fn from(row: AirplaneListRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rows: row.rows,
            seats_in_row: row.seats_in_row,
            capacity: row.rows * row.seats_in_row,
            airplane_type: row.airplane_type_name,
        }
    }
}

/// Airplane in the detail projection: type nested in full.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AirplaneDetailDto {
    /// Airplane identifier.
    pub id: AirplaneId,
    /// Aircraft name.
    pub name: String,
    /// Seat rows.
    pub rows: i32,
    /// Seats per row.
    pub seats_in_row: i32,
    /// Derived `rows * seats_in_row`.
    pub capacity: i32,
    /// Full type record.
    pub airplane_type: AirplaneType,
}

impl From<AirplaneDetailRow> for AirplaneDetailDto {
    fn from(row: AirplaneDetailRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rows: row.rows,
            seats_in_row: row.seats_in_row,
            capacity: row.rows * row.seats_in_row,
            airplane_type: AirplaneType {
                id: row.airplane_type_id,
                name: row.airplane_type_name,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn airplane_projections_recompute_capacity() {
        let row = AirplaneListRow {
            id: AirplaneId::new(),
            name: "Boeing 777".to_string(),
            rows: 18,
            seats_in_row: 10,
            airplane_type_name: "Widebody".to_string(),
        };
        let dto = AirplaneListDto::from(row);
        assert_eq!(dto.capacity, 180);
        assert_eq!(dto.airplane_type, "Widebody");
    }

    #[test]
    fn crew_dto_carries_full_name() {
        let crew = Crew {
            id: CrewId::new(),
            first_name: "David".to_string(),
            last_name: "Linch".to_string(),
        };
        let dto = CrewDto::from(crew);
        assert_eq!(dto.full_name, "David Linch");
    }

    #[test]
    fn airplane_write_maps_onto_new_airplane() {
        let write = AirplaneWrite {
            name: "A350".to_string(),
            rows: 40,
            seats_in_row: 9,
            airplane_type: AirplaneTypeId::new(),
        };
        let type_id = write.airplane_type;
        let new = NewAirplane::from(write);
        assert_eq!(new.airplane_type_id, type_id);
        assert_eq!(new.rows, 40);
    }
}
