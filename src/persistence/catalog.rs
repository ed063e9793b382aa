//! Reference-data queries: airports, routes, airplane types, airplanes,
//! and crew.
//!
//! Every create/update funnels through the domain validators before the
//! insert is attempted; the unique indexes and CHECK constraints in the
//! migration remain the final authority, and their violations come back
//! through [`GatewayError::from_db`] as structured conflicts.

use crate::domain::{
    Airplane, AirplaneId, AirplaneType, AirplaneTypeId, Airport, AirportId, Crew, CrewId,
    NewAirplane, NewAirport, NewCrew, NewRoute, Route, RouteId, validate_airplane_grid,
    validate_airport_name, validate_distance, validate_route,
};
use crate::error::{GatewayError, WriteKind};

use super::postgres::{PostgresStore, read_err};
use super::rows::{AirplaneDetailRow, AirplaneListRow, RouteDetailRow, RouteListRow};

fn insert_err(err: sqlx::Error) -> GatewayError {
    GatewayError::from_db(err, WriteKind::Insert)
}

fn delete_err(err: sqlx::Error) -> GatewayError {
    GatewayError::from_db(err, WriteKind::Delete)
}

// ── Airports ────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Lists all airports ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_airports(&self) -> Result<Vec<Airport>, GatewayError> {
        sqlx::query_as::<_, Airport>(
            "SELECT id, name, closest_big_city FROM airports ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Fetches a single airport.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no airport has this id.
    pub async fn get_airport(&self, id: AirportId) -> Result<Airport, GatewayError> {
        sqlx::query_as::<_, Airport>(
            "SELECT id, name, closest_big_city FROM airports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?
        .ok_or(GatewayError::NotFound { entity: "airport" })
    }

    /// Inserts a new airport.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for a blank name or
    /// [`GatewayError::UniquenessViolation`] for a duplicate one.
    pub async fn create_airport(&self, new: &NewAirport) -> Result<Airport, GatewayError> {
        validate_airport_name(&new.name)?;
        sqlx::query_as::<_, Airport>(
            "INSERT INTO airports (name, closest_big_city) VALUES ($1, $2) \
             RETURNING id, name, closest_big_city",
        )
        .bind(&new.name)
        .bind(&new.closest_big_city)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_err)
    }

    /// Replaces an airport's fields.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no airport has this id, or
    /// a validation/uniqueness error as on create.
    pub async fn update_airport(
        &self,
        id: AirportId,
        new: &NewAirport,
    ) -> Result<Airport, GatewayError> {
        validate_airport_name(&new.name)?;
        sqlx::query_as::<_, Airport>(
            "UPDATE airports SET name = $2, closest_big_city = $3 WHERE id = $1 \
             RETURNING id, name, closest_big_city",
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.closest_big_city)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound { entity: "airport" })
    }

    /// Deletes an airport. Deletion is refused, never cascaded, while
    /// any route still references it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no airport has this id.
    pub async fn delete_airport(&self, id: AirportId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(delete_err)?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound { entity: "airport" });
        }
        Ok(())
    }
}

// ── Routes ──────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Lists all routes with endpoint airport names, ordered by source
    /// then destination.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_routes(&self) -> Result<Vec<RouteListRow>, GatewayError> {
        sqlx::query_as::<_, RouteListRow>(
            "SELECT r.id, src.name AS source_name, dst.name AS destination_name, r.distance \
             FROM routes r \
             JOIN airports src ON src.id = r.source_id \
             JOIN airports dst ON dst.id = r.destination_id \
             ORDER BY src.name, dst.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Fetches a single route with both endpoint airports resolved.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no route has this id.
    pub async fn get_route(&self, id: RouteId) -> Result<RouteDetailRow, GatewayError> {
        sqlx::query_as::<_, RouteDetailRow>(
            "SELECT r.id, r.distance, \
                    src.id AS source_id, src.name AS source_name, \
                    src.closest_big_city AS source_city, \
                    dst.id AS destination_id, dst.name AS destination_name, \
                    dst.closest_big_city AS destination_city \
             FROM routes r \
             JOIN airports src ON src.id = r.source_id \
             JOIN airports dst ON dst.id = r.destination_id \
             WHERE r.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?
        .ok_or(GatewayError::NotFound { entity: "route" })
    }

    /// Inserts a new route.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SameEndpoints`] when source equals
    /// destination, [`GatewayError::UniquenessViolation`] for a
    /// duplicate (source, destination) pair, and
    /// [`GatewayError::UnknownReference`] for a missing airport.
    pub async fn create_route(&self, new: &NewRoute) -> Result<Route, GatewayError> {
        validate_route(new.source_id, new.destination_id)?;
        validate_distance(new.distance)?;
        sqlx::query_as::<_, Route>(
            "INSERT INTO routes (source_id, destination_id, distance) VALUES ($1, $2, $3) \
             RETURNING id, source_id, destination_id, distance",
        )
        .bind(new.source_id)
        .bind(new.destination_id)
        .bind(new.distance)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_err)
    }

    /// Replaces a route's fields.
    ///
    /// # Errors
    ///
    /// As for [`PostgresStore::create_route`], plus
    /// [`GatewayError::NotFound`] if no route has this id.
    pub async fn update_route(&self, id: RouteId, new: &NewRoute) -> Result<Route, GatewayError> {
        validate_route(new.source_id, new.destination_id)?;
        validate_distance(new.distance)?;
        sqlx::query_as::<_, Route>(
            "UPDATE routes SET source_id = $2, destination_id = $3, distance = $4 \
             WHERE id = $1 \
             RETURNING id, source_id, destination_id, distance",
        )
        .bind(id)
        .bind(new.source_id)
        .bind(new.destination_id)
        .bind(new.distance)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound { entity: "route" })
    }

    /// Deletes a route unless a flight still references it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no route has this id.
    pub async fn delete_route(&self, id: RouteId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(delete_err)?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound { entity: "route" });
        }
        Ok(())
    }
}

// ── Airplane types ──────────────────────────────────────────────────────

impl PostgresStore {
    /// Lists all airplane types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_airplane_types(&self) -> Result<Vec<AirplaneType>, GatewayError> {
        sqlx::query_as::<_, AirplaneType>("SELECT id, name FROM airplane_types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)
    }

    /// Fetches a single airplane type.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no type has this id.
    pub async fn get_airplane_type(
        &self,
        id: AirplaneTypeId,
    ) -> Result<AirplaneType, GatewayError> {
        sqlx::query_as::<_, AirplaneType>("SELECT id, name FROM airplane_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_err)?
            .ok_or(GatewayError::NotFound {
                entity: "airplane type",
            })
    }

    /// Inserts a new airplane type.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UniquenessViolation`] for a duplicate name.
    pub async fn create_airplane_type(&self, name: &str) -> Result<AirplaneType, GatewayError> {
        sqlx::query_as::<_, AirplaneType>(
            "INSERT INTO airplane_types (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_err)
    }

    /// Renames an airplane type.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no type has this id, or
    /// [`GatewayError::UniquenessViolation`] for a duplicate name.
    pub async fn update_airplane_type(
        &self,
        id: AirplaneTypeId,
        name: &str,
    ) -> Result<AirplaneType, GatewayError> {
        sqlx::query_as::<_, AirplaneType>(
            "UPDATE airplane_types SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound {
            entity: "airplane type",
        })
    }

    /// Deletes an airplane type unless an airplane still references it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no type has this id.
    pub async fn delete_airplane_type(&self, id: AirplaneTypeId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM airplane_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(delete_err)?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound {
                entity: "airplane type",
            });
        }
        Ok(())
    }
}

// ── Airplanes ───────────────────────────────────────────────────────────

impl PostgresStore {
    /// Lists all airplanes with their type names, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_airplanes(&self) -> Result<Vec<AirplaneListRow>, GatewayError> {
        sqlx::query_as::<_, AirplaneListRow>(
            "SELECT a.id, a.name, a.rows, a.seats_in_row, t.name AS airplane_type_name \
             FROM airplanes a \
             JOIN airplane_types t ON t.id = a.airplane_type_id \
             ORDER BY a.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Fetches a single airplane with its type resolved.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no airplane has this id.
    pub async fn get_airplane(&self, id: AirplaneId) -> Result<AirplaneDetailRow, GatewayError> {
        sqlx::query_as::<_, AirplaneDetailRow>(
            "SELECT a.id, a.name, a.rows, a.seats_in_row, \
                    a.airplane_type_id, t.name AS airplane_type_name \
             FROM airplanes a \
             JOIN airplane_types t ON t.id = a.airplane_type_id \
             WHERE a.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?
        .ok_or(GatewayError::NotFound { entity: "airplane" })
    }

    /// Inserts a new airplane.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for a grid outside
    /// 1..=99, [`GatewayError::UniquenessViolation`] for a duplicate
    /// name, and [`GatewayError::UnknownReference`] for a missing type.
    pub async fn create_airplane(&self, new: &NewAirplane) -> Result<Airplane, GatewayError> {
        validate_airplane_grid(new.rows, new.seats_in_row)?;
        sqlx::query_as::<_, Airplane>(
            "INSERT INTO airplanes (name, rows, seats_in_row, airplane_type_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, rows, seats_in_row, airplane_type_id",
        )
        .bind(&new.name)
        .bind(new.rows)
        .bind(new.seats_in_row)
        .bind(new.airplane_type_id)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_err)
    }

    /// Replaces an airplane's fields.
    ///
    /// # Errors
    ///
    /// As for [`PostgresStore::create_airplane`], plus
    /// [`GatewayError::NotFound`] if no airplane has this id.
    pub async fn update_airplane(
        &self,
        id: AirplaneId,
        new: &NewAirplane,
    ) -> Result<Airplane, GatewayError> {
        validate_airplane_grid(new.rows, new.seats_in_row)?;
        sqlx::query_as::<_, Airplane>(
            "UPDATE airplanes SET name = $2, rows = $3, seats_in_row = $4, \
                    airplane_type_id = $5 \
             WHERE id = $1 \
             RETURNING id, name, rows, seats_in_row, airplane_type_id",
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.rows)
        .bind(new.seats_in_row)
        .bind(new.airplane_type_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound { entity: "airplane" })
    }

    /// Deletes an airplane unless a flight still references it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no airplane has this id.
    pub async fn delete_airplane(&self, id: AirplaneId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(delete_err)?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound { entity: "airplane" });
        }
        Ok(())
    }
}

// ── Crew ────────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Lists all crew members ordered by family name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_crew(&self) -> Result<Vec<Crew>, GatewayError> {
        sqlx::query_as::<_, Crew>(
            "SELECT id, first_name, last_name FROM crew_members ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Fetches a single crew member.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no crew member has this id.
    pub async fn get_crew(&self, id: CrewId) -> Result<Crew, GatewayError> {
        sqlx::query_as::<_, Crew>(
            "SELECT id, first_name, last_name FROM crew_members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?
        .ok_or(GatewayError::NotFound {
            entity: "crew member",
        })
    }

    /// Inserts a new crew member.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn create_crew(&self, new: &NewCrew) -> Result<Crew, GatewayError> {
        sqlx::query_as::<_, Crew>(
            "INSERT INTO crew_members (first_name, last_name) VALUES ($1, $2) \
             RETURNING id, first_name, last_name",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_err)
    }

    /// Replaces a crew member's names.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no crew member has this id.
    pub async fn update_crew(&self, id: CrewId, new: &NewCrew) -> Result<Crew, GatewayError> {
        sqlx::query_as::<_, Crew>(
            "UPDATE crew_members SET first_name = $2, last_name = $3 WHERE id = $1 \
             RETURNING id, first_name, last_name",
        )
        .bind(id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound {
            entity: "crew member",
        })
    }

    /// Deletes a crew member unless a flight assignment still
    /// references them.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no crew member has this id.
    pub async fn delete_crew(&self, id: CrewId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM crew_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(delete_err)?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound {
                entity: "crew member",
            });
        }
        Ok(())
    }
}
