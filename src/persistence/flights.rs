//! Flight queries: filtered listings with seat availability, nested
//! detail reads, and schedule writes.
//!
//! `tickets_available` is computed at query time from committed ticket
//! rows only; an order transaction still in flight is invisible here
//! until it commits.

use crate::domain::{Crew, Flight, FlightId, FlightQuery, NewFlight};
use crate::error::{GatewayError, WriteKind};

use super::postgres::{PostgresStore, read_err};
use super::rows::{FlightDetailRow, FlightListRow};

fn insert_err(err: sqlx::Error) -> GatewayError {
    GatewayError::from_db(err, WriteKind::Insert)
}

impl PostgresStore {
    /// Lists flights ordered by departure (newest first), optionally
    /// filtered by route source, route destination, and departure date.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_flights(
        &self,
        query: &FlightQuery,
    ) -> Result<Vec<FlightListRow>, GatewayError> {
        sqlx::query_as::<_, FlightListRow>(
            "SELECT f.id, \
                    src.name AS source_name, dst.name AS destination_name, \
                    a.name AS airplane_name, \
                    f.departure_time, f.arrival_time, \
                    COALESCE((SELECT array_agg(c.first_name || ' ' || c.last_name \
                                               ORDER BY c.last_name, c.first_name) \
                              FROM flight_crew fc \
                              JOIN crew_members c ON c.id = fc.crew_id \
                              WHERE fc.flight_id = f.id), '{}'::text[]) AS crew, \
                    (a.rows * a.seats_in_row) \
                        - (SELECT COUNT(*) FROM tickets t WHERE t.flight_id = f.id) \
                        AS tickets_available \
             FROM flights f \
             JOIN routes r ON r.id = f.route_id \
             JOIN airports src ON src.id = r.source_id \
             JOIN airports dst ON dst.id = r.destination_id \
             JOIN airplanes a ON a.id = f.airplane_id \
             WHERE ($1::uuid IS NULL OR r.source_id = $1) \
               AND ($2::uuid IS NULL OR r.destination_id = $2) \
               AND ($3::date IS NULL OR (f.departure_time AT TIME ZONE 'UTC')::date = $3) \
             ORDER BY f.departure_time DESC",
        )
        .bind(query.source)
        .bind(query.destination)
        .bind(query.departure)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Fetches one flight with route, airports, airplane, and type
    /// flattened, plus its crew records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no flight has this id.
    pub async fn get_flight(
        &self,
        id: FlightId,
    ) -> Result<(FlightDetailRow, Vec<Crew>), GatewayError> {
        let row = sqlx::query_as::<_, FlightDetailRow>(
            "SELECT f.id, f.departure_time, f.arrival_time, \
                    (a.rows * a.seats_in_row) \
                        - (SELECT COUNT(*) FROM tickets t WHERE t.flight_id = f.id) \
                        AS tickets_available, \
                    r.id AS route_id, r.distance, \
                    src.id AS source_id, src.name AS source_name, \
                    src.closest_big_city AS source_city, \
                    dst.id AS destination_id, dst.name AS destination_name, \
                    dst.closest_big_city AS destination_city, \
                    a.id AS airplane_id, a.name AS airplane_name, \
                    a.rows, a.seats_in_row, \
                    t2.id AS airplane_type_id, t2.name AS airplane_type_name \
             FROM flights f \
             JOIN routes r ON r.id = f.route_id \
             JOIN airports src ON src.id = r.source_id \
             JOIN airports dst ON dst.id = r.destination_id \
             JOIN airplanes a ON a.id = f.airplane_id \
             JOIN airplane_types t2 ON t2.id = a.airplane_type_id \
             WHERE f.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?
        .ok_or(GatewayError::NotFound { entity: "flight" })?;

        let crew = self.flight_crew(id).await?;
        Ok((row, crew))
    }

    /// Crew records assigned to a flight, ordered by family name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn flight_crew(&self, id: FlightId) -> Result<Vec<Crew>, GatewayError> {
        sqlx::query_as::<_, Crew>(
            "SELECT c.id, c.first_name, c.last_name \
             FROM flight_crew fc \
             JOIN crew_members c ON c.id = fc.crew_id \
             WHERE fc.flight_id = $1 \
             ORDER BY c.last_name, c.first_name",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)
    }

    /// Inserts a flight and its crew assignments in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownReference`] when the route,
    /// airplane, or a crew member does not exist; the whole write rolls
    /// back in that case.
    pub async fn create_flight(&self, new: &NewFlight) -> Result<Flight, GatewayError> {
        let mut tx = self.pool.begin().await.map_err(read_err)?;

        let flight = sqlx::query_as::<_, Flight>(
            "INSERT INTO flights (route_id, airplane_id, departure_time, arrival_time) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, route_id, airplane_id, departure_time, arrival_time",
        )
        .bind(new.route_id)
        .bind(new.airplane_id)
        .bind(new.departure_time)
        .bind(new.arrival_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(insert_err)?;

        insert_crew(&mut tx, flight.id, new).await?;

        tx.commit().await.map_err(read_err)?;
        Ok(flight)
    }

    /// Replaces a flight's fields and its entire crew set in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// As for [`PostgresStore::create_flight`], plus
    /// [`GatewayError::NotFound`] if no flight has this id.
    pub async fn update_flight(
        &self,
        id: FlightId,
        new: &NewFlight,
    ) -> Result<Flight, GatewayError> {
        let mut tx = self.pool.begin().await.map_err(read_err)?;

        let flight = sqlx::query_as::<_, Flight>(
            "UPDATE flights SET route_id = $2, airplane_id = $3, \
                    departure_time = $4, arrival_time = $5 \
             WHERE id = $1 \
             RETURNING id, route_id, airplane_id, departure_time, arrival_time",
        )
        .bind(id)
        .bind(new.route_id)
        .bind(new.airplane_id)
        .bind(new.departure_time)
        .bind(new.arrival_time)
        .fetch_optional(&mut *tx)
        .await
        .map_err(insert_err)?
        .ok_or(GatewayError::NotFound { entity: "flight" })?;

        sqlx::query("DELETE FROM flight_crew WHERE flight_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(read_err)?;
        insert_crew(&mut tx, flight.id, new).await?;

        tx.commit().await.map_err(read_err)?;
        Ok(flight)
    }

    /// Deletes a flight unless a ticket still references it. Crew
    /// assignments are join rows owned by the flight and go with it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReferentialIntegrity`] while referenced
    /// and [`GatewayError::NotFound`] if no flight has this id.
    pub async fn delete_flight(&self, id: FlightId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::from_db(e, WriteKind::Delete))?;
        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound { entity: "flight" });
        }
        Ok(())
    }
}

/// Inserts the crew set for a flight within an open transaction.
/// Duplicate ids in the payload collapse onto the join table's primary
/// key.
async fn insert_crew(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    flight_id: FlightId,
    new: &NewFlight,
) -> Result<(), GatewayError> {
    for crew_id in &new.crew {
        sqlx::query(
            "INSERT INTO flight_crew (flight_id, crew_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(flight_id)
        .bind(*crew_id)
        .execute(&mut **tx)
        .await
        .map_err(insert_err)?;
    }
    Ok(())
}
