//! Order and ticket queries.
//!
//! Order creation is the one multi-row write in the system and runs
//! entirely inside a single transaction: the order row and every ticket
//! commit together or not at all. Seat validation happens here, against
//! the airplane of each ticket's flight as stored, so no insertion path
//! can bypass it with caller-supplied dimensions.

use std::collections::HashMap;

use crate::domain::{Order, OrderId, TicketRequest, UserId, validate_seat};
use crate::error::{GatewayError, WriteKind};

use super::postgres::{PostgresStore, read_err};
use super::rows::TicketFlightRow;

#[derive(Debug, sqlx::FromRow)]
struct SeatGrid {
    rows: i32,
    seats_in_row: i32,
}

impl PostgresStore {
    /// Creates an order with all requested tickets atomically.
    ///
    /// Any failure — unknown flight, out-of-range seat, or losing a
    /// race on the `(flight, row, seat)` unique index — drops the
    /// transaction before commit, rolling back the order row as well.
    /// Callers have already rejected empty request lists.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownReference`] for a missing flight,
    /// [`GatewayError::SeatOutOfRange`] for a seat outside the grid,
    /// and [`GatewayError::SeatTaken`] when the seat is already booked.
    pub async fn create_order(
        &self,
        user: UserId,
        requests: &[TicketRequest],
    ) -> Result<Order, GatewayError> {
        let mut tx = self.pool.begin().await.map_err(read_err)?;

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (user_id) VALUES ($1) RETURNING id, user_id, created_at",
        )
        .bind(user)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| GatewayError::from_db(e, WriteKind::Insert))?;

        for request in requests {
            // The grid comes from the flight's own airplane, never from
            // the caller.
            let grid = sqlx::query_as::<_, SeatGrid>(
                "SELECT a.rows, a.seats_in_row \
                 FROM flights f \
                 JOIN airplanes a ON a.id = f.airplane_id \
                 WHERE f.id = $1",
            )
            .bind(request.flight)
            .fetch_optional(&mut *tx)
            .await
            .map_err(read_err)?
            .ok_or(GatewayError::UnknownReference { entity: "flight" })?;

            validate_seat(request.row, request.seat, grid.rows, grid.seats_in_row)?;

            sqlx::query(
                "INSERT INTO tickets (\"row\", seat, flight_id, order_id) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(request.row)
            .bind(request.seat)
            .bind(request.flight)
            .bind(order.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ticket_insert_err(e, request))?;
        }

        tx.commit().await.map_err(read_err)?;
        Ok(order)
    }

    /// Lists a user's orders, newest first, with each ticket's flight
    /// summarized.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_orders(
        &self,
        user: UserId,
    ) -> Result<Vec<(Order, Vec<TicketFlightRow>)>, GatewayError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, created_at FROM orders \
             WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<uuid::Uuid> = orders.iter().map(|o| (*o.id.as_uuid())).collect();
        let tickets = sqlx::query_as::<_, TicketFlightRow>(
            "SELECT t.id, t.\"row\", t.seat, t.order_id, t.flight_id, \
                    src.name AS source_name, dst.name AS destination_name, \
                    a.name AS airplane_name, \
                    f.departure_time, f.arrival_time \
             FROM tickets t \
             JOIN flights f ON f.id = t.flight_id \
             JOIN routes r ON r.id = f.route_id \
             JOIN airports src ON src.id = r.source_id \
             JOIN airports dst ON dst.id = r.destination_id \
             JOIN airplanes a ON a.id = f.airplane_id \
             WHERE t.order_id = ANY($1) \
             ORDER BY t.flight_id, t.\"row\", t.seat",
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        let mut by_order: HashMap<OrderId, Vec<TicketFlightRow>> = HashMap::new();
        for ticket in tickets {
            by_order.entry(ticket.order_id).or_default().push(ticket);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let tickets = by_order.remove(&order.id).unwrap_or_default();
                (order, tickets)
            })
            .collect())
    }
}

/// Classifies a failed ticket insert. Losing the race on the
/// `(flight, row, seat)` unique index is reported with the requested
/// coordinates; everything else goes through the generic classifier.
fn ticket_insert_err(err: sqlx::Error, request: &TicketRequest) -> GatewayError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some("23505")
            && db.constraint() == Some("tickets_flight_row_seat_key")
        {
            return GatewayError::SeatTaken {
                row: request.row,
                seat: request.seat,
            };
        }
    }
    GatewayError::from_db(err, WriteKind::Insert)
}
