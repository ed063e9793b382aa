//! Booking service: orchestrates order creation.
//!
//! Thin coordinator over [`PostgresStore`]. Single-row CRUD goes to the
//! store directly from the handlers; orders come through here because
//! they are the one operation with a request-shape invariant (no empty
//! submissions) and a multi-row transaction worth logging.

use crate::domain::{Order, TicketRequest, UserId, validate_order_tickets};
use crate::error::GatewayError;
use crate::persistence::PostgresStore;
use crate::persistence::rows::TicketFlightRow;

/// Orchestration layer for order operations.
#[derive(Debug, Clone)]
pub struct BookingService {
    store: PostgresStore,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    /// Creates an order with all requested tickets, atomically.
    ///
    /// Empty submissions are rejected before any database round trip;
    /// everything else — seat validation against each flight's
    /// airplane, double-booking conflicts — is decided inside the
    /// store's transaction. Conflicts surface to the caller; nothing
    /// is retried here.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmptyOrder`] for an empty request list,
    /// or any error from [`PostgresStore::create_order`].
    pub async fn create_order(
        &self,
        user: UserId,
        requests: &[TicketRequest],
    ) -> Result<Order, GatewayError> {
        validate_order_tickets(requests)?;

        let order = self.store.create_order(user, requests).await?;
        tracing::info!(
            order_id = %order.id,
            %user,
            tickets = requests.len(),
            "order created"
        );
        Ok(order)
    }

    /// Lists the caller's own orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn list_orders(
        &self,
        user: UserId,
    ) -> Result<Vec<(Order, Vec<TicketFlightRow>)>, GatewayError> {
        self.store.list_orders(user).await
    }
}
