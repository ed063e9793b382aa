//! PostgreSQL store handle shared by all entity repositories.
//!
//! [`PostgresStore`] wraps a `sqlx::PgPool`; the per-entity query
//! implementations live in sibling modules (`catalog`, `flights`,
//! `orders`) as further `impl` blocks on this type. All queries are
//! runtime-checked `query_as` calls, so no live database is needed at
//! compile time.

use sqlx::PgPool;

use crate::error::GatewayError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pub(super) pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Wraps a read-side database failure.
pub(super) fn read_err(err: sqlx::Error) -> GatewayError {
    GatewayError::Persistence(err.to_string())
}
