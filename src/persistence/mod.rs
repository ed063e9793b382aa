//! Persistence layer: PostgreSQL store for the booking schema.
//!
//! One [`PostgresStore`] handle serves all entities; the query
//! implementations are grouped by concern (`catalog` for reference
//! data, `flights` for the schedule, `orders` for the transactional
//! booking path). The schema itself — unique indexes, FK RESTRICT
//! actions, CHECK backstops — lives in `migrations/` and is embedded
//! via `sqlx::migrate!`.

pub mod catalog;
pub mod flights;
pub mod orders;
pub mod postgres;
pub mod rows;

pub use postgres::PostgresStore;
