//! # skyport-gateway
//!
//! REST backend for an airline booking system: reference data
//! (airports, routes, airplane types, airplanes, crew), the flight
//! schedule, and transactional seat booking.
//!
//! Reads are anonymous; reference-data and schedule writes require an
//! admin bearer token, orders a customer one. Booking consistency is
//! anchored in the database schema: application validators give clean
//! errors on the common path, and under concurrency the unique and
//! foreign-key constraints are the final authority.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Auth middleware (auth)
//!     │
//!     ├── BookingService (service/)
//!     ├── Validators (domain/)
//!     │
//!     ├── PostgresStore (persistence/)
//!     └── PostgreSQL (migrations/)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
