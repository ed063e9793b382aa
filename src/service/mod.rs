//! Service layer: business logic orchestration.
//!
//! [`BookingService`] coordinates the transactional order path and is
//! the only way orders are created.

pub mod booking;

pub use booking::BookingService;
