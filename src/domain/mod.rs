//! Booking domain: typed identifiers, entities, and validators.
//!
//! The domain layer is persistence-agnostic. Relational constraints
//! (unique indexes, FK RESTRICT) live in the migration; this module
//! holds their application-level mirrors so callers get fast,
//! field-attributed rejections.

pub mod ids;
pub mod models;
pub mod validate;

pub use ids::{
    AirplaneId, AirplaneTypeId, AirportId, CrewId, FlightId, OrderId, RouteId, TicketId, UserId,
};
pub use models::{
    Airplane, AirplaneType, Airport, Crew, Flight, FlightQuery, NewAirplane, NewAirport, NewCrew,
    NewFlight, NewRoute, Order, Route, Ticket, TicketRequest,
};
pub use validate::{
    validate_airplane_grid, validate_airport_name, validate_distance, validate_order_tickets,
    validate_route, validate_seat,
};
