//! Wire DTOs, grouped by resource.
//!
//! Each resource carries up to three projections: a flat write shape
//! (foreign keys by id), a list shape (foreign keys resolved to
//! labels), and a detail shape (referenced records nested in full).

pub mod catalog_dto;
pub mod flight_dto;
pub mod order_dto;
pub mod route_dto;

pub use catalog_dto::{
    AirplaneDetailDto, AirplaneDto, AirplaneListDto, AirplaneTypeWrite, AirplaneWrite, AirportWrite,
    CrewDto, CrewWrite,
};
pub use flight_dto::{FlightDetailDto, FlightDto, FlightFilter, FlightListDto, FlightWrite};
pub use order_dto::{CreateOrderRequest, FlightSummaryDto, OrderDto, OrderListDto, TicketListDto};
pub use route_dto::{RouteDetailDto, RouteDto, RouteListDto, RouteWrite};
