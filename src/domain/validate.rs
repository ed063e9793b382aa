//! Application-level validators for the booking-consistency model.
//!
//! Each validator mirrors a declarative schema constraint and exists to
//! fail fast with a friendly, field-attributed error before a write is
//! attempted. The schema constraint remains the final authority: two
//! requests racing past a validator are still resolved by the unique
//! index or CHECK inside the database, never by application locking.
//!
//! Every insertion path goes through these functions via the store
//! methods; there is no bulk or administrative path that bypasses them.

use super::ids::AirportId;
use super::models::TicketRequest;
use crate::error::GatewayError;

/// Rejects routes whose source and destination are the same airport.
///
/// Paired with the `routes_distinct_endpoints` CHECK and the
/// `(source, destination)` unique index.
///
/// # Errors
///
/// Returns [`GatewayError::SameEndpoints`] when the two ids are equal.
pub fn validate_route(source: AirportId, destination: AirportId) -> Result<(), GatewayError> {
    if source == destination {
        return Err(GatewayError::SameEndpoints);
    }
    Ok(())
}

/// Checks a requested seat against the operating airplane's grid.
///
/// Both coordinates must fall in `1..=max` for their dimension. The
/// dimensions must come from the airplane of the ticket's *flight*,
/// resolved server-side.
///
/// # Errors
///
/// Returns a field-attributed [`GatewayError::SeatOutOfRange`] naming
/// the first coordinate that falls outside its range.
pub fn validate_seat(
    row: i32,
    seat: i32,
    rows: i32,
    seats_in_row: i32,
) -> Result<(), GatewayError> {
    for (field, requested, max) in [("row", row, rows), ("seat", seat, seats_in_row)] {
        if requested < 1 || requested > max {
            return Err(GatewayError::SeatOutOfRange {
                field,
                requested,
                max,
            });
        }
    }
    Ok(())
}

/// Rejects order submissions with no tickets.
///
/// # Errors
///
/// Returns [`GatewayError::EmptyOrder`] for an empty request list.
pub fn validate_order_tickets(requests: &[TicketRequest]) -> Result<(), GatewayError> {
    if requests.is_empty() {
        return Err(GatewayError::EmptyOrder);
    }
    Ok(())
}

/// Rejects blank airport names before the `airports_name_not_blank`
/// CHECK does.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when the name is empty or
/// whitespace-only.
pub fn validate_airport_name(name: &str) -> Result<(), GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "airport name must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Rejects non-positive route distances before the
/// `routes_distance_positive` CHECK does.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when `distance < 1`.
pub fn validate_distance(distance: i32) -> Result<(), GatewayError> {
    if distance < 1 {
        return Err(GatewayError::InvalidRequest(
            "distance must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Rejects seat grids outside 1..=99 per dimension before the
/// `airplanes_*_range` CHECKs do.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] naming the offending
/// dimension.
pub fn validate_airplane_grid(rows: i32, seats_in_row: i32) -> Result<(), GatewayError> {
    for (field, value) in [("rows", rows), ("seats_in_row", seats_in_row)] {
        if !(1..=99).contains(&value) {
            return Err(GatewayError::InvalidRequest(format!(
                "{field} must be between 1 and 99"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::FlightId;

    #[test]
    fn route_with_distinct_endpoints_passes() {
        assert!(validate_route(AirportId::new(), AirportId::new()).is_ok());
    }

    #[test]
    fn route_with_same_endpoints_fails() {
        let airport = AirportId::new();
        let result = validate_route(airport, airport);
        assert!(matches!(result, Err(GatewayError::SameEndpoints)));
    }

    #[test]
    fn seat_inside_grid_passes() {
        // Last row, last seat of an 18x10 grid is still valid.
        assert!(validate_seat(18, 10, 18, 10).is_ok());
        assert!(validate_seat(1, 1, 18, 10).is_ok());
    }

    #[test]
    fn seat_beyond_row_width_fails_on_seat() {
        let result = validate_seat(18, 11, 18, 10);
        let Err(GatewayError::SeatOutOfRange {
            field,
            requested,
            max,
        }) = result
        else {
            panic!("expected seat out of range");
        };
        assert_eq!(field, "seat");
        assert_eq!(requested, 11);
        assert_eq!(max, 10);
    }

    #[test]
    fn row_beyond_grid_fails_on_row() {
        let result = validate_seat(19, 10, 18, 10);
        let Err(GatewayError::SeatOutOfRange {
            field,
            requested,
            max,
        }) = result
        else {
            panic!("expected row out of range");
        };
        assert_eq!(field, "row");
        assert_eq!(requested, 19);
        assert_eq!(max, 18);
    }

    #[test]
    fn zero_and_negative_coordinates_fail() {
        assert!(matches!(
            validate_seat(0, 1, 18, 10),
            Err(GatewayError::SeatOutOfRange { field: "row", .. })
        ));
        assert!(matches!(
            validate_seat(1, -3, 18, 10),
            Err(GatewayError::SeatOutOfRange { field: "seat", .. })
        ));
    }

    #[test]
    fn empty_order_is_rejected() {
        let result = validate_order_tickets(&[]);
        assert!(matches!(result, Err(GatewayError::EmptyOrder)));
    }

    #[test]
    fn non_empty_order_passes() {
        let requests = vec![TicketRequest {
            row: 1,
            seat: 1,
            flight: FlightId::new(),
        }];
        assert!(validate_order_tickets(&requests).is_ok());
    }

    #[test]
    fn blank_airport_name_is_rejected() {
        assert!(validate_airport_name("  ").is_err());
        assert!(validate_airport_name("Heathrow").is_ok());
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        assert!(validate_distance(0).is_err());
        assert!(validate_distance(-5).is_err());
        assert!(validate_distance(5552).is_ok());
    }

    #[test]
    fn airplane_grid_must_fit_in_two_digits() {
        assert!(validate_airplane_grid(18, 10).is_ok());
        assert!(validate_airplane_grid(99, 99).is_ok());
        assert!(validate_airplane_grid(0, 10).is_err());
        assert!(validate_airplane_grid(18, 100).is_err());
    }
}
