//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each
//! variant maps to a numeric code, an HTTP status, and a structured
//! JSON error response, field-attributed where a single field is at
//! fault.
//!
//! The module also classifies PostgreSQL constraint violations
//! (SQLSTATE 23505 unique, 23503 foreign key, 23514 check) back into
//! structured variants by constraint name. The same foreign-key
//! constraint means different things depending on the write: on insert
//! or update it signals a missing referenced row, on delete it signals
//! a protected row that is still referenced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1003,
///     "message": "seat number must be in available range (1, 10), got 11",
///     "field": "seat"
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Field the error is attributed to, when a single field is at fault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Which kind of write produced a database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// `INSERT` or `UPDATE`: a foreign-key violation means the
    /// referenced row does not exist.
    Insert,
    /// `DELETE`: a foreign-key violation means the row is still
    /// referenced and protected from deletion.
    Delete,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status                |
/// |-----------|-----------------------|----------------------------|
/// | 1000–1999 | Validation            | 400 Bad Request            |
/// | 2000–2099 | Not Found             | 404 Not Found              |
/// | 2100–2199 | Conflict              | 409 Conflict               |
/// | 3000–3999 | Server                | 500 Internal Server Error  |
/// | 4000–4999 | Authentication        | 401 / 403                  |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No row with the requested id.
    #[error("{entity} not found")]
    NotFound {
        /// Entity that was looked up.
        entity: &'static str,
    },

    /// A unique index rejected a duplicate value.
    #[error("{entity} with this {field} already exists")]
    UniquenessViolation {
        /// Entity the duplicate was written to.
        entity: &'static str,
        /// Field (or field tuple) covered by the unique index.
        field: &'static str,
    },

    /// Route source and destination are the same airport.
    #[error("source and destination must be different")]
    SameEndpoints,

    /// Ticket row or seat outside the airplane's grid.
    #[error("{field} number must be in available range (1, {max}), got {requested}")]
    SeatOutOfRange {
        /// `"row"` or `"seat"`.
        field: &'static str,
        /// Value the caller asked for.
        requested: i32,
        /// Inclusive upper bound from the airplane.
        max: i32,
    },

    /// The (flight, row, seat) unique index rejected a double booking.
    #[error("seat {seat} in row {row} is already taken on this flight")]
    SeatTaken {
        /// Requested row.
        row: i32,
        /// Requested seat.
        seat: i32,
    },

    /// Order submitted with no tickets.
    #[error("an order must contain at least one ticket")]
    EmptyOrder,

    /// Delete refused because other rows still reference this one.
    #[error("{entity} is still referenced by at least one {blocked_by}")]
    ReferentialIntegrity {
        /// Entity the caller tried to delete.
        entity: &'static str,
        /// Entity kind holding the blocking reference.
        blocked_by: &'static str,
    },

    /// Insert or update named a foreign row that does not exist.
    #[error("referenced {entity} does not exist")]
    UnknownReference {
        /// Entity kind of the missing reference.
        entity: &'static str,
    },

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or invalid bearer token.
    #[error("missing or invalid bearer token")]
    Unauthorized,

    /// Authenticated, but the caller's role does not permit this.
    #[error("caller is not allowed to perform this operation")]
    Forbidden,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::SameEndpoints => 1002,
            Self::SeatOutOfRange { .. } => 1003,
            Self::EmptyOrder => 1004,
            Self::UnknownReference { .. } => 1005,
            Self::NotFound { .. } => 2001,
            Self::UniquenessViolation { .. } => 2101,
            Self::SeatTaken { .. } => 2102,
            Self::ReferentialIntegrity { .. } => 2103,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
            Self::Unauthorized => 4010,
            Self::Forbidden => 4030,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::SameEndpoints
            | Self::SeatOutOfRange { .. }
            | Self::EmptyOrder
            | Self::UnknownReference { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UniquenessViolation { .. }
            | Self::SeatTaken { .. }
            | Self::ReferentialIntegrity { .. } => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field this error is attributed to, when exactly one is at fault.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::UniquenessViolation { field, .. } | Self::SeatOutOfRange { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }

    /// Converts a database error from a write into a structured variant.
    ///
    /// Constraint violations are classified by name (see the migration
    /// for the full set); anything unrecognized becomes
    /// [`GatewayError::Persistence`].
    #[must_use]
    pub fn from_db(err: sqlx::Error, kind: WriteKind) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if let Some(code) = db.code() {
                if let Some(mapped) = classify_violation(code.as_ref(), db.constraint(), kind) {
                    return mapped;
                }
            }
        }
        Self::Persistence(err.to_string())
    }
}

/// Maps a (SQLSTATE, constraint name, write kind) triple to a
/// structured error. Pure so the table is testable without a database.
pub(crate) fn classify_violation(
    code: &str,
    constraint: Option<&str>,
    kind: WriteKind,
) -> Option<GatewayError> {
    match code {
        "23505" => classify_unique(constraint?),
        "23503" => classify_foreign_key(constraint?, kind),
        "23514" => classify_check(constraint?),
        _ => None,
    }
}

fn classify_unique(constraint: &str) -> Option<GatewayError> {
    let (entity, field) = match constraint {
        "airports_name_key" => ("airport", "name"),
        "airplane_types_name_key" => ("airplane type", "name"),
        "airplanes_name_key" => ("airplane", "name"),
        "routes_source_destination_key" => ("route", "source and destination"),
        "tickets_flight_row_seat_key" => ("ticket", "flight, row and seat"),
        _ => return None,
    };
    Some(GatewayError::UniquenessViolation { entity, field })
}

fn classify_foreign_key(constraint: &str, kind: WriteKind) -> Option<GatewayError> {
    // (referenced entity, referencing entity) per FK constraint.
    let (entity, blocked_by) = match constraint {
        "routes_source_fkey" | "routes_destination_fkey" => ("airport", "route"),
        "airplanes_type_fkey" => ("airplane type", "airplane"),
        "flights_route_fkey" => ("route", "flight"),
        "flights_airplane_fkey" => ("airplane", "flight"),
        "flight_crew_flight_fkey" => ("flight", "crew assignment"),
        "flight_crew_crew_fkey" => ("crew member", "flight"),
        "tickets_flight_fkey" => ("flight", "ticket"),
        "tickets_order_fkey" => ("order", "ticket"),
        _ => return None,
    };
    Some(match kind {
        WriteKind::Insert => GatewayError::UnknownReference { entity },
        WriteKind::Delete => GatewayError::ReferentialIntegrity { entity, blocked_by },
    })
}

/// CHECK constraints are backstops for the application validators, so
/// hitting one still yields a readable message rather than a 500.
fn classify_check(constraint: &str) -> Option<GatewayError> {
    let err = match constraint {
        "routes_distinct_endpoints" => GatewayError::SameEndpoints,
        "routes_distance_positive" => {
            GatewayError::InvalidRequest("distance must be positive".to_string())
        }
        "airports_name_not_blank" => {
            GatewayError::InvalidRequest("airport name must not be blank".to_string())
        }
        "airplanes_rows_range" => {
            GatewayError::InvalidRequest("rows must be between 1 and 99".to_string())
        }
        "airplanes_seats_in_row_range" => {
            GatewayError::InvalidRequest("seats_in_row must be between 1 and 99".to_string())
        }
        "tickets_row_positive" => GatewayError::InvalidRequest("row must be positive".to_string()),
        "tickets_seat_positive" => {
            GatewayError::InvalidRequest("seat must be positive".to_string())
        }
        _ => return None,
    };
    Some(err)
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                field: self.field().map(str::to_string),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_request() {
        assert_eq!(
            GatewayError::SameEndpoints.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::EmptyOrder.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::SeatOutOfRange {
                field: "seat",
                requested: 11,
                max: 10
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn conflicts_are_409() {
        assert_eq!(
            GatewayError::SeatTaken { row: 1, seat: 1 }.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GatewayError::UniquenessViolation {
                entity: "airport",
                field: "name"
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GatewayError::ReferentialIntegrity {
                entity: "airport",
                blocked_by: "route"
            }
            .status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn unique_airport_name_maps_to_uniqueness_violation() {
        let mapped = classify_violation("23505", Some("airports_name_key"), WriteKind::Insert);
        let Some(GatewayError::UniquenessViolation { entity, field }) = mapped else {
            panic!("expected uniqueness violation");
        };
        assert_eq!(entity, "airport");
        assert_eq!(field, "name");
    }

    #[test]
    fn seat_unique_index_maps_to_ticket_conflict() {
        let mapped = classify_violation(
            "23505",
            Some("tickets_flight_row_seat_key"),
            WriteKind::Insert,
        );
        assert!(matches!(
            mapped,
            Some(GatewayError::UniquenessViolation {
                entity: "ticket",
                ..
            })
        ));
    }

    #[test]
    fn fk_violation_on_insert_is_unknown_reference() {
        let mapped = classify_violation("23503", Some("flights_route_fkey"), WriteKind::Insert);
        assert!(matches!(
            mapped,
            Some(GatewayError::UnknownReference { entity: "route" })
        ));
    }

    #[test]
    fn fk_violation_on_delete_is_protected() {
        let mapped = classify_violation("23503", Some("routes_source_fkey"), WriteKind::Delete);
        let Some(GatewayError::ReferentialIntegrity { entity, blocked_by }) = mapped else {
            panic!("expected referential integrity error");
        };
        assert_eq!(entity, "airport");
        assert_eq!(blocked_by, "route");
    }

    #[test]
    fn crew_delete_blocked_by_flight_assignment() {
        let mapped = classify_violation("23503", Some("flight_crew_crew_fkey"), WriteKind::Delete);
        assert!(matches!(
            mapped,
            Some(GatewayError::ReferentialIntegrity {
                entity: "crew member",
                blocked_by: "flight"
            })
        ));
    }

    #[test]
    fn check_constraints_stay_readable() {
        assert!(matches!(
            classify_violation("23514", Some("routes_distinct_endpoints"), WriteKind::Insert),
            Some(GatewayError::SameEndpoints)
        ));
    }

    #[test]
    fn unknown_constraint_is_not_classified() {
        assert!(classify_violation("23505", Some("mystery_key"), WriteKind::Insert).is_none());
        assert!(classify_violation("42P01", None, WriteKind::Insert).is_none());
    }

    #[test]
    fn response_body_carries_field_attribution() {
        let err = GatewayError::SeatOutOfRange {
            field: "seat",
            requested: 11,
            max: 10,
        };
        let body = ErrorBody {
            code: err.error_code(),
            message: err.to_string(),
            field: err.field().map(str::to_string),
        };
        let Some(json) = serde_json::to_value(&body).ok() else {
            panic!("serialization failed");
        };
        assert_eq!(json["code"], 1003);
        assert_eq!(json["field"], "seat");
        assert_eq!(
            json["message"],
            "seat number must be in available range (1, 10), got 11"
        );
    }

    #[test]
    fn field_is_omitted_when_absent() {
        let body = ErrorBody {
            code: 2001,
            message: "airport not found".to_string(),
            field: None,
        };
        let Some(json) = serde_json::to_value(&body).ok() else {
            panic!("serialization failed");
        };
        assert!(json.get("field").is_none());
    }
}
