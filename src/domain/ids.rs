//! Type-safe entity identifiers.
//!
//! Every entity is keyed by a UUID v4. Each table gets its own newtype
//! so that, for example, a route's source airport cannot be confused
//! with an airplane id at a call site. The newtypes are transparent for
//! serde, sqlx, and OpenAPI schemas.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Creates a new random identifier (UUID v4).
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wraps an existing [`uuid::Uuid`].
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner [`uuid::Uuid`].
            #[must_use]
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Unique identifier for an airport.
    AirportId
);
entity_id!(
    /// Unique identifier for a route between two airports.
    RouteId
);
entity_id!(
    /// Unique identifier for an airplane type.
    AirplaneTypeId
);
entity_id!(
    /// Unique identifier for an airplane.
    AirplaneId
);
entity_id!(
    /// Unique identifier for a crew member.
    CrewId
);
entity_id!(
    /// Unique identifier for a scheduled flight.
    FlightId
);
entity_id!(
    /// Unique identifier for a ticket order.
    OrderId
);
entity_id!(
    /// Unique identifier for a single ticket within an order.
    TicketId
);
entity_id!(
    /// Identifier of an authenticated user (the JWT subject). User
    /// accounts live in the external identity provider; the gateway
    /// only stores this reference on orders.
    UserId
);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = FlightId::new();
        let b = FlightId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_uuid_format() {
        let id = AirportId::new();
        let s = format!("{id}");
        assert_eq!(s.len(), 36); // UUID string length
        assert!(s.contains('-'));
    }

    #[test]
    fn serde_is_transparent() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, format!("\"{id}\""));
        let Some(back) = serde_json::from_str::<OrderId>(&json).ok() else {
            panic!("deserialization failed");
        };
        assert_eq!(id, back);
    }

    #[test]
    fn from_uuid_round_trip() {
        let uuid = uuid::Uuid::new_v4();
        let id = RouteId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(uuid::Uuid::from(id), uuid);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = CrewId::new();
        let mut map = HashMap::new();
        map.insert(id, "assigned");
        assert_eq!(map.get(&id), Some(&"assigned"));
    }
}
