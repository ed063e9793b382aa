//! Bearer-token authentication and role middleware.
//!
//! The gateway does not manage accounts or issue tokens; an external
//! identity service signs HS256 JWTs with a shared secret. Reads are
//! anonymous, administrative writes require the `admin` role, and
//! order operations require the `customer` role (elevated callers have
//! no orders of their own to operate on).

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::UserId;
use crate::error::GatewayError;

/// Caller role carried in the JWT `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Elevated caller; may mutate reference data and schedules.
    Admin,
    /// End user; may create and list their own orders.
    Customer,
}

/// Claims for gateway access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id at the identity service.
    pub sub: uuid::Uuid,
    /// Email, for audit logs only.
    pub email: String,
    /// Caller role.
    pub role: Role,
    /// Expiry as a Unix timestamp.
    pub exp: usize,
}

/// Authenticated caller, injected into request extensions by the
/// middleware below.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User id taken from the token subject.
    pub id: UserId,
    /// Verified role.
    pub role: Role,
}

/// Decodes and verifies a bearer token against the shared secret.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] on any signature, expiry, or
/// shape problem; callers get no further detail.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, GatewayError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| GatewayError::Unauthorized)
}

fn bearer_token(req: &Request) -> Result<&str, GatewayError> {
    req.headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(GatewayError::Unauthorized)
}

async fn authorize(
    state: AppState,
    mut req: Request,
    next: Next,
    required: Role,
) -> Result<Response, GatewayError> {
    let claims = decode_token(bearer_token(&req)?, &state.config.jwt_secret)?;
    if claims.role != required {
        return Err(GatewayError::Forbidden);
    }
    req.extensions_mut().insert(AuthUser {
        id: UserId::from_uuid(claims.sub),
        role: claims.role,
    });
    Ok(next.run(req).await)
}

/// Middleware for administrative write endpoints.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a valid token and
/// [`GatewayError::Forbidden`] for non-admin callers.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    authorize(state, req, next, Role::Admin).await
}

/// Middleware for order endpoints (authenticated, non-elevated callers
/// scoped to their own orders).
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a valid token and
/// [`GatewayError::Forbidden`] for non-customer callers.
pub async fn require_customer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    authorize(state, req, next, Role::Customer).await
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn issue(role: Role, secret: &str) -> String {
        let claims = Claims {
            sub: uuid::Uuid::new_v4(),
            email: "pilot@example.com".to_string(),
            role,
            exp: usize::try_from(chrono::Utc::now().timestamp() + 3600).unwrap_or(usize::MAX),
        };
        let Some(token) = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .ok() else {
            panic!("token encoding failed");
        };
        token
    }

    #[test]
    fn decode_accepts_valid_token() {
        let token = issue(Role::Customer, SECRET);
        let Some(claims) = decode_token(&token, SECRET).ok() else {
            panic!("expected valid token");
        };
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.email, "pilot@example.com");
    }

    #[test]
    fn decode_rejects_wrong_secret() {
        let token = issue(Role::Admin, SECRET);
        let result = decode_token(&token, "other-secret");
        assert!(matches!(result, Err(GatewayError::Unauthorized)));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_token("not-a-jwt", SECRET),
            Err(GatewayError::Unauthorized)
        ));
    }

    #[test]
    fn decode_rejects_expired_token() {
        let claims = Claims {
            sub: uuid::Uuid::new_v4(),
            email: "late@example.com".to_string(),
            role: Role::Customer,
            exp: 1, // 1970
        };
        let Some(token) = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .ok() else {
            panic!("token encoding failed");
        };
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(GatewayError::Unauthorized)
        ));
    }

    #[test]
    fn role_serializes_lowercase() {
        let Some(json) = serde_json::to_string(&Role::Admin).ok() else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"admin\"");
        let Some(back) = serde_json::from_str::<Role>("\"customer\"").ok() else {
            panic!("deserialization failed");
        };
        assert_eq!(back, Role::Customer);
    }
}
