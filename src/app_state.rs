//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::persistence::PostgresStore;
use crate::service::BookingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor. Cheap to clone: the store wraps a pooled
/// connection handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relational store for all entity reads and writes.
    pub store: PostgresStore,
    /// Order orchestration (the one multi-row transactional operation).
    pub booking: BookingService,
    /// Gateway configuration (auth secret, bind address).
    pub config: Arc<GatewayConfig>,
}
