use std::sync::Arc;

use crate::config::ServerConfig;
use crate::contact::ContactDelivery;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: hearth_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Outbound contact-message delivery collaborator.
    pub contact_delivery: Arc<dyn ContactDelivery>,
}
