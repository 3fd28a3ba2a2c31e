use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::interaction_log::InteractionLogger;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup, so concurrent
/// turns need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// Immutable career catalog, loaded once at process start.
    pub catalog: Arc<Catalog>,
    /// Pluggable interaction sink. Default: CSV file appender.
    pub logger: Arc<dyn InteractionLogger>,
    pub config: Config,
}
