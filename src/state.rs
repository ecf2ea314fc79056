//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::LocalizeService;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// The service is initialized (or not) before it is placed here and is
/// read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<LocalizeService>,
}

impl AppState {
    /// Creates a new application state from the given configuration and service.
    pub fn new(config: AppConfig, service: LocalizeService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}
