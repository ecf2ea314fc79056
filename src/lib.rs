//! RoadLocalize - health-check service skeleton.
//!
//! Serves a static `GET /health` endpoint and carries a placeholder
//! [`LocalizeService`] whose only state is an optional endpoint/timeout record.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::ConfigurationError;
pub use response::ApiResponse;
pub use routes::create_router;
pub use service::{LocalizeService, ServiceConfig};
pub use state::AppState;
