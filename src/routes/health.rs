//! Health check endpoint for container orchestration.
//!
//! A liveness probe only: it reports that the process can answer HTTP and
//! does not look at whether the service has been initialized.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_STATUS_OK, SERVICE_NAME};

/// JSON body for `GET /health`. Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME,
        status: HEALTH_STATUS_OK,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        let Json(body) = health().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"service":"roadlocalize","status":"ok"}"#
        );
    }
}
