//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{ConfigError, HttpServerConfig, SHUTDOWN_GRACE_SECS};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listener configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server and install SIGINT/SIGTERM handling.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone(), Duration::from_secs(SHUTDOWN_GRACE_SECS));

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// Logs the startup message once the listener is bound, so port 0 reports
/// the real port.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = listening.listening().await {
            tracing::info!(addr = %bound, "Listening on http://{}", bound);
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use crate::config::AppConfig;
    use crate::routes::create_router;
    use crate::service::LocalizeService;
    use crate::state::AppState;

    async fn raw_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_health_over_tcp() {
        let app = create_router(AppState::new(AppConfig::default(), LocalizeService::new()));
        let handle = Handle::new();
        let server = tokio::spawn(serve(app, "127.0.0.1:0".parse().unwrap(), handle.clone()));

        let addr = handle.listening().await.expect("server failed to bind");

        let response = raw_get(addr, "/health").await;
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(response.ends_with(r#"{"service":"roadlocalize","status":"ok"}"#));

        let response = raw_get(addr, "/missing").await;
        assert!(response.starts_with("HTTP/1.1 404"), "{response}");

        handle.graceful_shutdown(Some(Duration::from_secs(1)));
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_conflict_is_io_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let app = create_router(AppState::new(AppConfig::default(), LocalizeService::new()));
        let err = serve(app, addr, Handle::new()).await.unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
