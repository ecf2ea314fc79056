//! RoadLocalize: health-check service.
//!
//! Initializes tracing, loads configuration (or falls back to defaults),
//! builds the service, sets up the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roadlocalize::config::{AppConfig, LoggingConfig, DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER};
use roadlocalize::http::start_server;
use roadlocalize::{create_router, AppState, LocalizeService};

/// RoadLocalize: health-check service
#[derive(Parser, Debug)]
#[command(name = "roadlocalize", version, about)]
struct Args {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "roadlocalize=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first: it decides the log format
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!(addr = DEFAULT_BIND_ADDR, "No configuration file given, using defaults"),
    }

    let mut service = LocalizeService::new();
    if let Some(service_config) = config.service.clone() {
        service.init(service_config);
    }
    tracing::info!(initialized = service.health(), "Service ready");

    let state = AppState::new(config, service);
    let app = create_router(state.clone());

    start_server(app, &state.config.http).await?;

    Ok(())
}
