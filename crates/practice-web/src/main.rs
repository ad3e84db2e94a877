//! Web server for the practice journal
#![forbid(unsafe_code)]

use practice_core::{Config, init_logging};
use practice_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {e}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        backend = %config.backend.api_root(),
        "Starting practice journal web server on {}",
        config.bind_address()
    );

    let app = build_app(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
