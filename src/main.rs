//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, checks the Golf Genius API key
//! and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use golf_genius_mcp_server::core::{ApiClient, Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from .env and environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // No key, no tools
    let api_key = match config.require_api_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: GOLF_GENIUS_API_KEY environment variable is not set.");
            std::process::exit(1);
        }
    };

    let client = ApiClient::from_config(&config.api, &api_key);
    info!(
        "Golf Genius API: {}/{} (auth mode: {:?})",
        config.api.base_url, config.api.api_prefix, config.api.auth_mode
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, client);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
