//! Search MCP server entry point.
//!
//! Loads configuration, initializes logging on stderr (stdout belongs to
//! the stdio transport) and serves the search tools on the configured
//! transport until the client disconnects.

use anyhow::{Context, Result};
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use search_mcp_server::core::config::API_KEY_ENV;
use search_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if config.search.api_key.is_none() {
        warn!("{} is not set - every search tool call will fail", API_KEY_ENV);
    }

    let transport = TransportService::new(config.transport.clone());

    let server = McpServer::new(config).context("failed to initialize server")?;
    info!("Server initialized");

    if let Err(e) = transport.run(server).await {
        error!("Transport failed: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honored on top of the configured level.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
